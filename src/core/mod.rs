// Public modules
pub mod error;
pub mod fingerprint;
pub mod git;
pub mod local_files;
pub mod metadata;
pub mod refactor;
pub mod svg;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
