//! Generic utility primitives with zero domain knowledge.
//!
//! - `case` - Icon name casing and validation
//! - `command` - Command execution with error handling
//! - `io` - File I/O with consistent error handling
//! - `sequence` - Pure shuffle and merge helpers

pub mod case;
pub mod command;
pub mod io;
pub mod sequence;
