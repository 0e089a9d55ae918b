mod primitives;

pub use primitives::*;

use std::path::Path;

use crate::error::Result;

/// History-preserving moves and staging for the asset tree.
///
/// The icon tools never commit or push; they only leave changes staged.
pub trait VersionControl {
    /// Rename a tracked file so history records a rename, not delete + add.
    fn move_path(&self, from: &Path, to: &Path) -> Result<()>;
    /// Mark a file's current content for the next commit.
    fn stage(&self, path: &Path) -> Result<()>;
}
