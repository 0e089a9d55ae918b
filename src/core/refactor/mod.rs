//! Structural changes to the icon tree.
//!
//! Currently a single operation: renaming an icon while keeping its old name
//! resolvable through the metadata alias list.

mod rename;

pub use rename::{
    rename_icon, validate_rename, FileRename, IconPaths, NextSteps, RenameOptions, RenameResult,
};
