//! Icon rename workflow: move an icon's artwork and metadata to a new name
//! under version control and keep the old name resolvable as an alias.
//!
//! 1. Validate names and preconditions (no mutation on failure)
//! 2. Move `<old>.svg` and `<old>.json` through version control
//! 3. Migrate the alias list and rewrite the metadata
//! 4. Stage the rewritten metadata
//!
//! Nothing is rolled back: a failure after step 1 leaves the tree partially
//! renamed and the error is returned as-is.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, IconFileKind, Result};
use crate::git::VersionControl;
use crate::local_files::FileSystem;
use crate::metadata::{self, IconMetadata};
use crate::svg;
use crate::utils::case::validate_icon_name;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Print progress and next steps to stderr.
    pub log_info: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self { log_info: true }
    }
}

/// The two files that make up one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub artwork: PathBuf,
    pub metadata: PathBuf,
}

impl IconPaths {
    pub fn new(icons_dir: &Path, name: &str) -> Self {
        Self {
            artwork: svg::svg_path(icons_dir, name),
            metadata: metadata::metadata_path(icons_dir, name),
        }
    }
}

/// A file move performed by the workflow.
#[derive(Debug, Clone, Serialize)]
pub struct FileRename {
    pub from: String,
    pub to: String,
}

impl FileRename {
    fn new(from: &Path, to: &Path) -> Self {
        Self {
            from: from.display().to_string(),
            to: to.display().to_string(),
        }
    }
}

/// Suggested follow-up for the operator. Advisory only.
#[derive(Debug, Clone, Serialize)]
pub struct NextSteps {
    pub branch: String,
    pub commit_message: String,
    pub pr_title: String,
}

impl NextSteps {
    pub fn for_rename(old_name: &str, new_name: &str) -> Self {
        let summary = format!("Renamed {} to {}", old_name, new_name);
        Self {
            branch: format!("rename/{}-to-{}", old_name, new_name),
            commit_message: summary.clone(),
            pr_title: summary,
        }
    }

    pub fn commands(&self) -> Vec<String> {
        vec![
            format!("git checkout -b {}", self.branch),
            format!("git commit -m '{}'", self.commit_message),
            format!("gh pr create --title '{}'", self.pr_title),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameResult {
    pub old_name: String,
    pub new_name: String,
    pub artwork: FileRename,
    pub metadata: FileRename,
    /// Alias list as written; empty when the field was removed.
    pub aliases: Vec<String>,
    pub next_steps: NextSteps,
}

// ============================================================================
// Validation
// ============================================================================

/// Check every precondition, in order, without touching the tree.
///
/// Returns the old and new paths once the rename is known to be safe.
pub fn validate_rename(
    fs: &dyn FileSystem,
    icons_dir: &Path,
    old_name: &str,
    new_name: &str,
) -> Result<(IconPaths, IconPaths)> {
    validate_icon_name(old_name, "old_name")?;
    validate_icon_name(new_name, "new_name")?;
    if old_name == new_name {
        return Err(Error::validation_invalid_argument(
            "new_name",
            "New name must differ from the old name",
            Some(new_name.to_string()),
        ));
    }

    let old = IconPaths::new(icons_dir, old_name);
    let new = IconPaths::new(icons_dir, new_name);

    if fs.exists(&new.artwork) {
        return Err(Error::icon_already_exists(
            IconFileKind::Artwork,
            new.artwork.display().to_string(),
        ));
    }
    if fs.exists(&new.metadata) {
        return Err(Error::icon_already_exists(
            IconFileKind::Metadata,
            new.metadata.display().to_string(),
        ));
    }
    if !fs.exists(&old.artwork) {
        return Err(Error::icon_not_found(
            IconFileKind::Artwork,
            old.artwork.display().to_string(),
        ));
    }
    if !fs.exists(&old.metadata) {
        return Err(Error::icon_not_found(
            IconFileKind::Metadata,
            old.metadata.display().to_string(),
        ));
    }

    // Parse up front so bad metadata cannot leave a half-renamed icon.
    metadata::read_metadata_file(fs, &old.metadata)?;

    Ok((old, new))
}

// ============================================================================
// Workflow
// ============================================================================

pub fn rename_icon(
    fs: &dyn FileSystem,
    vcs: &dyn VersionControl,
    icons_dir: &Path,
    old_name: &str,
    new_name: &str,
    options: &RenameOptions,
) -> Result<RenameResult> {
    let (old, new) = validate_rename(fs, icons_dir, old_name, new_name)?;

    if options.log_info {
        crate::log_status!("rename", "Renaming {} to {}", old_name, new_name);
    }

    vcs.move_path(&old.artwork, &new.artwork)?;
    vcs.move_path(&old.metadata, &new.metadata)?;

    let mut icon_metadata: IconMetadata = metadata::read_metadata_file(fs, &new.metadata)?;
    icon_metadata.migrate_aliases(old_name, new_name);
    metadata::write_metadata(fs, &new.metadata, &icon_metadata)?;

    vcs.stage(&new.metadata)?;

    let next_steps = NextSteps::for_rename(old_name, new_name);
    if options.log_info {
        crate::log_status!("rename", "Done. Next steps:");
        for command in next_steps.commands() {
            crate::log_status!("rename", "  {}", command);
        }
    }

    Ok(RenameResult {
        old_name: old_name.to_string(),
        new_name: new_name.to_string(),
        artwork: FileRename::new(&old.artwork, &new.artwork),
        metadata: FileRename::new(&old.metadata, &new.metadata),
        aliases: icon_metadata.aliases().unwrap_or_default(),
        next_steps,
    })
}
