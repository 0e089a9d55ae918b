use std::path::{Path, PathBuf};

use super::VersionControl;
use crate::error::{Error, Result};
use crate::utils::command;

/// `git` CLI working in a single repository checkout.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Open the repository that contains `path`.
    pub fn discover(path: &Path) -> Result<Self> {
        let root = get_git_root(path).ok_or_else(|| {
            Error::git_command_failed(format!("{} is not inside a git repository", path.display()))
                .with_hint("Run the command from inside the icon repository checkout")
        })?;
        Ok(Self::new(root))
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str], context: &str) -> Result<String> {
        command::run_in(&self.workdir, "git", args, context)
            .map_err(|e| Error::git_command_failed(error_message(&e)))
    }
}

impl VersionControl for Git {
    fn move_path(&self, from: &Path, to: &Path) -> Result<()> {
        let from = absolute(from)?;
        let to = absolute(to)?;
        let from = from.to_string_lossy();
        let to = to.to_string_lossy();
        self.run(&["mv", "--", from.as_ref(), to.as_ref()], "git mv")?;
        Ok(())
    }

    fn stage(&self, path: &Path) -> Result<()> {
        let path = absolute(path)?;
        let path = path.to_string_lossy();
        self.run(&["add", "--", path.as_ref()], "git add")?;
        Ok(())
    }
}

/// Anchor `path` at the process working directory; git itself runs from the
/// repository root.
fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("resolve {}", path.display())),
        )
    })
}

fn error_message(err: &Error) -> String {
    err.details
        .get("error")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| err.message.clone())
}

/// Get the root directory of a git repository containing the given path.
/// Returns None if the path is not within a git repository.
pub fn get_git_root(path: &Path) -> Option<PathBuf> {
    command::run_in_optional(path, "git", &["rev-parse", "--show-toplevel"]).map(PathBuf::from)
}

pub fn is_git_repo(path: &Path) -> bool {
    command::succeeded_in(path, "git", &["rev-parse", "--git-dir"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_outside_repo_is_git_error() {
        let dir = tempdir().unwrap();
        if is_git_repo(dir.path()) {
            // Temp dir lives inside a checkout on this machine.
            return;
        }
        let err = Git::discover(dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "git.command_failed");
    }

    #[test]
    fn absolute_anchors_relative_paths_at_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            absolute(Path::new("icons/home.svg")).unwrap(),
            cwd.join("icons/home.svg")
        );
        assert_eq!(
            absolute(Path::new("/repo/icons/home.svg")).unwrap(),
            PathBuf::from("/repo/icons/home.svg")
        );
    }

    #[test]
    fn move_outside_repo_fails_with_git_error() {
        let dir = tempdir().unwrap();
        if is_git_repo(dir.path()) {
            return;
        }
        std::fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();

        let git = Git::new(dir.path());
        let err = git
            .move_path(&dir.path().join("a.svg"), &dir.path().join("b.svg"))
            .unwrap_err();

        assert_eq!(err.code.as_str(), "git.command_failed");
        assert!(dir.path().join("a.svg").exists());
    }
}
