use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

/// Entry returned from directory listing
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    /// Extension match, given with or without the leading dot.
    pub fn has_extension(&self, extension: &str) -> bool {
        let wanted = extension.trim_start_matches('.');
        !self.is_dir && self.path.extension().is_some_and(|ext| ext == wanted)
    }
}

/// Storage the icon tools read from and write to, keyed by path.
pub trait FileSystem {
    fn read(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    fn append(&self, path: &Path, content: &str) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn list(&self, dir: &Path) -> Result<Vec<Entry>>;
    fn delete(&self, path: &Path) -> Result<()>;
    fn ensure_dir(&self, dir: &Path) -> Result<()>;

    /// Files in `dir` with the given extension, sorted by path.
    fn list_with_extension(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = self
            .list(dir)?
            .into_iter()
            .filter(|entry| entry.has_extension(extension))
            .map(|entry| entry.path)
            .collect();
        paths.sort();
        Ok(paths)
    }
}

/// Local filesystem implementation
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> Result<String> {
        io::read_file(path, "read file")
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        io::write_file_atomic(path, content, "write file")
    }

    fn append(&self, path: &Path, content: &str) -> Result<()> {
        io::append_file(path, content, "append file")
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list(&self, dir: &Path) -> Result<Vec<Entry>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir)
            .map_err(|e| Error::internal_io(e.to_string(), Some("list directory".to_string())))?;

        let mut result = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_dir = path.is_dir();
            result.push(Entry { path, is_dir });
        }

        Ok(result)
    }

    fn delete(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(Error::internal_io(
                format!("File not found: {}", path.display()),
                Some("delete file".to_string()),
            ));
        }

        fs::remove_file(path)
            .map_err(|e| Error::internal_io(e.to_string(), Some("delete file".to_string())))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                Error::internal_io(e.to_string(), Some("create directory".to_string()))
            })?;
        }
        Ok(())
    }
}

/// Convenience function to get local filesystem
pub fn local() -> LocalFs {
    LocalFs::new()
}

/// Truncate a file to empty, creating it (and its directory) if needed.
pub fn reset_file(fs: &dyn FileSystem, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs.ensure_dir(parent)?;
    }
    fs.write(path, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_local_fs_write_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");
        let fs = local();

        fs.write(&path, "hello world").unwrap();
        let content = fs.read(&path).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_local_fs_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.ts");
        let fs = local();

        fs.write(&path, "a;\n").unwrap();
        fs.append(&path, "b;\n").unwrap();
        assert_eq!(fs.read(&path).unwrap(), "a;\nb;\n");
    }

    #[test]
    fn test_local_fs_list_with_extension() {
        let dir = tempdir().unwrap();
        let fs = local();

        fs.write(&dir.path().join("b.svg"), "<svg/>").unwrap();
        fs.write(&dir.path().join("a.svg"), "<svg/>").unwrap();
        fs.write(&dir.path().join("a.json"), "{}").unwrap();
        fs.ensure_dir(&dir.path().join("nested.svg")).unwrap();

        let entries = fs.list(dir.path()).unwrap();
        assert_eq!(entries.len(), 4);

        let svgs = fs.list_with_extension(dir.path(), ".svg").unwrap();
        let names: Vec<_> = svgs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.svg", "b.svg"]);
    }

    #[test]
    fn test_local_fs_list_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let entries = local().list(&dir.path().join("missing")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_local_fs_delete() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("delete_me.txt");
        let fs = local();

        fs.write(&path, "content").unwrap();
        assert!(fs.exists(&path));

        fs.delete(&path).unwrap();
        assert!(!fs.exists(&path));
    }

    #[test]
    fn test_reset_file_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("icons.ts");
        let fs = local();

        reset_file(&fs, &path).unwrap();
        assert_eq!(fs.read(&path).unwrap(), "");

        fs.append(&path, "x").unwrap();
        reset_file(&fs, &path).unwrap();
        assert_eq!(fs.read(&path).unwrap(), "");
    }
}
