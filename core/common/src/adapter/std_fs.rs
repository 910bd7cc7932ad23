//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path)
            .map_err(|e| Error::io_msg(format!("Failed to read '{}': {}", path.display(), e)))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents)
            .map_err(|e| Error::io_msg(format!("Failed to write '{}': {}", path.display(), e)))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to).map_err(|e| {
            Error::io_msg(format!(
                "Failed to rename '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!("Failed to get metadata for '{}': {}", path.display(), e))
        })?;
        Ok(FileMetadata::new(m.len(), m.is_file()))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_read_and_append() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.txt");
        let fs = StdFileSystem;
        fs.write(&path, "one\n").unwrap();
        {
            let mut w = fs.open_append(&path).unwrap();
            w.write_all(b"two\n").unwrap();
        }
        assert_eq!(fs.read_to_string(&path).unwrap(), "one\ntwo\n");
        let meta = fs.metadata(&path).unwrap();
        assert!(meta.is_file());
        assert!(!meta.is_empty());
        assert!(fs.exists(&path));
        assert!(!fs.exists(&tmp.path().join("missing")));
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = StdFileSystem
            .read_to_string(&tmp.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }
}
