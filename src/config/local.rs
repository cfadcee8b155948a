use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem storage. Writes go through a temp file in the destination
/// directory and are renamed into place.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => EtlError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => EtlError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let unwritable = |source: std::io::Error| EtlError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        };

        // 不自動建立上層目錄
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent).map_err(unwritable)?;
        temp.write_all(data).map_err(unwritable)?;
        temp.as_file().sync_all().map_err(unwritable)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = match fs::metadata(path) {
                Ok(existing) => existing.permissions().mode() & 0o7777,
                Err(_) => 0o644,
            };
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(mode))
                .map_err(unwritable)?;
        }

        temp.persist(path).map_err(|e| unwritable(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = LocalStorage::new()
            .read_file(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, EtlError::InputNotFound { .. }));
    }

    #[test]
    fn test_read_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let err = LocalStorage::new().read_file(dir.path()).unwrap_err();

        assert!(matches!(err, EtlError::InputUnreadable { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let storage = LocalStorage::new();

        storage.write_file(&path, b",year\n0,2002\n").unwrap();
        assert_eq!(storage.read_file(&path).unwrap(), b",year\n0,2002\n");

        // 覆寫既有檔案
        storage.write_file(&path, b",year\n").unwrap();
        assert_eq!(storage.read_file(&path).unwrap(), b",year\n");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");

        let err = LocalStorage::new().write_file(&path, b"x").unwrap_err();
        assert!(matches!(err, EtlError::OutputUnwritable { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();

        assert!(LocalStorage::new().write_file(&target, b"x").is_err());
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
