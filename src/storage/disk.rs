//! Local-disk storage backend
//!
//! Files live directly under the configured root directory. Names are
//! validated before touching the filesystem so a request can never escape
//! the root.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use super::{Storage, StorageError};

/// Disk-backed store rooted at a single directory.
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    /// Open (and create if missing) the storage root.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Resolve a relative name to a path under the root.
    ///
    /// Rejects empty names, absolute paths and any `..` component.
    fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        if name.is_empty() {
            return Err(StorageError::InvalidName("empty name".to_string()));
        }
        let candidate = Path::new(name);
        let traversal = candidate
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if candidate.is_absolute() || traversal {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(candidate))
    }
}

impl Storage for DiskStorage {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).map_or(false, |path| path.is_file())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                // Skip names that are not valid UTF-8 rather than mangling them
                if let Ok(name) = entry.file_name().into_string() {
                    names.push(name);
                }
            }
        }
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        let path = self.resolve(name)?;
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Io(e),
        })
    }

    fn write(&self, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn create_new(&self, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists,
                _ => StorageError::Io(e),
            })?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        std::fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Io(e),
        })
    }
}
