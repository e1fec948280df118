//! Storage backend module
//!
//! All three resource families address files by relative name under a single
//! storage root. The backend is injected as a trait object so handlers can be
//! exercised against an in-memory fake.

pub mod disk;
#[cfg(test)]
pub mod memory;

pub use disk::DiskStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found")]
    NotFound,

    #[error("file already exists")]
    AlreadyExists,

    #[error("invalid file name: {0}")]
    InvalidName(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat key/blob store over a single namespace.
///
/// `create_new` is the exclusive-create primitive: it fails with
/// `AlreadyExists` instead of overwriting, so create endpoints do not need a
/// separate exists-then-write sequence.
pub trait Storage: Send + Sync {
    /// Whether `name` currently holds a file.
    fn exists(&self, name: &str) -> bool;

    /// All file names in the root, in backend order.
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Content of `name` as text. Fails with `NotFound` when absent.
    fn read(&self, name: &str) -> Result<String, StorageError>;

    /// Write `content` to `name`, creating or overwriting.
    fn write(&self, name: &str, content: &str) -> Result<(), StorageError>;

    /// Write `content` to `name` only if the name is free.
    fn create_new(&self, name: &str, content: &str) -> Result<(), StorageError>;

    /// Remove `name`. Fails with `NotFound` when absent.
    fn delete(&self, name: &str) -> Result<(), StorageError>;
}
