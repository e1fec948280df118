// Application state module
// Immutable configuration plus the injected storage backend

use std::sync::Arc;

use crate::storage::{DiskStorage, Storage, StorageError};

use super::types::Config;

/// Shared application state, one instance for the whole server.
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    /// Build state with a disk backend rooted at `storage.root`.
    pub fn new(config: Config) -> Result<Self, StorageError> {
        let storage = Arc::new(DiskStorage::new(config.storage.root.clone())?);
        Ok(Self { config, storage })
    }

    /// Build state over an arbitrary backend (tests use the in-memory one).
    #[cfg(test)]
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }
}
