//! In-memory storage backend
//!
//! Backs handler tests without a disk root. Listing order is the sorted
//! key order of the map, which keeps test assertions deterministic.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{Storage, StorageError};

/// Map-backed store. Cheap to construct per test.
#[derive(Default)]
pub struct MemoryStorage {
    files: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, name: &str) -> bool {
        self.files.lock().expect("storage lock").contains_key(name)
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .files
            .lock()
            .expect("storage lock")
            .keys()
            .cloned()
            .collect())
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        self.files
            .lock()
            .expect("storage lock")
            .get(name)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn write(&self, name: &str, content: &str) -> Result<(), StorageError> {
        self.files
            .lock()
            .expect("storage lock")
            .insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn create_new(&self, name: &str, content: &str) -> Result<(), StorageError> {
        let mut files = self.files.lock().expect("storage lock");
        if files.contains_key(name) {
            return Err(StorageError::AlreadyExists);
        }
        files.insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        self.files
            .lock()
            .expect("storage lock")
            .remove(name)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorage::new();
        storage.create_new("file1.txt", "Content 1").unwrap();
        assert!(storage.exists("file1.txt"));
        assert_eq!(storage.read("file1.txt").unwrap(), "Content 1");

        storage.write("file1.txt", "Content 2").unwrap();
        assert_eq!(storage.read("file1.txt").unwrap(), "Content 2");

        storage.delete("file1.txt").unwrap();
        assert!(!storage.exists("file1.txt"));
        assert!(matches!(storage.read("file1.txt"), Err(StorageError::NotFound)));
    }

    #[test]
    fn test_create_new_keeps_existing() {
        let storage = MemoryStorage::new();
        storage.create_new("a.txt", "x").unwrap();
        assert!(matches!(
            storage.create_new("a.txt", "y"),
            Err(StorageError::AlreadyExists)
        ));
        assert_eq!(storage.read("a.txt").unwrap(), "x");
    }

    #[test]
    fn test_list_is_sorted() {
        let storage = MemoryStorage::new();
        storage.write("b.csv", "").unwrap();
        storage.write("a.txt", "").unwrap();
        assert_eq!(storage.list().unwrap(), vec!["a.txt", "b.csv"]);
    }
}
