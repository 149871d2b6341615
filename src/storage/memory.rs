//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{PreferenceStorage, StorageError};

/// A shared-handle in-memory backend.
///
/// Cloning yields a handle onto the same entries, so two stores constructed
/// from clones of one `MemoryStorage` observe each other's writes, the way
/// two browser tabs share localStorage. This is the default backend for
/// tests and for hosts that keep the preference for the process lifetime
/// only.
///
/// # Example
///
/// ```rust
/// use duotone::{MemoryStorage, PreferenceStorage};
///
/// let mut storage = MemoryStorage::new();
/// storage.write("darkMode", "true").unwrap();
///
/// let other = storage.clone();
/// assert_eq!(other.read("darkMode").unwrap().as_deref(), Some("true"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("darkMode").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut storage = MemoryStorage::new();
        storage.write("darkMode", "false").unwrap();
        assert_eq!(storage.read("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_clones_share_entries() {
        let mut storage = MemoryStorage::new();
        let reader = storage.clone();

        storage.write("darkMode", "true").unwrap();
        assert_eq!(reader.read("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut storage = MemoryStorage::new();
        storage.write("darkMode", "true").unwrap();
        storage.remove("darkMode").unwrap();
        storage.remove("darkMode").unwrap();
        assert_eq!(storage.read("darkMode").unwrap(), None);
    }
}
