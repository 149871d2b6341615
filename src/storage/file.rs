//! File-backed storage backend.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{PreferenceStorage, StorageError};

/// A backend persisting entries as one JSON object on disk.
///
/// The file holds a flat string-to-string map, so the preference can share a
/// settings file with other keys. A missing file reads as empty; a file that
/// exists but does not parse is a read error, which the store recovers from
/// by treating the preference as absent.
///
/// # Example
///
/// ```rust,no_run
/// use duotone::{JsonFileStorage, OsScheme, ThemeStore};
///
/// let storage = JsonFileStorage::new("settings.json");
/// let store = ThemeStore::initialize(storage, OsScheme::new());
/// println!("dark mode: {}", store.mode().is_dark());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend over `path`. The file is not touched until the
    /// first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Read-modify-write keeps unrelated keys in the file intact.
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            // Nothing decodable on disk means nothing to remove.
            Err(StorageError::Malformed(_)) => return Ok(()),
            Err(err) => return Err(err),
        };
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("settings.json"));
        assert_eq!(storage.read("darkMode").unwrap(), None);
    }

    #[test]
    fn test_write_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut storage = JsonFileStorage::new(&path);
        storage.write("darkMode", "true").unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.read("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_write_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("settings.json"));

        storage.write("fontSize", "14").unwrap();
        storage.write("darkMode", "false").unwrap();

        assert_eq!(storage.read("fontSize").unwrap().as_deref(), Some("14"));
        assert_eq!(storage.read("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_malformed_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json at all").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(
            storage.read("darkMode"),
            Err(StorageError::Malformed(_))
        ));
    }

    #[test]
    fn test_remove_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonFileStorage::new(dir.path().join("settings.json"));

        storage.write("darkMode", "true").unwrap();
        storage.remove("darkMode").unwrap();
        assert_eq!(storage.read("darkMode").unwrap(), None);

        // Removing again is a no-op.
        storage.remove("darkMode").unwrap();
    }
}
