//! Persistence backends for the theme preference.
//!
//! This module provides:
//!
//! - [`PreferenceStorage`]: the backend trait the store writes through
//! - [`MemoryStorage`]: a shared-handle in-memory backend
//! - [`JsonFileStorage`]: a JSON-object file on disk
//! - [`StorageError`]: errors from backend I/O
//!
//! Backends deal in raw string values; (de)serialization of the preference
//! itself happens in [`crate::StoredPreference`]. The store treats every
//! storage failure as recoverable: reads fall back to "no override" and
//! failed writes leave the in-memory mode authoritative.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Error returned by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file or device I/O failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing data exists but could not be decoded.
    #[error("storage contents are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The backend refused the operation (e.g. quota exhausted).
    #[error("storage backend rejected the operation: {0}")]
    Backend(String),
}

/// Key-value persistence for the theme preference.
///
/// One fixed key ([`crate::PREFERENCE_KEY`]) is ever used by the store, but
/// the trait is keyed so a backend can share a file or namespace with other
/// settings.
pub trait PreferenceStorage {
    /// Reads the raw value under `key`; `Ok(None)` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value under `key`; removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
