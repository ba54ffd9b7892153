//! Storage - Key-value persistence backends.
//!
//! The store only needs string values under string keys, the same contract
//! browser local storage offers. Writes are full overwrites; the last write
//! wins.
//!
//! ## Example
//!
//! ```ignore
//! use softinv::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let storage = InMemoryKeyValueStore::new();
//! storage.set("softinv-warehouses", "[]")?;
//! assert_eq!(storage.get("softinv-warehouses")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;

use crate::error::StorageError;

/// Abstract string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`. Returns None if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub use file::JsonFileStore;
pub use in_memory::InMemoryKeyValueStore;
