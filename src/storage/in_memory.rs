//! InMemoryKeyValueStore - HashMap-backed storage for tests and embedding.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::KeyValueStore;
use crate::error::StorageError;

/// In-memory storage backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same map, so a test can keep a
/// handle and inspect what the store wrote.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<AtomicU64>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `value` already stored under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), value.to_string());
        Self {
            storage: Arc::new(RwLock::new(map)),
            writes: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of `set` calls made so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(storage.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        storage.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
