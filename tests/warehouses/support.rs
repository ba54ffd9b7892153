//! Shared fixtures for warehouse store tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use softinv::{
    InMemoryKeyValueStore, KeyValueStore, StorageError, Warehouse, WarehouseStore,
    DEFAULT_STORAGE_KEY,
};

/// A loaded store whose storage already holds `records`.
pub fn store_with(records: &[Warehouse]) -> WarehouseStore<InMemoryKeyValueStore> {
    let json = serde_json::to_string(records).unwrap();
    let storage = InMemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, &json);
    let mut store = WarehouseStore::new(storage);
    store.load().unwrap();
    store
}

/// Decode whatever the store last wrote.
pub fn persisted(storage: &impl KeyValueStore) -> Vec<Warehouse> {
    let raw = storage
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .expect("nothing persisted");
    serde_json::from_str(&raw).unwrap()
}

pub fn ids(warehouses: &[Warehouse]) -> Vec<u64> {
    warehouses.iter().map(|w| w.id).collect()
}

/// Storage whose writes can be switched to fail.
#[derive(Clone, Default)]
pub struct FlakyStorage {
    inner: InMemoryKeyValueStore,
    failing: Arc<AtomicBool>,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &InMemoryKeyValueStore {
        &self.inner
    }
}

impl KeyValueStore for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::LockPoisoned("write"));
        }
        self.inner.set(key, value)
    }
}
