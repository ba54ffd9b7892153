//! WarehouseRepository - Typed accessor for the persisted collection.

use std::collections::HashSet;

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::warehouse::Warehouse;

/// Default key the collection lives under.
pub const DEFAULT_STORAGE_KEY: &str = "softinv-warehouses";

/// What a read of the storage key found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredCollection {
    /// Nothing stored, or an empty string.
    Missing,
    /// A well-formed list of records.
    Valid(Vec<Warehouse>),
    /// Something is stored but it is not a list of records with unique ids.
    Corrupted(String),
}

/// Reads and writes the whole collection as one JSON array under one key.
pub struct WarehouseRepository<'a, S> {
    storage: &'a S,
    key: &'a str,
}

impl<'a, S: KeyValueStore> WarehouseRepository<'a, S> {
    pub fn new(storage: &'a S, key: &'a str) -> Self {
        Self { storage, key }
    }

    pub fn key(&self) -> &str {
        self.key
    }

    /// Read and decode the stored collection.
    ///
    /// Only backend failures are errors; undecodable content is reported as
    /// [`StoredCollection::Corrupted`].
    pub fn read(&self) -> Result<StoredCollection, StorageError> {
        let raw = match self.storage.get(self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(StoredCollection::Missing),
        };

        let warehouses = match serde_json::from_str::<Vec<Warehouse>>(&raw) {
            Ok(warehouses) => warehouses,
            Err(e) => return Ok(StoredCollection::Corrupted(e.to_string())),
        };

        let mut seen = HashSet::with_capacity(warehouses.len());
        if let Some(dup) = warehouses.iter().find(|w| !seen.insert(w.id)) {
            return Ok(StoredCollection::Corrupted(format!(
                "duplicate warehouse id {}",
                dup.id
            )));
        }

        Ok(StoredCollection::Valid(warehouses))
    }

    /// Overwrite the stored collection.
    pub fn write(&self, warehouses: &[Warehouse]) -> Result<(), StorageError> {
        let json = serde_json::to_string(warehouses)?;
        self.storage.set(self.key, &json)
    }
}

/// Extension trait for typed warehouse access on any KeyValueStore.
pub trait WarehousesExt: KeyValueStore + Sized {
    fn warehouses<'a>(&'a self, key: &'a str) -> WarehouseRepository<'a, Self> {
        WarehouseRepository::new(self, key)
    }
}

impl<S: KeyValueStore> WarehousesExt for S {}
