//! Store configuration loaded from TOML.
//!
//! ```toml
//! storage_key = "softinv-warehouses"
//! data_file = "data/storage.json"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```
//!
//! Every field is optional. Without `data_file` the store keeps its data in
//! memory only.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::repository::DEFAULT_STORAGE_KEY;
use crate::storage::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore};
use crate::store::WarehouseStore;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key the collection is stored under.
    pub storage_key: String,
    /// JSON file backing the key-value storage.
    pub data_file: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_file: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&text)
    }

    pub fn parse_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn init_logging(&self) -> bool {
        self.logging.init()
    }

    /// Storage backend selected by `data_file`.
    pub fn open_storage(&self) -> Box<dyn KeyValueStore> {
        match &self.data_file {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(InMemoryKeyValueStore::new()),
        }
    }

    /// Unloaded store over the configured backend and key.
    pub fn open_store(&self) -> WarehouseStore<Box<dyn KeyValueStore>> {
        WarehouseStore::with_key(self.open_storage(), self.storage_key.clone())
    }
}
