use std::path::PathBuf;

use thiserror::Error;

/// Rejected user input. The display text is what the form shows the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El nombre del almacén es obligatorio.")]
    EmptyName,
}

/// Failures raised by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("storage file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Error returned by [`WarehouseStore`](crate::WarehouseStore) operations.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no warehouse id left after {last}")]
    IdSpaceExhausted { last: u64 },
}

impl WarehouseError {
    /// True when the operation was rejected before touching any state.
    pub fn is_validation(&self) -> bool {
        matches!(self, WarehouseError::Validation(_))
    }
}

/// Failures while loading [`StoreConfig`](crate::StoreConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
