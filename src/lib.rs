mod config;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod filter;
mod logging;
mod repository;
mod storage;
mod store;
mod view;
mod warehouse;

pub use config::StoreConfig;
#[cfg(feature = "emitter")]
pub use emitter::{ChangeEmitter, WAREHOUSES_CHANGED};
pub use error::{ConfigError, StorageError, ValidationError, WarehouseError};
pub use filter::SearchFilter;
pub use logging::{LogFormat, LoggingConfig};
pub use repository::{StoredCollection, WarehouseRepository, WarehousesExt, DEFAULT_STORAGE_KEY};
pub use storage::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore};
pub use store::{DeleteConfirmation, LoadOutcome, SubmitOutcome, WarehouseStore};
pub use view::{FormMode, FormState, WarehouseKind, WarehouseRow, WarehouseView};
pub use warehouse::{next_id, seed_warehouses, Warehouse, WarehouseDraft, WarehouseId};
