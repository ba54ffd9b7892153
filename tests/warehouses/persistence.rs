//! Persistence behavior: reloads, corrupted values, file-backed storage.

use softinv::{
    InMemoryKeyValueStore, JsonFileStore, KeyValueStore, LoadOutcome, StoreConfig, Warehouse,
    WarehouseError, WarehouseStore, DEFAULT_STORAGE_KEY,
};

use crate::support::{ids, persisted, FlakyStorage};

#[test]
fn save_then_reload_reproduces_collection() {
    let storage = InMemoryKeyValueStore::new();
    let mut store = WarehouseStore::new(storage.clone());
    store.load().unwrap();
    store.create("Depósito Este", true).unwrap();
    store.update(2, "Depósito Sur Renovado", false).unwrap();
    store.delete(1).unwrap();

    let mut reloaded = WarehouseStore::new(storage);
    assert_eq!(reloaded.load().unwrap(), LoadOutcome::Restored { count: 3 });

    assert_eq!(reloaded.warehouses(), store.warehouses());
    assert_eq!(ids(reloaded.warehouses()), vec![2, 3, 4]);
}

#[test]
fn malformed_value_loads_empty_without_seeding() {
    let storage = InMemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, "not json at all");
    let mut store = WarehouseStore::new(storage.clone());

    let outcome = store.load().unwrap();

    assert!(matches!(outcome, LoadOutcome::Corrupted { .. }));
    assert!(store.is_empty());
    assert!(store.diagnostic().is_some());
    assert_eq!(storage.write_count(), 0);
    assert_eq!(
        storage.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("not json at all")
    );
}

#[test]
fn non_list_json_loads_empty() {
    let storage = InMemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, r#"{"id":1}"#);
    let mut store = WarehouseStore::new(storage);

    assert!(matches!(store.load().unwrap(), LoadOutcome::Corrupted { .. }));
    assert!(store.is_empty());
    assert!(store.view().show_empty_state);
}

#[test]
fn create_after_corrupted_load_overwrites_bad_value() {
    let storage = InMemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, "[oops");
    let mut store = WarehouseStore::new(storage.clone());
    store.load().unwrap();

    store.create("Nuevo", false).unwrap();

    assert_eq!(persisted(&storage), vec![Warehouse::new(1, "Nuevo", false)]);
}

#[test]
fn duplicate_ids_load_empty() {
    let storage = InMemoryKeyValueStore::with_value(
        DEFAULT_STORAGE_KEY,
        r#"[{"id":1,"name":"A","isCentral":false},{"id":1,"name":"B","isCentral":true}]"#,
    );
    let mut store = WarehouseStore::new(storage.clone());

    let outcome = store.load().unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Corrupted {
            reason: "duplicate warehouse id 1".into()
        }
    );
    assert!(store.is_empty());
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn seeding_keeps_view_in_step_when_write_fails() {
    let storage = FlakyStorage::new();
    storage.fail_writes(true);
    let mut store = WarehouseStore::new(storage.clone());

    assert!(matches!(store.load(), Err(WarehouseError::Storage(_))));

    assert_eq!(store.len(), 3);
    assert_eq!(store.filtered(), store.warehouses());
    assert!(storage.inner().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn empty_string_is_treated_as_absent() {
    let storage = InMemoryKeyValueStore::with_value(DEFAULT_STORAGE_KEY, "");
    let mut store = WarehouseStore::new(storage);

    assert_eq!(store.load().unwrap(), LoadOutcome::Seeded);
    assert_eq!(store.len(), 3);
}

#[test]
fn custom_key_is_isolated() {
    let storage = InMemoryKeyValueStore::new();
    let mut store = WarehouseStore::with_key(storage.clone(), "otra-sede");
    store.load().unwrap();

    assert!(storage.get("otra-sede").unwrap().is_some());
    assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn failed_write_is_reported() {
    let storage = FlakyStorage::new();
    let mut store = WarehouseStore::new(storage.clone());
    store.load().unwrap();
    store.set_filter("nuevo");

    storage.fail_writes(true);
    let err = store.create("Nuevo", false).unwrap_err();

    assert!(matches!(err, WarehouseError::Storage(_)));
    assert_eq!(persisted(storage.inner()).len(), 3);
    // Memory and view stay consistent with each other.
    assert_eq!(store.len(), 4);
    assert_eq!(ids(store.filtered()), vec![4]);
}

#[test]
fn file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut store = WarehouseStore::new(JsonFileStore::new(&path));
        assert_eq!(store.load().unwrap(), LoadOutcome::Seeded);
        store.create("Depósito Este", false).unwrap();
    }

    let mut store = WarehouseStore::new(JsonFileStore::new(&path));
    assert_eq!(store.load().unwrap(), LoadOutcome::Restored { count: 4 });
    assert_eq!(store.get(4), Some(&Warehouse::new(4, "Depósito Este", false)));
}

#[test]
fn configured_store_reads_from_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    JsonFileStore::new(&path)
        .set("sede", r#"[{"id":7,"name":"Hub Oeste","isCentral":true}]"#)
        .unwrap();

    let config = StoreConfig::parse_toml(&format!(
        "storage_key = \"sede\"\ndata_file = {:?}\n",
        path.to_string_lossy()
    ))
    .unwrap();

    let mut store = config.open_store();
    assert_eq!(store.load().unwrap(), LoadOutcome::Restored { count: 1 });
    assert_eq!(store.create("Hub Este", false).unwrap().id, 8);
}
