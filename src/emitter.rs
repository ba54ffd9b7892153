use std::thread::JoinHandle;

use event_emitter_rs::EventEmitter;

use crate::view::WarehouseView;

/// Event name listeners are registered under.
pub const WAREHOUSES_CHANGED: &str = "WarehousesChanged";

/// Fans out view snapshots to subscribers after each state change.
///
/// Listeners receive the [`WarehouseView`] encoded as JSON. `event_emitter_rs`
/// runs every callback on its own thread; `emit` joins them before returning
/// so a subscriber has finished rendering before the next command runs.
///
/// # Example
///
/// ```ignore
/// let mut store = WarehouseStore::new(InMemoryKeyValueStore::new());
///
/// store.on_change(|json| {
///     let view: WarehouseView = serde_json::from_str(&json).unwrap();
///     println!("{} rows", view.rows.len());
/// });
///
/// store.load()?;
/// ```
pub struct ChangeEmitter {
    event_emitter: EventEmitter,
    listeners: usize,
}

impl Default for ChangeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeEmitter {
    pub fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
            listeners: 0,
        }
    }

    /// Register a listener. Returns the id the emitter assigned to it.
    pub fn on<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.listeners += 1;
        self.event_emitter.on(WAREHOUSES_CHANGED, listener)
    }

    /// Remove a listener by the id returned from [`on`](Self::on).
    pub fn off(&mut self, listener_id: &str) -> bool {
        let removed = self.event_emitter.remove_listener(listener_id).is_some();
        if removed {
            self.listeners -= 1;
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
    }

    /// Emit the snapshot and wait for every listener to return.
    pub fn emit(&mut self, view: &WarehouseView) {
        if self.listeners == 0 {
            return;
        }

        let payload = match serde_json::to_string(view) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode warehouse view");
                return;
            }
        };

        let handles: Vec<JoinHandle<()>> = self.event_emitter.emit(WAREHOUSES_CHANGED, payload);
        for handle in handles {
            if handle.join().is_err() {
                tracing::warn!("warehouse change listener panicked");
            }
        }
    }
}
