//! WarehouseStore - The persisted, filterable warehouse collection.
//!
//! The store owns the authoritative collection, the active search filter and
//! the edit state. Every successful mutation rewrites the whole collection to
//! storage, re-applies the filter and notifies subscribers, in that order,
//! before returning.
//!
//! ## Example
//!
//! ```ignore
//! use softinv::{InMemoryKeyValueStore, WarehouseStore};
//!
//! let mut store = WarehouseStore::new(InMemoryKeyValueStore::new());
//! store.load()?;                       // seeds three records
//! store.create("Depósito Este", false)?;
//! store.set_filter("depósito");
//!
//! if let Some(confirmation) = store.request_delete(2) {
//!     if ask_user(confirmation.prompt()) {
//!         store.confirm_delete(confirmation)?;
//!     }
//! }
//! ```

#[cfg(feature = "emitter")]
use crate::emitter::ChangeEmitter;
use crate::error::WarehouseError;
use crate::filter::SearchFilter;
use crate::repository::{StoredCollection, WarehousesExt, DEFAULT_STORAGE_KEY};
use crate::storage::KeyValueStore;
use crate::view::WarehouseView;
use crate::warehouse::{next_id, seed_warehouses, Warehouse, WarehouseDraft, WarehouseId};

/// What [`WarehouseStore::load`] found in storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was stored; the seed records were written.
    Seeded,
    /// A stored collection was read back.
    Restored { count: usize },
    /// The stored value was unreadable; the collection is now empty.
    Corrupted { reason: String },
}

/// Result of a form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Warehouse),
    Updated(Warehouse),
    /// The record being edited no longer exists. Nothing was written.
    Missing(WarehouseId),
}

/// A pending delete the caller has to confirm with the user.
///
/// Pass it to [`WarehouseStore::confirm_delete`] to go ahead; dropping it
/// declines.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a delete only happens once the confirmation is passed to confirm_delete"]
pub struct DeleteConfirmation {
    id: WarehouseId,
    name: String,
}

impl DeleteConfirmation {
    pub fn id(&self) -> WarehouseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Question to put to the user.
    pub fn prompt(&self) -> String {
        format!("¿Eliminar \"{}\"?", self.name)
    }
}

pub struct WarehouseStore<S> {
    storage: S,
    key: String,
    warehouses: Vec<Warehouse>,
    filtered: Vec<Warehouse>,
    filter: SearchFilter,
    editing_id: Option<WarehouseId>,
    diagnostic: Option<String>,
    #[cfg(feature = "emitter")]
    changes: ChangeEmitter,
}

impl<S: KeyValueStore> WarehouseStore<S> {
    /// Create an empty store over `storage` using the default key.
    /// Call [`load`](Self::load) before use.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            warehouses: Vec::new(),
            filtered: Vec::new(),
            filter: SearchFilter::default(),
            editing_id: None,
            diagnostic: None,
            #[cfg(feature = "emitter")]
            changes: ChangeEmitter::new(),
        }
    }

    /// Populate the collection from storage.
    ///
    /// Seeds and persists the default records when nothing is stored. An
    /// unreadable value is logged and leaves the collection empty without
    /// seeding or writing. Only a failing storage read is an error.
    pub fn load(&mut self) -> Result<LoadOutcome, WarehouseError> {
        let stored = self.storage.warehouses(&self.key).read()?;
        self.diagnostic = None;

        let outcome = match stored {
            StoredCollection::Missing => {
                self.warehouses = seed_warehouses();
                self.persist_and_refilter()?;
                tracing::info!(key = %self.key, count = self.warehouses.len(), "seeded warehouses");
                LoadOutcome::Seeded
            }
            StoredCollection::Valid(warehouses) => {
                self.warehouses = warehouses;
                tracing::debug!(key = %self.key, count = self.warehouses.len(), "restored warehouses");
                LoadOutcome::Restored {
                    count: self.warehouses.len(),
                }
            }
            StoredCollection::Corrupted(reason) => {
                tracing::error!(key = %self.key, %reason, "stored warehouses could not be read");
                self.warehouses.clear();
                self.diagnostic = Some(reason.clone());
                LoadOutcome::Corrupted { reason }
            }
        };

        self.apply_filter();
        self.notify();
        Ok(outcome)
    }

    /// Overwrite storage with the full in-memory collection.
    pub fn save(&self) -> Result<(), WarehouseError> {
        self.storage.warehouses(&self.key).write(&self.warehouses)?;
        Ok(())
    }

    /// Add a new warehouse with the next free id.
    pub fn create(&mut self, name: &str, is_central: bool) -> Result<Warehouse, WarehouseError> {
        let draft = WarehouseDraft::new(name, is_central)?;
        let id = next_id(&self.warehouses).ok_or(WarehouseError::IdSpaceExhausted {
            last: WarehouseId::MAX,
        })?;
        let warehouse = draft.into_warehouse(id);

        self.warehouses.push(warehouse.clone());
        self.persist_and_refilter()?;
        self.editing_id = None;
        tracing::debug!(id = warehouse.id, name = %warehouse.name, "warehouse created");

        self.notify();
        Ok(warehouse)
    }

    /// Replace the name and classification of an existing warehouse.
    ///
    /// An unknown id is a silent no-op that still leaves edit mode.
    pub fn update(
        &mut self,
        id: WarehouseId,
        name: &str,
        is_central: bool,
    ) -> Result<Option<Warehouse>, WarehouseError> {
        let draft = WarehouseDraft::new(name, is_central)?;

        let updated = match self.warehouses.iter_mut().find(|w| w.id == id) {
            Some(warehouse) => {
                warehouse.apply(draft);
                Some(warehouse.clone())
            }
            None => None,
        };

        match &updated {
            Some(_) => {
                self.persist_and_refilter()?;
                tracing::debug!(id, "warehouse updated");
            }
            None => tracing::warn!(id, "update ignored, warehouse not found"),
        }

        self.editing_id = None;
        self.notify();
        Ok(updated)
    }

    /// Remove a warehouse without asking. Prefer [`request_delete`](Self::request_delete).
    ///
    /// Every record carrying `id` goes; the first one is returned.
    pub fn delete(&mut self, id: WarehouseId) -> Result<Option<Warehouse>, WarehouseError> {
        let Some(removed) = self.get(id).cloned() else {
            tracing::warn!(id, "delete ignored, warehouse not found");
            return Ok(None);
        };

        self.warehouses.retain(|w| w.id != id);
        self.persist_and_refilter()?;
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        tracing::debug!(id, name = %removed.name, "warehouse deleted");

        self.notify();
        Ok(Some(removed))
    }

    /// Ask for a delete. Returns None, changing nothing, if the id is unknown.
    pub fn request_delete(&self, id: WarehouseId) -> Option<DeleteConfirmation> {
        self.get(id).map(|w| DeleteConfirmation {
            id: w.id,
            name: w.name.clone(),
        })
    }

    /// Carry out a delete the user agreed to.
    pub fn confirm_delete(
        &mut self,
        confirmation: DeleteConfirmation,
    ) -> Result<Option<Warehouse>, WarehouseError> {
        self.delete(confirmation.id)
    }

    /// Form submission: updates the record being edited, otherwise creates.
    ///
    /// A rejected name leaves the edit state as it was.
    pub fn submit(&mut self, name: &str, is_central: bool) -> Result<SubmitOutcome, WarehouseError> {
        match self.editing_id {
            Some(id) => Ok(match self.update(id, name, is_central)? {
                Some(warehouse) => SubmitOutcome::Updated(warehouse),
                None => SubmitOutcome::Missing(id),
            }),
            None => self.create(name, is_central).map(SubmitOutcome::Created),
        }
    }

    /// Set the search term and recompute the filtered view.
    pub fn set_filter(&mut self, term: &str) {
        self.filter = SearchFilter::new(term);
        self.apply_filter();
        self.notify();
    }

    /// Enter edit mode for `id`. Unknown ids leave the edit state untouched.
    pub fn begin_edit(&mut self, id: WarehouseId) -> Option<&Warehouse> {
        if self.get(id).is_none() {
            tracing::debug!(id, "edit ignored, warehouse not found");
            return None;
        }
        self.editing_id = Some(id);
        self.notify();
        self.get(id)
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.notify();
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn filtered(&self) -> &[Warehouse] {
        &self.filtered
    }

    pub fn filter_term(&self) -> &str {
        self.filter.term()
    }

    pub fn editing_id(&self) -> Option<WarehouseId> {
        self.editing_id
    }

    pub fn editing(&self) -> Option<&Warehouse> {
        self.editing_id.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }

    /// Reason the last load found unreadable data, if it did.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> WarehouseView {
        WarehouseView::new(self.filter.term(), &self.filtered, self.editing())
    }

    /// Subscribe to view snapshots sent after every state change, including
    /// a mutation whose write to storage failed.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&mut self, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.changes.on(listener)
    }

    #[cfg(feature = "emitter")]
    pub fn off_change(&mut self, listener_id: &str) -> bool {
        self.changes.off(listener_id)
    }

    /// Persist after a mutation, then re-filter. When the write fails the
    /// in-memory change stays, and subscribers still get a view matching it.
    fn persist_and_refilter(&mut self) -> Result<(), WarehouseError> {
        let saved = self.save();
        self.apply_filter();
        if let Err(e) = &saved {
            tracing::error!(key = %self.key, error = %e, "failed to persist warehouses");
            self.notify();
        }
        saved
    }

    fn apply_filter(&mut self) {
        self.filtered = self.filter.apply(&self.warehouses);
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self) {
        let view = self.view();
        self.changes.emit(&view);
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&mut self) {}
}
