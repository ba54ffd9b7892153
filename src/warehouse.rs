//! Warehouse - The record type managed by the store.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// System-assigned identifier of a warehouse.
pub type WarehouseId = u64;

/// A physical storage location with a central/satellite classification.
///
/// Serialized with camelCase field names so persisted values keep the
/// `{"id", "name", "isCentral"}` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub is_central: bool,
}

impl Warehouse {
    pub fn new(id: WarehouseId, name: impl Into<String>, is_central: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_central,
        }
    }

    /// Overwrite the user-editable fields. The id never changes.
    pub(crate) fn apply(&mut self, draft: WarehouseDraft) {
        self.name = draft.name;
        self.is_central = draft.is_central;
    }
}

/// Validated user input for creating or updating a warehouse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarehouseDraft {
    name: String,
    is_central: bool,
}

impl WarehouseDraft {
    /// Trim the name and reject it when nothing is left.
    pub fn new(name: &str, is_central: bool) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            is_central,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_central(&self) -> bool {
        self.is_central
    }

    pub(crate) fn into_warehouse(self, id: WarehouseId) -> Warehouse {
        Warehouse {
            id,
            name: self.name,
            is_central: self.is_central,
        }
    }
}

/// Records written the first time the store finds nothing persisted.
pub fn seed_warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse::new(1, "Almacén Central", true),
        Warehouse::new(2, "Depósito Sur", false),
        Warehouse::new(3, "Hub Norte", false),
    ]
}

/// Next id to assign: one past the highest id present, or 1 when empty.
/// None once the highest id is `WarehouseId::MAX`.
pub fn next_id(warehouses: &[Warehouse]) -> Option<WarehouseId> {
    warehouses.iter().map(|w| w.id).max().unwrap_or(0).checked_add(1)
}
