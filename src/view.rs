//! View snapshots handed to the presentation layer.
//!
//! A [`WarehouseView`] carries everything a renderer needs: the rows of the
//! filtered list, the form state, and whether to show the empty placeholder.

use serde::{Deserialize, Serialize};

use crate::warehouse::{Warehouse, WarehouseId};

/// Classification label shown in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseKind {
    Central,
    Satellite,
}

impl WarehouseKind {
    pub fn of(warehouse: &Warehouse) -> Self {
        if warehouse.is_central {
            WarehouseKind::Central
        } else {
            WarehouseKind::Satellite
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WarehouseKind::Central => "Central",
            WarehouseKind::Satellite => "Satélite",
        }
    }
}

/// One rendered row of the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRow {
    pub id: WarehouseId,
    pub name: String,
    pub kind: WarehouseKind,
}

impl From<&Warehouse> for WarehouseRow {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id,
            name: warehouse.name.clone(),
            kind: WarehouseKind::of(warehouse),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Create => "Registrar almacén",
            FormMode::Edit => "Editar almacén",
        }
    }
}

/// State of the create/edit form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub mode: FormMode,
    pub title: String,
    /// Record to prefill the form with; `None` in create mode.
    pub editing: Option<Warehouse>,
}

impl FormState {
    pub fn for_editing(editing: Option<&Warehouse>) -> Self {
        let mode = if editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        };
        Self {
            mode,
            title: mode.title().to_string(),
            editing: editing.cloned(),
        }
    }

    /// The cancel button is only offered while editing.
    pub fn show_cancel(&self) -> bool {
        self.mode == FormMode::Edit
    }
}

/// Full snapshot of what the presentation layer should display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseView {
    pub filter_term: String,
    pub rows: Vec<WarehouseRow>,
    pub form: FormState,
    pub show_empty_state: bool,
}

impl WarehouseView {
    pub fn new(filter_term: &str, filtered: &[Warehouse], editing: Option<&Warehouse>) -> Self {
        let rows: Vec<WarehouseRow> = filtered.iter().map(WarehouseRow::from).collect();
        Self {
            filter_term: filter_term.to_string(),
            show_empty_state: rows.is_empty(),
            rows,
            form: FormState::for_editing(editing),
        }
    }
}
