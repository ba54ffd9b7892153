//! Search filtering over warehouse names.

use crate::warehouse::Warehouse;

/// A normalized search term: trimmed and lowercased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive substring match against the name.
    pub fn matches(&self, warehouse: &Warehouse) -> bool {
        self.is_empty() || warehouse.name.to_lowercase().contains(&self.term)
    }

    /// Matching records in collection order. An empty term copies everything.
    pub fn apply(&self, warehouses: &[Warehouse]) -> Vec<Warehouse> {
        if self.is_empty() {
            return warehouses.to_vec();
        }
        warehouses
            .iter()
            .filter(|w| self.matches(w))
            .cloned()
            .collect()
    }
}
