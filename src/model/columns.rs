//! Column registry: named, orderable, show/hide-able projections of record
//! fields.
//!
//! The registry only manages column definitions. Backfilling a new column's
//! field onto existing records and persisting the layout are routed through
//! the update layer so every side effect stays auditable.

use serde::{Deserialize, Serialize};

/// Column configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable key into record fields
    pub id: String,
    /// Display name
    pub label: String,
    pub visible: bool,
    /// Display position; `reorder` renumbers these contiguously from 0
    pub order: usize,
}

impl Column {
    pub fn new(id: &str, label: &str, visible: bool, order: usize) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            visible,
            order,
        }
    }
}

/// Hard-coded fallback when no persisted layout exists (or it is corrupt)
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", true, 0),
        Column::new("email", "Email", true, 1),
        Column::new("age", "Age", true, 2),
        Column::new("role", "Role", true, 3),
        Column::new("department", "Department", false, 4),
        Column::new("location", "Location", false, 5),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRegistry {
    columns: Vec<Column>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl ColumnRegistry {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Replace the column list wholesale (after a visibility/reorder edit)
    pub fn set_all(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Append a new column definition.
    ///
    /// The column's `order` is set to the previous column count so it lands
    /// at the end of the display sequence.
    pub fn add(&mut self, mut column: Column) {
        column.order = self.columns.len();
        self.columns.push(column);
    }

    /// Flip the `visible` flag of one column; others unchanged.
    /// Returns false when the id is unknown.
    pub fn toggle_visible(&mut self, id: &str) -> bool {
        match self.columns.iter_mut().find(|c| c.id == id) {
            Some(column) => {
                column.visible = !column.visible;
                true
            }
            None => false,
        }
    }

    /// Move the column at `from` to `to`, shifting the columns in between,
    /// then renumber every `order` field to its new positional index.
    ///
    /// Returns false (no-op) when `from == to` or either index is out of
    /// bounds.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.columns.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let column = self.columns.remove(from);
        self.columns.insert(to, column);
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.order = index;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_order_from_count() {
        let mut registry = ColumnRegistry::default();
        let previous_count = registry.columns().len();

        registry.add(Column::new("dept", "Dept", true, 999));

        let added = registry.get("dept").unwrap();
        assert_eq!(added.order, previous_count);
    }

    #[test]
    fn test_toggle_visible() {
        let mut registry = ColumnRegistry::default();
        assert!(registry.get("department").is_some_and(|c| !c.visible));

        assert!(registry.toggle_visible("department"));
        assert!(registry.get("department").unwrap().visible);

        assert!(!registry.toggle_visible("nope"));
    }

    #[test]
    fn test_reorder_renumbers_contiguously() {
        let mut registry = ColumnRegistry::default();

        // move column at index 2 to index 0
        assert!(registry.reorder(2, 0));

        let ids: Vec<&str> = registry.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["age", "name", "email", "role", "department", "location"]);

        let orders: Vec<usize> = registry.columns().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reorder_noop_cases() {
        let mut registry = ColumnRegistry::default();
        let before = registry.columns().to_vec();

        assert!(!registry.reorder(1, 1));
        assert!(!registry.reorder(99, 0));
        assert!(!registry.reorder(0, 99));
        assert_eq!(registry.columns(), &before[..]);
    }

    #[test]
    fn test_set_all_replaces() {
        let mut registry = ColumnRegistry::default();
        registry.set_all(vec![Column::new("only", "Only", true, 0)]);
        assert_eq!(registry.columns().len(), 1);
        assert_eq!(registry.columns()[0].id, "only");
    }
}
