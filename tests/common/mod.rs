//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabula::model::{Record, RowId, RowStore, TableModel};

/// Build a model over the given records with default columns
pub fn model_with_rows(records: Vec<Record>) -> TableModel {
    let mut model = TableModel::new();
    model.rows = RowStore::from_records(records);
    model
}

/// A minimal person record for scenarios
pub fn person(id: RowId, name: &str, email: &str, age: f64) -> Record {
    Record::new(id)
        .with("name", name)
        .with("email", email)
        .with("age", age)
}

/// Names of the records in view order
pub fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.display_value("name")).collect()
}
