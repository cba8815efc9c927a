//! Row store: the committed dataset.
//!
//! Records have an open-ended field set (dynamic columns add fields to every
//! record), so fields live in a map rather than a static struct. The `id` is
//! the one mandatory key and is unique across the store at all times.

use std::collections::BTreeMap;

/// Unique record identifier
pub type RowId = i64;

/// A single field value.
///
/// Absence is modeled by the key missing from the record's field map, never
/// by a sentinel value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    /// Convenience constructor for text values
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Stringify for display, search, and export.
    ///
    /// Integral numbers render without a trailing `.0` so a round trip
    /// through CSV keeps `28` as `28`.
    pub fn display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format_number(*n),
        }
    }

    /// Numeric view of the value, if it has one.
    ///
    /// A non-empty text value that parses as a number counts as numeric,
    /// since CSV import and manual edits produce numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse().ok()
                }
            }
        };
        // NaN has no place in an ordering
        n.filter(|n| !n.is_nan())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One row of the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RowId,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record with the given id
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter, mainly for seeding and tests
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }

    /// Display string for a field; absent fields stringify to ""
    pub fn display_value(&self, field: &str) -> String {
        self.fields.get(field).map(Value::display).unwrap_or_default()
    }
}

/// Ordered collection of committed records.
///
/// All operations are total: there are no error conditions, operations on
/// missing ids are no-ops.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    records: Vec<Record>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RowId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Largest id currently in the store, 0 when empty.
    /// Import uses this to mint fresh ids.
    pub fn max_id(&self) -> RowId {
        self.records.iter().map(|r| r.id).max().unwrap_or(0)
    }

    /// Replace the entire dataset; no validation
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Add records to the end, preserving their relative order
    pub fn append(&mut self, records: Vec<Record>) {
        self.records.extend(records);
    }

    /// Replace the record with a matching id in place (position unchanged).
    /// No-op when the id is not present.
    pub fn upsert_by_id(&mut self, record: Record) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        }
    }

    /// Remove the record with the given id; no-op when absent
    pub fn delete_by_id(&mut self, id: RowId) {
        self.records.retain(|r| r.id != id);
    }

    /// Backfill a field on every record, defaulted to the empty string.
    /// Called when a column is added so lookups never fail over raw records.
    pub fn ensure_field(&mut self, field: &str) {
        for record in &mut self.records {
            record
                .fields
                .entry(field.to_string())
                .or_insert_with(|| Value::text(""));
        }
    }
}

/// The seeded demo dataset
pub fn sample_records() -> Vec<Record> {
    let row = |id: RowId, name: &str, email: &str, age: f64, role: &str, dept: &str, loc: &str| {
        Record::new(id)
            .with("name", name)
            .with("email", email)
            .with("age", age)
            .with("role", role)
            .with("department", dept)
            .with("location", loc)
    };

    vec![
        row(1, "John Doe", "john@example.com", 28.0, "Developer", "Engineering", "New York"),
        row(2, "Jane Smith", "jane@example.com", 34.0, "Designer", "Design", "San Francisco"),
        row(3, "Bob Johnson", "bob@example.com", 45.0, "Manager", "Operations", "Chicago"),
        row(4, "Alice Williams", "alice@example.com", 29.0, "Developer", "Engineering", "Austin"),
        row(5, "Charlie Brown", "charlie@example.com", 52.0, "Director", "Leadership", "Boston"),
        row(6, "Diana Prince", "diana@example.com", 31.0, "Developer", "Engineering", "Seattle"),
        row(7, "Ethan Hunt", "ethan@example.com", 38.0, "Analyst", "Analytics", "Denver"),
        row(8, "Fiona Apple", "fiona@example.com", 27.0, "Designer", "Design", "Portland"),
        row(9, "George Martin", "george@example.com", 41.0, "Manager", "Operations", "Miami"),
        row(10, "Hannah Montana", "hannah@example.com", 25.0, "Developer", "Engineering", "Nashville"),
        row(11, "Ivan Drago", "ivan@example.com", 36.0, "Engineer", "Engineering", "Moscow"),
        row(12, "Julia Roberts", "julia@example.com", 43.0, "Manager", "HR", "Los Angeles"),
    ]
}
