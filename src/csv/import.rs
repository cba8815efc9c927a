//! CSV import: parse, validate, coerce, append.

use std::collections::BTreeMap;

use crate::model::{Record, RowId, TableModel, Value};

/// Columns every imported file must carry (key presence, not non-emptiness)
pub const REQUIRED_COLUMNS: &[&str] = &["name", "email"];

/// Why an import was rejected. The store is never touched on rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportError {
    /// No data rows at all
    Empty,
    /// Header lacks one or more required columns
    MissingRequiredColumns(Vec<String>),
    /// One aggregated report covering every malformed row
    Parse(Vec<String>),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Empty => write!(f, "CSV file is empty or invalid"),
            ImportError::MissingRequiredColumns(columns) => {
                write!(f, "Missing required fields: {}", columns.join(", "))
            }
            ImportError::Parse(errors) => {
                write!(f, "CSV errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Parse CSV text into raw field maps, keyed by the header row.
///
/// Fully empty lines are skipped; every other malformed row contributes to
/// one aggregated `ImportError::Parse`. Unrecognized columns are preserved
/// as extra fields.
pub fn import_rows(text: &str) -> Result<Vec<BTreeMap<String, String>>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return Err(ImportError::Parse(vec![e.to_string()])),
    };

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                if record.iter().all(|field| field.is_empty()) {
                    continue;
                }
                let map: BTreeMap<String, String> = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(header, value)| (header.to_string(), value.to_string()))
                    .collect();
                rows.push(map);
            }
            // +2: one for the header row, one for 1-based numbering
            Err(e) => errors.push(format!("row {}: {}", index + 2, e)),
        }
    }

    if !errors.is_empty() {
        return Err(ImportError::Parse(errors));
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|required| required.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingRequiredColumns(missing));
    }

    Ok(rows)
}

/// Build a record from a raw field map.
///
/// `age` is coerced to a number when present, non-empty, and parseable;
/// unparseable values stay as text and are caught by row validation on the
/// next edit. Empty `age` stays absent.
fn coerce_record(id: RowId, raw: BTreeMap<String, String>) -> Record {
    let mut record = Record::new(id);
    for (field, value) in raw {
        if field == "age" {
            if value.is_empty() {
                continue;
            }
            match Value::text(&value).as_number() {
                Some(n) => record.insert("age", Value::Number(n)),
                None => record.insert("age", Value::Text(value)),
            }
        } else {
            record.insert(&field, Value::Text(value));
        }
    }
    record
}

/// Parse and append CSV text to the model's row store, atomically.
///
/// Each imported record gets a fresh id minted past the store's current
/// maximum. Returns the number of rows appended.
pub fn apply_import(model: &mut TableModel, text: &str) -> Result<usize, ImportError> {
    let raw_rows = import_rows(text)?;

    let mut next_id = model.rows.max_id() + 1;
    let records: Vec<Record> = raw_rows
        .into_iter()
        .map(|raw| {
            let record = coerce_record(next_id, raw);
            next_id += 1;
            record
        })
        .collect();

    let count = records.len();
    model.rows.append(records);
    tracing::info!("imported {} rows", count);
    Ok(count)
}
