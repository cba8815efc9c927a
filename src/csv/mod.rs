//! CSV import/export adapter
//!
//! Converts between the row store's record shape and RFC 4180 CSV text,
//! using the `csv` crate for the parsing/serialization primitives.
//!
//! Import is all-or-nothing: any parse error or missing required column
//! rejects the whole file and leaves the store untouched. Export covers the
//! full filtered/sorted sequence restricted to the visible columns,
//! ignoring pagination.

mod export;
mod import;

pub use export::{export_csv, export_filename};
pub use import::{apply_import, import_rows, ImportError, REQUIRED_COLUMNS};
