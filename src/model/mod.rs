//! Application model - the complete state of the table manager
//!
//! All mutations are routed through the named operations on these types (and
//! the update layer dispatching to them), never ad hoc field writes.

pub mod columns;
pub mod edit;
pub mod rows;
pub mod ui;

pub use columns::{default_columns, Column, ColumnRegistry};
pub use edit::{validate, EditSession, ValidationError};
pub use rows::{sample_records, Record, RowId, RowStore, Value};
pub use ui::{Banner, BannerKind, DeleteDialog, UiState, BANNER_DISMISS_MS};

use crate::config::ColumnLayout;

/// Default page size
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Which column to sort by; `key == None` preserves store order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction,
        }
    }
}

/// The complete application model
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    /// Committed records
    pub rows: RowStore,
    /// Column definitions (visibility, order)
    pub columns: ColumnRegistry,
    /// In-progress row drafts
    pub edits: EditSession,
    /// Banners and dialogs
    pub ui: UiState,
    /// Case-insensitive substring filter over all fields
    pub search_query: String,
    pub sort: SortSpec,
    pub page: usize,
    pub rows_per_page: usize,
}

impl TableModel {
    /// Empty model with the default column layout
    pub fn new() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            ..Default::default()
        }
    }

    /// Model seeded with the demo dataset
    pub fn with_sample_data() -> Self {
        Self {
            rows: RowStore::from_records(sample_records()),
            ..Self::new()
        }
    }

    /// Model using the persisted column layout (falls back to defaults
    /// when absent or corrupt). This is the shell's startup entry point.
    pub fn restore() -> Self {
        Self {
            columns: ColumnRegistry::new(ColumnLayout::load().columns),
            ..Self::with_sample_data()
        }
    }
}
