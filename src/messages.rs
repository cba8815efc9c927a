//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Column, Record, RowId, SortSpec};

/// Top-level message, dispatched to the per-family update functions
#[derive(Debug, Clone)]
pub enum Msg {
    Table(TableMsg),
    Column(ColumnMsg),
    Edit(EditMsg),
    Csv(CsvMsg),
    Ui(UiMsg),
}

/// Dataset and query-state messages
#[derive(Debug, Clone)]
pub enum TableMsg {
    /// Replace the entire dataset; no validation
    ReplaceRows(Vec<Record>),
    /// Remove one row (and any in-progress draft for it)
    DeleteRow(RowId),
    /// Set the search filter; resets to the first page
    SetSearchQuery(String),
    /// Set an explicit sort spec
    SetSort(SortSpec),
    /// Header click: ascending on a new key, flip to descending when the
    /// key is already sorted ascending
    ToggleSort(String),
    SetPage(usize),
    /// Change the page size; resets to the first page
    SetRowsPerPage(usize),
}

/// Column registry messages; each one persists the layout as a side effect
#[derive(Debug, Clone)]
pub enum ColumnMsg {
    /// Replace the column list wholesale (after a visibility/reorder edit)
    SetAll(Vec<Column>),
    /// Append a new column; every existing record gains the field,
    /// defaulted to the empty string
    Add(Column),
    ToggleVisible(String),
    /// Move the column at `from` to `to`, renumbering `order` contiguously
    Reorder { from: usize, to: usize },
}

/// Row-edit staging messages
#[derive(Debug, Clone)]
pub enum EditMsg {
    StartEdit(RowId),
    /// Stage a field change on the draft; validation is deferred to save
    ChangeField {
        id: RowId,
        field: String,
        value: String,
    },
    SaveRow(RowId),
    CancelRow(RowId),
    SaveAll,
    CancelAll,
}

/// Import/export messages
#[derive(Debug, Clone)]
pub enum CsvMsg {
    /// Import CSV text (the shell has already read the uploaded file)
    Import { content: String },
    /// Export the current filtered/sorted view, visible columns only
    Export,
}

/// Dialog and banner messages
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Open the delete confirmation dialog for a row
    RequestDelete(RowId),
    ConfirmDelete,
    CancelDelete,
    /// Timer fired for a scheduled banner dismissal; stale generations
    /// (a newer banner replaced the target) are ignored
    DismissBanner { generation: u64 },
}
