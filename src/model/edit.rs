//! Row-edit staging.
//!
//! Each editing row owns a draft: a full copy of the committed record,
//! never a reference into the store. Drafts diverge field-by-field until
//! they are either validated and written back or discarded.
//!
//! Per-row state machine:
//!
//! ```text
//! Committed ──start_edit──▶ Editing ──save_row (valid)──▶ Committed
//!                              │  ▲                          ▲
//!                              │  └─ save_row (invalid)      │
//!                              └────── cancel_row ───────────┘
//! ```

use std::collections::BTreeMap;

use super::rows::{Record, RowId, RowStore, Value};

/// A rejected draft: which row failed and why
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub id: RowId,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: {}", self.id, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a draft. First failing rule wins, one message per row.
///
/// Rules: a non-empty `age` must parse as a number; a non-empty `email`
/// must contain `@`. Empty or absent values pass.
pub fn validate(record: &Record) -> Option<String> {
    if let Some(age) = record.get("age") {
        if !age.display().is_empty() && age.as_number().is_none() {
            return Some("Age must be a number".to_string());
        }
    }
    if let Some(email) = record.get("email") {
        let text = email.display();
        if !text.is_empty() && !text.contains('@') {
            return Some("Please enter a valid email".to_string());
        }
    }
    None
}

/// Drafts for all currently-editing rows, keyed by record id
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    drafts: BTreeMap<RowId, Record>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self, id: RowId) -> bool {
        self.drafts.contains_key(&id)
    }

    pub fn has_editing_rows(&self) -> bool {
        !self.drafts.is_empty()
    }

    /// Ids of all editing rows, ascending
    pub fn editing_ids(&self) -> Vec<RowId> {
        self.drafts.keys().copied().collect()
    }

    pub fn draft(&self, id: RowId) -> Option<&Record> {
        self.drafts.get(&id)
    }

    /// Seed a draft from the committed record.
    /// No-op (returns false) when the id is unknown or already editing.
    pub fn start_edit(&mut self, id: RowId, store: &RowStore) -> bool {
        if self.drafts.contains_key(&id) {
            return false;
        }
        let Some(record) = store.get(id) else {
            return false;
        };
        self.drafts.insert(id, record.clone());
        true
    }

    /// Stage a field change on the draft. Validation is deferred to save.
    /// No-op (returns false) when the row is not editing.
    pub fn change_field(&mut self, id: RowId, field: &str, value: Value) -> bool {
        match self.drafts.get_mut(&id) {
            Some(draft) => {
                draft.insert(field, value);
                true
            }
            None => false,
        }
    }

    /// Validate and commit one draft.
    ///
    /// On failure the row stays editing with its draft intact. On success
    /// the draft is written through `upsert_by_id` and dropped.
    pub fn save_row(&mut self, id: RowId, store: &mut RowStore) -> Result<(), ValidationError> {
        let Some(draft) = self.drafts.get(&id) else {
            return Ok(());
        };
        if let Some(message) = validate(draft) {
            return Err(ValidationError { id, message });
        }
        if let Some(draft) = self.drafts.remove(&id) {
            store.upsert_by_id(draft);
        }
        Ok(())
    }

    /// Drop the draft unconditionally: no validation, no store write
    pub fn cancel_row(&mut self, id: RowId) {
        self.drafts.remove(&id);
    }

    /// Commit every draft, all-or-nothing.
    ///
    /// Every draft is validated before any write; the first invalid draft
    /// (ascending row id) aborts the whole batch with no writes and every
    /// row still editing. Returns the number of rows written.
    pub fn save_all(&mut self, store: &mut RowStore) -> Result<usize, ValidationError> {
        for (id, draft) in &self.drafts {
            if let Some(message) = validate(draft) {
                return Err(ValidationError { id: *id, message });
            }
        }
        let drafts = std::mem::take(&mut self.drafts);
        let count = drafts.len();
        for (_, draft) in drafts {
            store.upsert_by_id(draft);
        }
        Ok(count)
    }

    /// Drop every draft
    pub fn cancel_all(&mut self) {
        self.drafts.clear();
    }
}
