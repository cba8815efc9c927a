//! Dataset and query-state update functions

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::{SortDirection, SortSpec, TableModel};

/// Handle dataset and query-state messages
pub fn update_table(model: &mut TableModel, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::ReplaceRows(records) => {
            model.rows.replace_all(records);
            None
        }
        TableMsg::DeleteRow(id) => {
            // a deleted row cannot stay in the editing state
            model.edits.cancel_row(id);
            model.rows.delete_by_id(id);
            None
        }
        TableMsg::SetSearchQuery(query) => {
            model.search_query = query;
            model.page = 0;
            None
        }
        TableMsg::SetSort(spec) => {
            model.sort = spec;
            None
        }
        TableMsg::ToggleSort(key) => {
            toggle_sort(model, key);
            None
        }
        TableMsg::SetPage(page) => {
            model.page = page;
            None
        }
        TableMsg::SetRowsPerPage(size) => {
            model.rows_per_page = size.max(1);
            model.page = 0;
            None
        }
    }
}

/// Header click: a new key sorts ascending; clicking the key already sorted
/// ascending flips to descending.
fn toggle_sort(model: &mut TableModel, key: String) {
    let direction = if model.sort.key.as_deref() == Some(key.as_str())
        && model.sort.direction == SortDirection::Ascending
    {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    model.sort = SortSpec {
        key: Some(key),
        direction,
    };
}
