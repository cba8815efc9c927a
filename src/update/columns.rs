//! Column registry update functions
//!
//! Every mutation that changes the column list returns `Cmd::PersistColumns`
//! so the shell writes the layout after the model settles.

use crate::commands::Cmd;
use crate::messages::ColumnMsg;
use crate::model::TableModel;

/// Handle column registry messages
pub fn update_columns(model: &mut TableModel, msg: ColumnMsg) -> Option<Cmd> {
    match msg {
        ColumnMsg::SetAll(columns) => {
            model.columns.set_all(columns);
            Some(Cmd::PersistColumns)
        }
        ColumnMsg::Add(column) => {
            // every existing record gains the field, defaulted to ""
            model.rows.ensure_field(&column.id);
            model.columns.add(column);
            Some(Cmd::PersistColumns)
        }
        ColumnMsg::ToggleVisible(id) => {
            if model.columns.toggle_visible(&id) {
                Some(Cmd::PersistColumns)
            } else {
                tracing::warn!("toggle_visible: unknown column {:?}", id);
                None
            }
        }
        ColumnMsg::Reorder { from, to } => {
            if model.columns.reorder(from, to) {
                Some(Cmd::PersistColumns)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Record, RowStore, Value};

    #[test]
    fn test_add_column_backfills_records() {
        let mut model = TableModel::new();
        model.rows = RowStore::from_records(vec![
            Record::new(1).with("name", "a"),
            Record::new(2).with("name", "b"),
        ]);
        let previous_count = model.columns.columns().len();

        let cmd = update_columns(
            &mut model,
            ColumnMsg::Add(Column::new("dept", "Dept", true, 0)),
        );

        assert_eq!(cmd, Some(Cmd::PersistColumns));
        for record in model.rows.records() {
            assert_eq!(record.get("dept"), Some(&Value::text("")));
        }
        assert_eq!(model.columns.get("dept").unwrap().order, previous_count);
    }

    #[test]
    fn test_reorder_noop_returns_no_cmd() {
        let mut model = TableModel::new();
        let cmd = update_columns(&mut model, ColumnMsg::Reorder { from: 1, to: 1 });
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_toggle_visible_persists() {
        let mut model = TableModel::new();
        let cmd = update_columns(&mut model, ColumnMsg::ToggleVisible("department".into()));
        assert_eq!(cmd, Some(Cmd::PersistColumns));
        assert!(model.columns.get("department").unwrap().visible);
    }
}
