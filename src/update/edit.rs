//! Row-edit staging update functions

use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::model::{BannerKind, TableModel, Value};

use super::show_banner;

/// Handle row-edit staging messages
pub fn update_edit(model: &mut TableModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::StartEdit(id) => {
            model.edits.start_edit(id, &model.rows);
            None
        }
        EditMsg::ChangeField { id, field, value } => {
            model.edits.change_field(id, &field, Value::Text(value));
            None
        }
        EditMsg::SaveRow(id) => match model.edits.save_row(id, &mut model.rows) {
            Ok(()) => None,
            Err(err) => {
                tracing::debug!("save rejected for row {}: {}", err.id, err.message);
                show_banner(model, BannerKind::Error, err.message)
            }
        },
        EditMsg::CancelRow(id) => {
            model.edits.cancel_row(id);
            None
        }
        EditMsg::SaveAll => match model.edits.save_all(&mut model.rows) {
            Ok(_count) => None,
            Err(err) => {
                tracing::debug!("save-all rejected: {}", err);
                show_banner(model, BannerKind::Error, err.to_string())
            }
        },
        EditMsg::CancelAll => {
            model.edits.cancel_all();
            None
        }
    }
}
