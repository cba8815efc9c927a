//! Dialog and banner update functions

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{DeleteDialog, TableModel};

/// Handle dialog and banner messages
pub fn update_ui(model: &mut TableModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::RequestDelete(id) => {
            let Some(record) = model.rows.get(id) else {
                return None;
            };
            model.ui.delete_dialog = Some(DeleteDialog {
                id,
                name: record.display_value("name"),
            });
            None
        }
        UiMsg::ConfirmDelete => {
            if let Some(dialog) = model.ui.delete_dialog.take() {
                model.edits.cancel_row(dialog.id);
                model.rows.delete_by_id(dialog.id);
            }
            None
        }
        UiMsg::CancelDelete => {
            model.ui.delete_dialog = None;
            None
        }
        UiMsg::DismissBanner { generation } => {
            model.ui.dismiss_banner(generation);
            None
        }
    }
}
