//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each returns the
//! side-effect command (if any) the shell must execute.

mod columns;
mod csv;
mod edit;
mod table;
mod ui;

pub use columns::update_columns;
pub use csv::update_csv;
pub use edit::update_edit;
pub use table::update_table;
pub use ui::update_ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{BannerKind, TableModel, BANNER_DISMISS_MS};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut TableModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Table(m) => update_table(model, m),
        Msg::Column(m) => update_columns(model, m),
        Msg::Edit(m) => update_edit(model, m),
        Msg::Csv(m) => update_csv(model, m),
        Msg::Ui(m) => update_ui(model, m),
    }
}

/// Show a banner and arm its auto-dismiss timer
pub(crate) fn show_banner(
    model: &mut TableModel,
    kind: BannerKind,
    text: impl Into<String>,
) -> Option<Cmd> {
    let generation = model.ui.show_banner(kind, text);
    Some(Cmd::ScheduleBannerDismiss {
        generation,
        delay_ms: BANNER_DISMISS_MS,
    })
}
