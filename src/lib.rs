//! Tabula - tabular data manager core
//!
//! This crate provides the state types and logic for a single-user table
//! manager following the Elm Architecture pattern: a row store with an
//! open-ended field set, a column registry with persisted layout, a pure
//! derived-view pipeline (filter, sort, paginate), draft-based row editing,
//! and a CSV import/export adapter.
//!
//! The embedding shell renders the derived view, feeds user events in as
//! [`Msg`] values through [`update::update`], and executes the returned
//! [`Cmd`] side effects.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod messages;
pub mod model;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ColumnLayout;
pub use messages::Msg;
pub use model::TableModel;
