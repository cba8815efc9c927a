//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The library never touches the outside world directly; the embedding shell
//! executes these (write the layout file, trigger the browser-style download,
//! arm the banner timer) and feeds resulting messages back into `update`.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Persist the current column layout (the shell calls
    /// `ColumnLayout::from_registry(..).save()`)
    PersistColumns,
    /// Deliver generated CSV text to the user as a downloadable file
    DeliverDownload { filename: String, content: String },
    /// Arm a timer that sends `UiMsg::DismissBanner { generation }` after
    /// the delay; a newer banner supersedes it via the generation check
    ScheduleBannerDismiss { generation: u64, delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }
}

impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
