//! Transient UI state: banners and the delete confirmation dialog.
//!
//! Banners carry a generation counter so a scheduled auto-dismissal can be
//! ignored once a newer banner has replaced the one it was scheduled for.

use std::time::{Duration, Instant};

use super::rows::RowId;

/// How long success/error banners stay up before auto-dismissal
pub const BANNER_DISMISS_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A dismissible success/error message
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Matches the generation in `Cmd::ScheduleBannerDismiss`
    pub generation: u64,
    pub expires_at: Instant,
}

impl Banner {
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Pending "delete row?" confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDialog {
    pub id: RowId,
    /// Display name of the row, for the confirmation prompt
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub banner: Option<Banner>,
    pub delete_dialog: Option<DeleteDialog>,
    banner_generation: u64,
}

impl UiState {
    /// Show a banner, superseding any current one.
    /// Returns the new banner's generation for dismissal scheduling.
    pub fn show_banner(&mut self, kind: BannerKind, text: impl Into<String>) -> u64 {
        self.banner_generation += 1;
        self.banner = Some(Banner {
            kind,
            text: text.into(),
            generation: self.banner_generation,
            expires_at: Instant::now() + Duration::from_millis(BANNER_DISMISS_MS),
        });
        self.banner_generation
    }

    /// Dismiss the banner with this generation. A stale generation (a newer
    /// banner already replaced it) is ignored.
    pub fn dismiss_banner(&mut self, generation: u64) {
        if self
            .banner
            .as_ref()
            .is_some_and(|b| b.generation == generation)
        {
            self.banner = None;
        }
    }
}
