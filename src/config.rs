//! Column layout persistence
//!
//! The layout (id, label, visible, order for each column) is stored as a
//! JSON array under a single file, read once at startup and written on every
//! column-list mutation. A missing or corrupt file falls back silently to
//! the hard-coded default columns; storage problems are never surfaced to
//! the user.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{default_columns, Column, ColumnRegistry};

/// The persisted column layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnLayout {
    pub columns: Vec<Column>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl ColumnLayout {
    /// Snapshot the registry for persistence
    pub fn from_registry(registry: &ColumnRegistry) -> Self {
        Self {
            columns: registry.columns().to_vec(),
        }
    }

    /// Load the layout from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::columns_file() else {
            tracing::debug!("No config directory available, using default columns");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load the layout from a specific path, falling back to defaults on
    /// any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Column layout not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(layout) => {
                    tracing::info!("Loaded column layout from {}", path.display());
                    layout
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse column layout at {}: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read column layout at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save the layout to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::columns_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        crate::config_paths::ensure_config_dir()?;
        self.save_to(&path)
    }

    /// Save the layout to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize column layout: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write column layout to {}: {}", path.display(), e))?;

        tracing::info!("Saved column layout to {}", path.display());
        Ok(())
    }
}
