//! Panel state persistence across runs
//!
//! The panel's visibility state is written to `~/.config/toc-panel/state.json`
//! after each change (when `restore_state` is enabled) and read back on start.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::PanelState;

/// Read saved panel state. Missing or unreadable files yield `None`.
pub fn load_panel_state(path: &Path) -> Option<PanelState> {
    if !path.exists() {
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read session state {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(state) => {
            tracing::debug!("Restored panel state from {}", path.display());
            Some(state)
        }
        Err(e) => {
            tracing::warn!("Ignoring corrupt session state {}: {}", path.display(), e);
            None
        }
    }
}

/// Write panel state as JSON, creating the parent directory if needed
pub fn save_panel_state(path: &Path, state: &PanelState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating session directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(state).context("serializing panel state")?;
    fs::write(path, json).with_context(|| format!("writing session state {}", path.display()))?;

    tracing::debug!("Saved panel state to {}", path.display());
    Ok(())
}
