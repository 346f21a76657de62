//! Where the panel keeps its files
//!
//! ```text
//! <config dir>/toc-panel/
//!     config.yaml   PanelConfig, read once at startup
//!     state.json    PanelState, rewritten on every outline/tab change
//!     logs/         daily rolling toc-panel.log
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! and `%APPDATA%` on Windows. Every lookup returns `None` when no home
//! directory can be found; callers then fall back to defaults and skip
//! persistence.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "toc-panel";
const CONFIG_FILE: &str = "config.yaml";
const STATE_FILE: &str = "state.json";
const LOGS_DIR: &str = "logs";

/// Base directory for all panel files
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// User preferences loaded by `PanelConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saved outline visibility and selected side tab
pub fn state_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(STATE_FILE))
}

/// Directory for the rolling log file
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory (and its parents) if missing, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
