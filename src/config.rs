//! Panel configuration persistence
//!
//! Stores user preferences in `~/.config/toc-panel/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Spaces of indentation per heading level in the default item renderer
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Start generators with hierarchical numbering enabled
    #[serde(default)]
    pub numbering: bool,

    /// Save panel visibility on every change and restore it on start
    #[serde(default = "default_restore_state")]
    pub restore_state: bool,
}

/// Largest accepted `indent_width`; larger values are clamped
pub const MAX_INDENT_WIDTH: usize = 16;

fn default_indent_width() -> usize {
    2
}

fn default_restore_state() -> bool {
    true
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            numbering: false,
            restore_state: default_restore_state(),
        }
    }
}

impl PanelConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self =
            serde_yaml::from_str(content).map_err(|e| format!("Invalid config YAML: {}", e))?;
        if config.indent_width > MAX_INDENT_WIDTH {
            tracing::warn!(
                "indent_width {} exceeds {}, clamping",
                config.indent_width,
                MAX_INDENT_WIDTH
            );
            config.indent_width = MAX_INDENT_WIDTH;
        }
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
