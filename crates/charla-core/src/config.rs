//! Configuration for charla.
//!
//! Stored as JSON at `.charla/config.json`. Missing file means defaults;
//! a malformed file is an error rather than a silent reset.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory holding charla state, relative to the working directory.
pub const CHARLA_DIR: &str = ".charla";

/// Config file name inside [`CHARLA_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon rendering preference.
    #[serde(default)]
    pub icons: IconPreference,

    /// Simulated reply delay in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Override for the seed greeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            icons: IconPreference::default(),
            reply_delay_ms: default_reply_delay_ms(),
            greeting: None,
        }
    }
}

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme (default).
    #[default]
    Dark,
    /// High contrast theme for accessibility.
    HighContrast,
}

/// Icon rendering preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconPreference {
    /// Nerd Font icons (default).
    #[default]
    Nerd,
    /// Standard Unicode symbols.
    Unicode,
    /// ASCII-only fallback.
    Ascii,
}

impl ChatConfig {
    /// Load config from a file, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save config to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Simulated reply delay as a [`std::time::Duration`].
    pub fn reply_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.reply_delay_ms)
    }
}

/// Errors from config load/save.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
