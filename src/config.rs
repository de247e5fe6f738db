//! App configuration — loads optional ~/.glint/config.yaml.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings read from ~/.glint/config.yaml. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Idle window before the buffer is re-tokenized.
    pub debounce_ms: u64,
    /// Hero banner decode duration.
    pub reveal_ms: u64,
    /// Time to type the whole starting buffer.
    pub typing_ms: u64,
    /// Type the starting buffer out instead of showing it at once.
    pub typing: bool,
    /// Name of the starting theme.
    pub theme: Option<String>,
    /// Scramble RNG seed; derived from the clock when absent.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            reveal_ms: 700,
            typing_ms: 1000,
            typing: true,
            theme: None,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    pub fn typing_duration(&self) -> Duration {
        Duration::from_millis(self.typing_ms)
    }
}

/// ~/.glint, where config, theme, store and log live.
pub fn glint_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".glint"))
}

/// Load ~/.glint/config.yaml, or defaults when absent.
pub fn load() -> Result<AppConfig, ConfigError> {
    match glint_dir() {
        Some(dir) => load_from(&dir.join("config.yaml")),
        None => Ok(AppConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}
