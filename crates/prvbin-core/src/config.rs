use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PrvbinError, PrvbinResult};
use crate::types::{Expire, Formatter};
use crate::DEFAULT_URL;

/// Default location of the config file (`~` is expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/prvbin/config.toml";

/// Top-level configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrvbinConfig {
    pub server: ServerConfig,
    pub paste: PasteDefaults,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// PrivateBin instance the paste is posted to
    pub url: String,
}

/// Defaults applied to `prvbin create` when the matching flag is absent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteDefaults {
    /// Paste lifetime (default: 1month)
    pub expire: Expire,
    /// Frontend formatter (default: plaintext)
    pub formatter: Formatter,
    /// Deflate the paste before encryption (default: true)
    pub compress: bool,
    /// Delete the paste after the first read
    pub burn: bool,
    /// Allow comments on the paste
    pub open_discussion: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (default: warn)
    pub level: String,
    /// Log format: "json" or "text"
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
        }
    }
}

impl Default for PasteDefaults {
    fn default() -> Self {
        Self {
            expire: Expire::OneMonth,
            formatter: Formatter::PlainText,
            compress: true,
            burn: false,
            open_discussion: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

impl PrvbinConfig {
    /// Load the config file at `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> PrvbinResult<Self> {
        let path = expand_tilde(path);
        if !path.exists() {
            tracing::debug!(
                "config file not found: {}  (using defaults)",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
            .map_err(|e| PrvbinError::Config(format!("parsing {}: {e}", path.display())))
    }

    pub fn from_toml(content: &str) -> PrvbinResult<Self> {
        toml::from_str(content).map_err(|e| PrvbinError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> PrvbinResult<String> {
        toml::to_string_pretty(self).map_err(|e| PrvbinError::Config(e.to_string()))
    }
}

/// Expand `~` in path to the user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    match s.strip_prefix("~/") {
        Some(rest) => {
            let home = std::env::var("HOME").unwrap_or_default();
            PathBuf::from(home).join(rest)
        }
        None => path.to_path_buf(),
    }
}
