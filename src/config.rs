//! Settings
//!
//! Built-in defaults target the Michigan Lottery's Weapon-a-Week raffle. A TOML
//! file passed with `--config` may override any of them:
//!
//! ```toml
//! api_url = "https://www.michiganlottery.com/api"
//! game_code = "3"
//! raffle_name = "Weapon-a-Week Raffle"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::DEFAULT_API_URL;

/// Errors loading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not valid settings TOML
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File that was requested
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Endpoint receiving the draw-results query
    pub api_url: String,
    /// Game whose draws are fetched
    pub game_code: String,
    /// Raffle name shown in the banner
    pub raffle_name: String,
}

fn default_game_code() -> String {
    "3".to_string()
}

fn default_raffle_name() -> String {
    "Weapon-a-Week Raffle".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            game_code: default_game_code(),
            raffle_name: default_raffle_name(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys keep their defaults
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load_file)
    }

    /// Replace the API URL
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
