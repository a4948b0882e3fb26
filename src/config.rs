//! User configuration and preferences

use crate::domain::RemoteField;
use crate::error::{JobSwipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional defaults read from `~/.config/jobswipe/config.json`.
///
/// Command-line flags take precedence over every field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Listing catalog used when `--listings` is not given
    pub listings: Option<PathBuf>,
    /// Settle delay in milliseconds
    pub settle_ms: Option<u64>,
    /// Field inspected by the remote-only filter
    pub remote_field: Option<RemoteField>,
    /// Keywords that mark a listing as remote
    pub remote_keywords: Option<Vec<String>>,
    /// Start with the remote-only preference enabled
    pub remote_only: bool,
}

impl UserConfig {
    /// Get the config file path (~/.config/jobswipe/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jobswipe").join("config.json"))
    }

    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            JobSwipeError::ConfigError("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            JobSwipeError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            JobSwipeError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }
}
