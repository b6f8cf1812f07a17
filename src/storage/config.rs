//! Configuration management
//!
//! The API URL and request timeout are stored in a TOML file.
//! Priority: --url argument > FORM3_API_URL environment variable > config.toml > built-in default

use super::Result;
use crate::core::form3::Form3Config;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Persisted CLI configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Account API base URL
    pub url: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir
            .join(".config")
            .join("form3-accounts")
            .join("config.toml"))
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn set_timeout_seconds(&mut self, seconds: u64) {
        self.timeout_seconds = Some(seconds);
    }

    /// Build the library configuration. `url_override` comes from the command
    /// line or environment and wins over the stored URL.
    pub fn to_client_config(&self, url_override: Option<&str>) -> Form3Config {
        let url = url_override
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .or_else(|| self.url.clone())
            .unwrap_or_default();

        // Zero counts as unset.
        let timeout_seconds = self.timeout_seconds.filter(|seconds| {
            if *seconds == 0 {
                log::warn!("Ignoring timeout_seconds = 0 in configuration");
            }
            *seconds > 0
        });

        Form3Config {
            url,
            timeout: timeout_seconds.map(Duration::from_secs),
        }
    }
}
