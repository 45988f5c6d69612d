use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, OrphanPolicyKind};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/learning-projects/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("learning-projects").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The GitHub base URL is an absolute http(s) URL
    /// - The user agent is not empty
    /// - Timeouts and forecast length are non-zero
    /// - The `reassign` orphan policy names a target category
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.github.base_url;
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::ValidationError {
                    message: format!("github.base_url '{}' is not an http(s) URL", base_url),
                });
            }
        }

        if self.github.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "github.user_agent must not be empty".to_string(),
            });
        }

        if self.github.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "github.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.weather.forecast_days == 0 {
            return Err(ConfigError::ValidationError {
                message: "weather.forecast_days must be greater than zero".to_string(),
            });
        }

        if self.tasks.orphan_policy == OrphanPolicyKind::Reassign
            && self
                .tasks
                .reassign_to
                .as_deref()
                .map_or(true, |name| name.trim().is_empty())
        {
            return Err(ConfigError::ValidationError {
                message: "tasks.orphan_policy = \"reassign\" requires tasks.reassign_to"
                    .to_string(),
            });
        }

        Ok(())
    }
}
