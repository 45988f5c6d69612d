use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// GitHub REST API access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// API root (e.g., "https://api.github.com").
    #[serde(default = "default_github_base_url")]
    pub base_url: String,
    /// Sent as `User-Agent`; GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Simulated weather backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Artificial latency before a reading is produced (default: 1000).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Number of forecast days generated per search (default: 5).
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

/// Where persisted data lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// What happens to a category's tasks when the category is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicyKind {
    /// Refuse to delete a category that still has tasks.
    #[default]
    Block,
    /// Delete the tasks together with the category.
    Cascade,
    /// Move the tasks to the category named by `reassign_to`.
    Reassign,
}

/// To-do list behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    #[serde(default)]
    pub orphan_policy: OrphanPolicyKind,
    /// Category name receiving orphaned tasks under the `reassign` policy.
    #[serde(default)]
    pub reassign_to: Option<String>,
}

fn default_github_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("learning-projects/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_forecast_days() -> u32 {
    5
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: default_github_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl StorageConfig {
    /// Data directory: the configured override, else `<data_dir>/learning-projects`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("learning-projects")
    }
}
