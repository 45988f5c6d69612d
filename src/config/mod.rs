mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, GitHubConfig, OrphanPolicyKind, StorageConfig, TasksConfig, WeatherConfig,
};
