//! Explicit wiring of the services the screens operate on.
//!
//! Screens never reach for global state: the runtime builds one
//! [`AppContext`] and passes it by reference to whatever needs a service.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::services::{
    ClientError, ExpenseService, FavoritesService, GitHubService, TaskBoard, TaskError,
    WeatherService,
};
use crate::storage::{JsonFileStore, KeyValueStore};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Invalid task settings: {0}")]
    Tasks(#[from] TaskError),
}

pub struct AppContext {
    pub github: GitHubService,
    /// Locked across the simulated latency, so a spawned fetch owns it
    /// until the reading is stored.
    pub weather: Arc<Mutex<WeatherService>>,
    pub favorites: FavoritesService,
    pub expenses: ExpenseService,
    pub tasks: TaskBoard,
}

impl AppContext {
    /// Build every service from `config`, persisting favorites under the
    /// configured data directory.
    pub fn from_config(config: &Config, today: NaiveDate) -> Result<Self, SetupError> {
        let data_dir = config.storage.resolved_data_dir();
        let store = JsonFileStore::in_dir(&data_dir);
        tracing::info!(path = %store.path().display(), "Using favorites store");
        Self::with_store(config, Box::new(store), today)
    }

    /// Same as [`from_config`](Self::from_config) with a caller-supplied store.
    pub fn with_store(
        config: &Config,
        store: Box<dyn KeyValueStore>,
        today: NaiveDate,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            github: GitHubService::new(&config.github)?,
            weather: Arc::new(Mutex::new(WeatherService::new(config.weather.clone()))),
            favorites: FavoritesService::load(store),
            expenses: ExpenseService::with_demo_data(today),
            tasks: TaskBoard::from_config(&config.tasks)?,
        })
    }
}
