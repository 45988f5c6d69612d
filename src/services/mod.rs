//! Services own application state and are the only code that mutates it.

mod error;
pub mod expenses;
pub mod favorites;
pub mod github;
pub mod tasks;
pub mod weather;

pub use error::ServiceError;
pub use expenses::ExpenseService;
pub use favorites::{FavoritesService, FAVORITES_KEY};
pub use github::{ClientError, GitHubService};
pub use tasks::{OrphanPolicy, TaskBoard, TaskError};
pub use weather::{Sampler, UuidSampler, WeatherService};
