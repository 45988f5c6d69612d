//! Plain data records shared by services and screens.

mod expense;
mod github;
mod task;
mod weather;

pub use expense::{Expense, ExpenseCategory};
pub use github::{GitHubUser, Profile, Repository};
pub use task::{Category, Task};
pub use weather::{ForecastDay, Weather, WeatherReport};
