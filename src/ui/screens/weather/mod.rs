//! City search backed by the simulated weather service.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::WeatherIntent;
pub use reducer::WeatherReducer;
pub use state::WeatherScreenState;
pub use view::render;
