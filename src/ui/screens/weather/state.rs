use crate::models::WeatherReport;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherScreenState {
    pub city: String,
    pub fetch: FetchState<WeatherReport>,
}

impl UiState for WeatherScreenState {}

impl WeatherScreenState {
    /// Search is offered only for a non-blank city.
    pub fn can_search(&self) -> bool {
        !self.city.trim().is_empty()
    }
}
