use crate::models::WeatherReport;
use crate::ui::fetch::FetchReducer;
use crate::ui::mvi::Reducer;

use super::intent::WeatherIntent;
use super::state::WeatherScreenState;

pub struct WeatherReducer;

impl Reducer for WeatherReducer {
    type State = WeatherScreenState;
    type Intent = WeatherIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WeatherIntent::Edit(edit) => WeatherScreenState {
                city: edit.apply(state.city),
                ..state
            },
            WeatherIntent::Fetch(fetch) => WeatherScreenState {
                fetch: FetchReducer::<WeatherReport>::reduce(state.fetch, fetch),
                ..state
            },
        }
    }
}
