use crate::models::WeatherReport;
use crate::ui::fetch::FetchIntent;
use crate::ui::mvi::Intent;
use crate::ui::text_field::TextEdit;

#[derive(Debug, Clone)]
pub enum WeatherIntent {
    Edit(TextEdit),
    Fetch(FetchIntent<WeatherReport>),
}

impl Intent for WeatherIntent {}
