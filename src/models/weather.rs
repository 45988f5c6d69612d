use chrono::NaiveDate;
use uuid::Uuid;

/// Current conditions for one city. Temperatures are in °F.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weather {
    pub id: Uuid,
    pub city: String,
    pub temperature: i32,
    pub condition: String,
    /// Relative humidity in percent.
    pub humidity: u8,
}

/// One day of a generated forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastDay {
    pub id: Uuid,
    pub date: NaiveDate,
    pub high: i32,
    pub low: i32,
    pub condition: String,
}

/// Result of one weather search: current reading plus forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub current: Weather,
    pub forecast: Vec<ForecastDay>,
}
