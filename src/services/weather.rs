//! Simulated weather lookup.
//!
//! No network call is made: after an artificial delay the service fabricates a
//! reading and a forecast. The error paths exist so a real backend can slot in
//! behind the same contract.

use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use uuid::Uuid;

use crate::config::WeatherConfig;
use crate::models::{ForecastDay, Weather, WeatherReport};
use crate::services::ServiceError;

pub const CONDITIONS: [&str; 4] = ["Sunny", "Partly Cloudy", "Rainy", "Cloudy"];
pub const HIGH_RANGE: RangeInclusive<i32> = 65..=85;
pub const LOW_RANGE: RangeInclusive<i32> = 50..=60;

/// Source of randomness for generated readings.
pub trait Sampler: Send {
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `range`.
    fn in_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (start, end) = (*range.start(), *range.end());
        if end <= start {
            return start;
        }
        let span = (i64::from(end) - i64::from(start) + 1) as u64;
        start + (self.next_u64() % span) as i32
    }

    /// Uniform index below `len`.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }
}

/// Draws entropy from random (v4) UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSampler;

impl Sampler for UuidSampler {
    fn next_u64(&mut self) -> u64 {
        // Both halves carry fixed version/variant bits; mixing hides them.
        let (high, low) = Uuid::new_v4().as_u64_pair();
        high ^ low.rotate_left(29)
    }
}

pub struct WeatherService {
    config: WeatherConfig,
    sampler: Box<dyn Sampler>,
    current_weather: Option<Weather>,
    forecast: Vec<ForecastDay>,
}

impl WeatherService {
    pub fn new(config: WeatherConfig) -> Self {
        Self::with_sampler(config, Box::new(UuidSampler))
    }

    pub fn with_sampler(config: WeatherConfig, sampler: Box<dyn Sampler>) -> Self {
        Self {
            config,
            sampler,
            current_weather: None,
            forecast: Vec::new(),
        }
    }

    /// Last successful reading.
    pub fn current_weather(&self) -> Option<&Weather> {
        self.current_weather.as_ref()
    }

    /// Forecast from the last successful search.
    pub fn forecast(&self) -> &[ForecastDay] {
        &self.forecast
    }

    /// Look up `city`, replacing the held reading and forecast wholesale.
    pub async fn fetch_weather(&mut self, city: &str) -> Result<WeatherReport, ServiceError> {
        self.fetch_weather_on(city, Local::now().date_naive()).await
    }

    /// Same as [`fetch_weather`](Self::fetch_weather) with an explicit "today".
    pub async fn fetch_weather_on(
        &mut self,
        city: &str,
        today: NaiveDate,
    ) -> Result<WeatherReport, ServiceError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ServiceError::InvalidUrl);
        }

        tracing::debug!(city, latency_ms = self.config.latency_ms, "Simulating weather request");
        tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;

        let current = Weather {
            id: Uuid::new_v4(),
            city: city.to_string(),
            temperature: 72,
            condition: "Sunny".to_string(),
            humidity: 45,
        };
        let forecast = self.generate_forecast(today);

        self.current_weather = Some(current.clone());
        self.forecast = forecast.clone();

        tracing::info!(city, days = forecast.len(), "Weather loaded");
        Ok(WeatherReport { current, forecast })
    }

    /// Forecast for `forecast_days` consecutive days starting at `today`.
    pub fn generate_forecast(&mut self, today: NaiveDate) -> Vec<ForecastDay> {
        (0..self.config.forecast_days)
            .map(|offset| {
                let date = today
                    .checked_add_days(Days::new(u64::from(offset)))
                    .unwrap_or(today);
                let high = self.sampler.in_range(HIGH_RANGE);
                let low = self.sampler.in_range(LOW_RANGE);
                let condition = CONDITIONS[self.sampler.index(CONDITIONS.len())];
                ForecastDay {
                    id: Uuid::new_v4(),
                    date,
                    high,
                    low,
                    condition: condition.to_string(),
                }
            })
            .collect()
    }
}
