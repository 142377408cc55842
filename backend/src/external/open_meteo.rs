//! Open-Meteo API client for fetching hourly forecast series
//!
//! One GET per (coordinate, date window) requesting hourly precipitation,
//! precipitation probability, cloud cover, wind speed, wind gust and
//! temperature in a fixed unit system (mph, °C) and timezone.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use shared::{filter_hours_by_dates, Coordinate, DateWindow, HourlySeries};

use crate::error::{AppError, AppResult};

const HOURLY_FIELDS: &str = "precipitation,precipitation_probability,cloudcover,windspeed_10m,windgusts_10m,temperature_2m";

/// Timezone used for date-boundary alignment of the hourly series
const FORECAST_TIMEZONE: &str = "Europe/London";

/// Open-Meteo API client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo hourly forecast response
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    hourly: HourlyBlock,
}

#[derive(Debug, Default, Deserialize)]
struct HourlyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    cloudcover: Vec<Option<f64>>,
    #[serde(default)]
    windspeed_10m: Vec<Option<f64>>,
    #[serde(default)]
    windgusts_10m: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
}

impl OpenMeteoClient {
    /// Create a new client for the given forecast endpoint.
    ///
    /// # Errors
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("CragCast/0.1 (+https://cragcast.app)")
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch the hourly series for a coordinate, restricted to the hours
    /// whose date prefix falls inside the requested window.
    pub async fn fetch_hourly(
        &self,
        coordinate: Coordinate,
        window: &DateWindow,
    ) -> AppResult<HourlySeries> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("windspeed_unit", "mph".to_string()),
                ("temperature_unit", "celsius".to_string()),
                ("timezone", FORECAST_TIMEZONE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Open-Meteo returned {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let data: ForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("malformed body: {}", e)))?;

        Ok(Self::restrict_to_window(data.hourly, window))
    }

    fn restrict_to_window(hourly: HourlyBlock, window: &DateWindow) -> HourlySeries {
        let pick = filter_hours_by_dates(&hourly.time, window.dates());
        let value_at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten().unwrap_or(0.0);

        HourlySeries {
            hours: pick.iter().map(|&i| hourly.time[i].clone()).collect(),
            rain_mm: pick.iter().map(|&i| value_at(&hourly.precipitation, i)).collect(),
            pop: pick
                .iter()
                .map(|&i| value_at(&hourly.precipitation_probability, i))
                .collect(),
            wind_mph: pick.iter().map(|&i| value_at(&hourly.windspeed_10m, i)).collect(),
            gust_mph: pick.iter().map(|&i| value_at(&hourly.windgusts_10m, i)).collect(),
            temp_c: pick.iter().map(|&i| value_at(&hourly.temperature_2m, i)).collect(),
            cloud_pct: pick.iter().map(|&i| value_at(&hourly.cloudcover, i)).collect(),
        }
    }
}
