//! Hourly forecast series and derived daily conditions

use serde::{Deserialize, Serialize};

/// An hourly weather series as parallel arrays.
///
/// Index `i` across all arrays describes the same hour. `hours` holds
/// hour-resolution ISO-local timestamps (`YYYY-MM-DDTHH:00`). The series
/// may be empty, which downstream code treats as a degenerate case rather
/// than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HourlySeries {
    pub hours: Vec<String>,
    /// Precipitation per hour (mm)
    pub rain_mm: Vec<f64>,
    /// Precipitation probability (%)
    pub pop: Vec<f64>,
    /// Wind speed (mph)
    pub wind_mph: Vec<f64>,
    /// Wind gust (mph)
    pub gust_mph: Vec<f64>,
    /// Temperature (°C)
    pub temp_c: Vec<f64>,
    /// Cloud cover (%)
    pub cloud_pct: Vec<f64>,
}

impl HourlySeries {
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }
}

/// Condition summary for a single calendar date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyCondition {
    pub date: String,
    pub icon: String,
    pub temp_avg_c: f64,
    pub wind_avg_mph: f64,
    pub rain_sum_mm: f64,
}
