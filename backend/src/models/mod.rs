//! API-facing response models

use serde::Serialize;

use shared::{Coordinate, DailyCondition};

/// One entry of the ranked result list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRegion {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Suitability score, 0-100
    pub score: u8,
    /// Up to three human-readable reasons
    pub why: Vec<String>,
    /// Condition summary per requested date
    pub daily: Vec<DailyCondition>,
    /// Drive-time estimate in minutes; absent without a reference location
    pub distance_mins: Option<u32>,
    /// When the underlying forecast was fetched (RFC 3339)
    pub updated_at: String,
    pub coords: Coordinate,
    pub ukc_url: String,
    pub avg_temp_c: f64,
    pub avg_wind_mph: f64,
    pub avg_rain_mm: f64,
    pub links: RegionLinks,
}

/// Deep links to external forecast sites for a region
#[derive(Debug, Clone, Serialize)]
pub struct RegionLinks {
    pub bbc: String,
    pub metoffice: String,
    pub windy: String,
}

/// Result of a cache-priming pass
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmSummary {
    pub ok: bool,
    pub elapsed_ms: u64,
    pub regions: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<String>,
}
