//! Climbing region catalog entries

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// A climbing region: static reference data loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Unique, stable identifier
    pub id: String,
    pub name: String,
    pub area: Option<String>,
    /// Representative coordinate for forecast lookups
    pub coordinate: Coordinate,
    /// Rock types, first-listed takes precedence for temperature bands
    pub rocks: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub external: RegionExternal,
}

/// External forecast-site identifiers for link generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionExternal {
    pub met_office_id: Option<String>,
    pub bbc_id: Option<String>,
    pub windy_zoom: Option<u8>,
}
