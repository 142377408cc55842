//! Region ranking endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use shared::{Coordinate, DatePreset, DateWindow, DateWindowError};

use crate::error::{AppError, AppResult};
use crate::models::RankedRegion;
use crate::services::orchestrator::FetchPolicy;
use crate::services::rank::{RankParams, RankService};
use crate::AppState;

/// Query parameters for `GET /api/v1/rank`
#[derive(Debug, Deserialize)]
pub struct RankQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(rename = "maxDriveMins")]
    pub max_drive_mins: Option<f64>,
    /// Comma-separated explicit dates, overrides `when`
    pub dates: Option<String>,
    pub when: Option<DatePreset>,
}

/// Rank all regions within reach for the requested window.
///
/// Partial upstream failure drops the affected regions from the list;
/// the response itself always succeeds.
pub async fn rank_regions(
    State(state): State<AppState>,
    Query(query): Query<RankQuery>,
) -> AppResult<Json<Vec<RankedRegion>>> {
    let params = resolve_params(&query, DatePreset::default())?;
    let policy = FetchPolicy::for_rank(&state.config.rank);
    let service = RankService::new(state.regions.clone(), state.forecast.clone());
    Ok(Json(service.rank(&params, &policy).await))
}

/// Shared query resolution for the rank and region-lookup endpoints.
///
/// A home location needs both `lat` and `lon`; supplying one without the
/// other is a validation error. `maxDriveMins` only takes effect with a
/// home location and must be positive.
pub fn resolve_params(query: &RankQuery, default_preset: DatePreset) -> AppResult<RankParams> {
    let home = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(AppError::Validation(
                    "lat/lon out of range".to_string(),
                ));
            }
            Some(Coordinate::new(lat, lon))
        }
        (None, None) => None,
        _ => {
            return Err(AppError::Validation(
                "lat and lon must be supplied together".to_string(),
            ))
        }
    };

    let max_drive_mins = match query.max_drive_mins {
        Some(mins) if mins <= 0.0 || mins.is_nan() => {
            return Err(AppError::Validation(
                "maxDriveMins must be a positive number".to_string(),
            ))
        }
        Some(mins) => mins,
        None => f64::INFINITY,
    };

    let preset = query.when.unwrap_or(default_preset);
    let window = DateWindow::resolve(query.dates.as_deref(), preset, Utc::now().date_naive())
        .map_err(|DateWindowError::InvalidDate(d)| {
            AppError::Validation(format!("invalid date: {d}"))
        })?;

    Ok(RankParams {
        home,
        max_drive_mins,
        window,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> RankQuery {
        RankQuery {
            lat: None,
            lon: None,
            max_drive_mins: None,
            dates: None,
            when: None,
        }
    }

    #[test]
    fn default_window_is_next_weekend() {
        let params = resolve_params(&query(), DatePreset::default()).unwrap();
        assert_eq!(params.window.dates().len(), 2);
        assert!(params.home.is_none());
        assert!(params.max_drive_mins.is_infinite());
    }

    #[test]
    fn lat_without_lon_is_rejected() {
        let mut q = query();
        q.lat = Some(53.4);
        assert!(matches!(
            resolve_params(&q, DatePreset::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut q = query();
        q.lat = Some(95.0);
        q.lon = Some(0.0);
        assert!(matches!(
            resolve_params(&q, DatePreset::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn non_positive_drive_limit_is_rejected() {
        let mut q = query();
        q.max_drive_mins = Some(0.0);
        assert!(matches!(
            resolve_params(&q, DatePreset::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn explicit_dates_override_preset() {
        let mut q = query();
        q.dates = Some("2025-03-02,2025-03-01".to_string());
        q.when = Some(DatePreset::Today);
        let params = resolve_params(&q, DatePreset::default()).unwrap();
        assert_eq!(params.window.dates(), ["2025-03-01", "2025-03-02"]);
    }

    #[test]
    fn malformed_date_is_a_validation_error() {
        let mut q = query();
        q.dates = Some("not-a-date".to_string());
        assert!(matches!(
            resolve_params(&q, DatePreset::default()),
            Err(AppError::Validation(_))
        ));
    }
}
