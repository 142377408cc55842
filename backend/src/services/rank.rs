//! Region ranking and single-region lookup
//!
//! Fans forecast fetches out across the catalog through the orchestrator,
//! scores each region over the requested window and returns the list
//! sorted by score. Regions beyond the drive-time limit are filtered out
//! before any fetch is issued, so they cost no upstream calls.

use std::sync::Arc;

use chrono::SecondsFormat;

use shared::{
    classify_window, drive_minutes, haversine_km, score_region, Coordinate, DateWindow, Region,
};

use crate::error::{AppError, AppResult};
use crate::models::{RankedRegion, RegionLinks};
use crate::services::forecast::{Forecast, ForecastService};
use crate::services::orchestrator::{fetch_all, FetchPolicy, FetchTarget};

/// Resolved inputs for one ranking request
#[derive(Debug, Clone)]
pub struct RankParams {
    /// Caller's reference location, if provided
    pub home: Option<Coordinate>,
    /// Drive-time limit in minutes; infinite means no limit
    pub max_drive_mins: f64,
    pub window: DateWindow,
}

/// Ranking service over the static region catalog
#[derive(Clone)]
pub struct RankService {
    regions: Arc<Vec<Region>>,
    forecast: Arc<ForecastService>,
}

impl RankService {
    pub fn new(regions: Arc<Vec<Region>>, forecast: ForecastService) -> Self {
        Self {
            regions,
            forecast: Arc::new(forecast),
        }
    }

    /// Rank every catalog region within reach for the requested window.
    ///
    /// Regions whose forecast cannot be obtained are dropped from the
    /// result rather than failing the request; an empty list is a valid
    /// response.
    pub async fn rank(&self, params: &RankParams, policy: &FetchPolicy) -> Vec<RankedRegion> {
        let candidates: Vec<(&Region, Option<u32>)> = self
            .regions
            .iter()
            .map(|region| (region, distance_from(params.home, region)))
            .filter(|(_, dist)| within_limit(*dist, params.max_drive_mins))
            .collect();

        tracing::info!(
            total = self.regions.len(),
            candidates = candidates.len(),
            dates = %params.window.key(),
            "ranking regions"
        );

        let targets = candidates
            .iter()
            .map(|(region, _)| FetchTarget {
                coordinate: region.coordinate,
                window: params.window.clone(),
            })
            .collect();
        let forecasts = fetch_all(&self.forecast, targets, policy).await;

        let mut ranked: Vec<RankedRegion> = candidates
            .into_iter()
            .zip(forecasts)
            .filter_map(|((region, dist), forecast)| {
                forecast.map(|f| build_result(region, &f, dist, params))
            })
            .collect();

        // Stable sort keeps catalog order for equal scores
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Score a single region by id.
    ///
    /// # Errors
    /// `NotFound` for an unknown id; `WeatherUnavailable` when the
    /// forecast cannot be obtained even after retries.
    pub async fn lookup(
        &self,
        region_id: &str,
        params: &RankParams,
        policy: &FetchPolicy,
    ) -> AppResult<RankedRegion> {
        let region = self
            .regions
            .iter()
            .find(|r| r.id == region_id)
            .ok_or_else(|| AppError::NotFound(format!("Region '{}'", region_id)))?;

        let targets = vec![FetchTarget {
            coordinate: region.coordinate,
            window: params.window.clone(),
        }];
        let forecast = fetch_all(&self.forecast, targets, policy)
            .await
            .into_iter()
            .next()
            .flatten()
            .ok_or(AppError::WeatherUnavailable)?;

        let dist = distance_from(params.home, region);
        Ok(build_result(region, &forecast, dist, params))
    }
}

fn distance_from(home: Option<Coordinate>, region: &Region) -> Option<u32> {
    home.map(|h| drive_minutes(haversine_km(h, region.coordinate)))
}

fn within_limit(distance_mins: Option<u32>, max_drive_mins: f64) -> bool {
    match distance_mins {
        Some(dist) if max_drive_mins.is_finite() => f64::from(dist) <= max_drive_mins,
        _ => true,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn avg(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn build_result(
    region: &Region,
    forecast: &Forecast,
    distance_mins: Option<u32>,
    params: &RankParams,
) -> RankedRegion {
    let daily = classify_window(&forecast.series, params.window.dates());
    let assessment = score_region(
        &forecast.series,
        &region.rocks,
        distance_mins,
        params.max_drive_mins,
    );

    RankedRegion {
        id: region.id.clone(),
        name: region.name.clone(),
        area: region.area.clone(),
        score: assessment.score,
        why: assessment.reasons,
        daily,
        distance_mins,
        updated_at: forecast
            .fetched_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        coords: region.coordinate,
        ukc_url: ukc_url(region.coordinate),
        avg_temp_c: round1(avg(&forecast.series.temp_c)),
        avg_wind_mph: round1(avg(&forecast.series.wind_mph)),
        avg_rain_mm: round1(avg(&forecast.series.rain_mm)),
        links: region_links(region, params.window.first()),
    }
}

fn ukc_url(c: Coordinate) -> String {
    format!(
        "https://www.ukclimbing.com/logbook/crags/?location={}%2C+{}&distance=20",
        c.latitude, c.longitude
    )
}

/// Deep links to external forecast sites. The Met Office link anchors on
/// the window's first date so the page opens on the right day.
fn region_links(region: &Region, first_date: &str) -> RegionLinks {
    let c = region.coordinate;
    let bbc = match &region.external.bbc_id {
        Some(id) => format!("https://www.bbc.co.uk/weather/{id}"),
        None => format!(
            "https://www.bbc.co.uk/weather?lat={}&lon={}",
            c.latitude, c.longitude
        ),
    };
    let metoffice = match &region.external.met_office_id {
        Some(id) => format!("https://weather.metoffice.gov.uk/forecast/{id}?n#?date={first_date}"),
        None => format!(
            "https://www.metoffice.gov.uk/weather/search?query={}",
            encode_query(&region.name)
        ),
    };
    let zoom = region.external.windy_zoom.unwrap_or(8);
    let windy = format!(
        "https://www.windy.com/{lat:.3}/{lon:.3}?{lat:.3},{lon:.3},{zoom}",
        lat = c.latitude,
        lon = c.longitude,
    );
    RegionLinks {
        bbc,
        metoffice,
        windy,
    }
}

/// Percent-encode a region name for the search-fallback links. Only
/// covers the characters the catalog actually contains.
fn encode_query(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '&' => out.push_str("%26"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use shared::{HourlySeries, RegionExternal};

    fn region(id: &str, lat: f64, lon: f64) -> Region {
        Region {
            id: id.to_string(),
            name: "Test Region".to_string(),
            area: None,
            coordinate: Coordinate::new(lat, lon),
            rocks: vec!["grit".to_string()],
            tags: vec![],
            external: RegionExternal::default(),
        }
    }

    fn window() -> DateWindow {
        DateWindow::resolve(
            Some("2025-01-11"),
            shared::DatePreset::Today,
            chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
        .unwrap()
    }

    fn forecast() -> Forecast {
        Forecast {
            series: HourlySeries {
                hours: vec!["2025-01-11T12:00".to_string()],
                rain_mm: vec![0.0],
                pop: vec![5.0],
                wind_mph: vec![10.0],
                gust_mph: vec![15.0],
                temp_c: vec![8.0],
                cloud_pct: vec![30.0],
            },
            fetched_at: DateTime::parse_from_rfc3339("2025-01-10T09:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            stale: false,
            error: false,
        }
    }

    #[test]
    fn distance_limit_excludes_far_regions_before_fetch() {
        // Sheffield home, a region ~54 km away is ~50 minutes
        let home = Some(Coordinate::new(53.3811, -1.4701));
        let far = region("far", 50.17, -5.55);
        let near = region("near", 53.45, -1.88);
        let far_mins = distance_from(home, &far);
        let near_mins = distance_from(home, &near);
        assert!(!within_limit(far_mins, 60.0));
        assert!(within_limit(near_mins, 60.0));
    }

    #[test]
    fn no_home_location_passes_every_region() {
        let far = region("far", 50.17, -5.55);
        assert!(within_limit(distance_from(None, &far), 30.0));
    }

    #[test]
    fn infinite_limit_passes_every_region() {
        let home = Some(Coordinate::new(53.3811, -1.4701));
        let far = region("far", 50.17, -5.55);
        assert!(within_limit(distance_from(home, &far), f64::INFINITY));
    }

    #[test]
    fn result_carries_daily_conditions_and_links() {
        let r = region("peak-n", 53.45, -1.88);
        let params = RankParams {
            home: None,
            max_drive_mins: f64::INFINITY,
            window: window(),
        };
        let out = build_result(&r, &forecast(), None, &params);
        assert_eq!(out.daily.len(), 1);
        assert_eq!(out.daily[0].date, "2025-01-11");
        assert_eq!(out.updated_at, "2025-01-10T09:00:00Z");
        assert!(out.ukc_url.contains("ukclimbing.com"));
        assert!(out.links.windy.starts_with("https://www.windy.com/53.450/-1.880"));
        assert_eq!(
            out.links.bbc,
            "https://www.bbc.co.uk/weather?lat=53.45&lon=-1.88"
        );
    }

    #[test]
    fn id_links_are_used_when_present() {
        let mut r = region("peak-n", 53.45, -1.88);
        r.external.bbc_id = Some("2648405".to_string());
        r.external.met_office_id = Some("gcw858zgz".to_string());
        let links = region_links(&r, "2025-01-11");
        assert_eq!(links.bbc, "https://www.bbc.co.uk/weather/2648405");
        assert_eq!(
            links.metoffice,
            "https://weather.metoffice.gov.uk/forecast/gcw858zgz?n#?date=2025-01-11"
        );
    }

    #[test]
    fn missing_met_office_id_falls_back_to_name_search() {
        let mut r = region("r", 53.0, -1.0);
        r.name = "Chew Valley".to_string();
        let links = region_links(&r, "2025-01-11");
        assert_eq!(
            links.metoffice,
            "https://www.metoffice.gov.uk/weather/search?query=Chew%20Valley"
        );
    }
}
