//! Cache warming
//!
//! Primes the forecast cache for every catalog region over the union of
//! the current and next weekend, so weekend-preset ranking requests hit
//! warm entries. Scheduling is left to an external caller (cron or a
//! platform scheduler) hitting the warm endpoint.

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, Utc};

use shared::{weekend_of, DateWindow, Region};

use crate::models::WarmSummary;
use crate::services::forecast::ForecastService;
use crate::services::orchestrator::{fetch_all, FetchPolicy, FetchTarget};

/// The window a warming pass fetches: both upcoming weekends as one
/// deduplicated set of dates. When today is a Saturday or Sunday the two
/// weekends overlap and the union collapses accordingly.
pub fn warm_window(today: NaiveDate) -> DateWindow {
    let this = weekend_of(today);
    let next = [this[0] + chrono::Duration::days(7), this[1] + chrono::Duration::days(7)];
    DateWindow::from_dates(this.into_iter().chain(next).collect())
}

/// Run one warming pass across the whole catalog.
pub async fn warm_all(
    regions: &[Region],
    forecast: &Arc<ForecastService>,
    policy: &FetchPolicy,
) -> WarmSummary {
    let window = warm_window(Utc::now().date_naive());
    warm_all_for_window(regions, forecast, policy, &window).await
}

pub async fn warm_all_for_window(
    regions: &[Region],
    forecast: &Arc<ForecastService>,
    policy: &FetchPolicy,
    window: &DateWindow,
) -> WarmSummary {
    let started = Instant::now();
    tracing::info!(
        regions = regions.len(),
        dates = %window.key(),
        "starting cache warm"
    );

    let targets = regions
        .iter()
        .map(|region| FetchTarget {
            coordinate: region.coordinate,
            window: window.clone(),
        })
        .collect();
    let results = fetch_all(forecast, targets, policy).await;

    let failures: Vec<String> = regions
        .iter()
        .zip(&results)
        .filter(|(_, result)| result.is_none())
        .map(|(region, _)| region.id.clone())
        .collect();

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let summary = WarmSummary {
        ok: failures.is_empty(),
        elapsed_ms,
        regions: regions.len(),
        succeeded: regions.len() - failures.len(),
        failed: failures.len(),
        failures,
    };

    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        elapsed_ms,
        "cache warm finished"
    );
    summary
}
