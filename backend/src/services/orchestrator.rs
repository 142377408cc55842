//! Bounded-concurrency fetch orchestration
//!
//! Issues cache-backed forecast requests for a set of targets with a
//! concurrency cap, a per-attempt timeout and exponential backoff. Output
//! order always equals input order so callers can zip results positionally
//! with their source regions; a target that exhausts its attempts yields
//! `None` in its slot and never disturbs its siblings.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{sleep, timeout};

use shared::{Coordinate, DateWindow};

use crate::config::{RankConfig, WarmConfig};
use crate::services::forecast::{Forecast, ForecastService};

/// Retry/backoff/concurrency policy for one orchestrated pass
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    pub concurrency: usize,
    pub attempts: u32,
    pub timeout: Duration,
    pub backoff_base: Duration,
}

impl FetchPolicy {
    pub fn for_rank(cfg: &RankConfig) -> Self {
        Self {
            concurrency: cfg.concurrency,
            attempts: cfg.attempts,
            timeout: Duration::from_millis(cfg.timeout_ms),
            backoff_base: Duration::from_millis(cfg.backoff_ms),
        }
    }

    /// Region lookup retries harder: its caller has nothing to fall back on
    pub fn for_lookup(cfg: &RankConfig) -> Self {
        Self {
            attempts: cfg.attempts.max(4),
            ..Self::for_rank(cfg)
        }
    }

    pub fn for_warm(rank: &RankConfig, warm: &WarmConfig) -> Self {
        Self {
            concurrency: warm.concurrency,
            attempts: warm.attempts,
            timeout: Duration::from_millis(rank.timeout_ms),
            backoff_base: Duration::from_millis(rank.backoff_ms),
        }
    }
}

/// One unit of orchestrated work
#[derive(Debug, Clone)]
pub struct FetchTarget {
    pub coordinate: Coordinate,
    pub window: DateWindow,
}

/// Seam between the orchestrator and the forecast cache, so tests can
/// substitute an instrumented fetcher.
#[async_trait]
pub trait FetchForecast: Send + Sync {
    async fn fetch(&self, coordinate: Coordinate, window: &DateWindow) -> Forecast;
}

#[async_trait]
impl FetchForecast for ForecastService {
    async fn fetch(&self, coordinate: Coordinate, window: &DateWindow) -> Forecast {
        self.get(coordinate, window).await
    }
}

/// Fetch every target with at most `policy.concurrency` requests in flight.
///
/// Returns one slot per input target in input order: `Some` holds a
/// forecast whose series is non-empty, `None` marks a target that exhausted
/// its attempts.
pub async fn fetch_all<F>(
    fetcher: &Arc<F>,
    targets: Vec<FetchTarget>,
    policy: &FetchPolicy,
) -> Vec<Option<Forecast>>
where
    F: FetchForecast + 'static,
{
    let mut results: Vec<Option<Forecast>> = targets.iter().map(|_| None).collect();
    let semaphore = Arc::new(Semaphore::new(policy.concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, target) in targets.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let fetcher = Arc::clone(fetcher);
        let policy = policy.clone();
        tasks.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return (index, None);
            };
            (index, fetch_with_retry(fetcher.as_ref(), &target, &policy).await)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => results[index] = result,
            Err(err) => tracing::error!(error = %err, "forecast task failed to join"),
        }
    }
    results
}

/// One target: up to `attempts` tries, each raced against the per-attempt
/// timeout; a result is accepted only if its series is non-empty.
async fn fetch_with_retry<F>(
    fetcher: &F,
    target: &FetchTarget,
    policy: &FetchPolicy,
) -> Option<Forecast>
where
    F: FetchForecast + ?Sized,
{
    for attempt in 0..policy.attempts {
        if attempt > 0 {
            // 300ms, 600ms, 1200ms...
            sleep(policy.backoff_base * 2u32.pow(attempt - 1)).await;
        }

        match timeout(policy.timeout, fetcher.fetch(target.coordinate, &target.window)).await {
            Ok(forecast) if !forecast.series.is_empty() => return Some(forecast),
            Ok(_) => {
                tracing::debug!(
                    lat = target.coordinate.latitude,
                    lon = target.coordinate.longitude,
                    attempt,
                    "empty series"
                );
            }
            Err(_) => {
                tracing::debug!(
                    lat = target.coordinate.latitude,
                    lon = target.coordinate.longitude,
                    attempt,
                    "attempt timed out"
                );
            }
        }
    }

    tracing::warn!(
        lat = target.coordinate.latitude,
        lon = target.coordinate.longitude,
        attempts = policy.attempts,
        "forecast failed after retries"
    );
    None
}
