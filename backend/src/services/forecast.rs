//! Stale-while-revalidate forecast cache
//!
//! Fronts the Open-Meteo client with a key-value store keyed by rounded
//! coordinate and date window. Entries are served fresh, served stale with
//! a fire-and-forget background refresh, or refetched synchronously,
//! depending on age. Staleness is computed from the stored fetch
//! timestamp; the store TTL is only a backstop eviction.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared::{Coordinate, DateWindow, HourlySeries};

use crate::cache::ForecastStore;
use crate::config::CacheConfig;
use crate::error::AppResult;
use crate::external::OpenMeteoClient;

/// Cache freshness tiers, classified by entry age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessTier {
    Fresh,
    StaleAcceptable,
    Expired,
}

/// Freshness thresholds and store TTL
#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    pub fresh: Duration,
    pub stale_max: Duration,
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            fresh: Duration::from_secs(2 * 3600),
            stale_max: Duration::from_secs(12 * 3600),
            ttl_secs: 86_400,
        }
    }
}

impl From<&CacheConfig> for CacheSettings {
    fn from(cfg: &CacheConfig) -> Self {
        Self {
            fresh: Duration::from_secs(cfg.fresh_hours * 3600),
            stale_max: Duration::from_secs(cfg.stale_max_hours * 3600),
            ttl_secs: cfg.ttl_secs,
        }
    }
}

/// Classify an entry age against the freshness thresholds. Ages exactly on
/// a boundary stay in the milder tier.
pub fn freshness_tier(age: Duration, settings: &CacheSettings) -> FreshnessTier {
    if age <= settings.fresh {
        FreshnessTier::Fresh
    } else if age <= settings.stale_max {
        FreshnessTier::StaleAcceptable
    } else {
        FreshnessTier::Expired
    }
}

/// What the cache hands back to callers
#[derive(Debug, Clone)]
pub struct Forecast {
    pub series: HourlySeries,
    pub fetched_at: DateTime<Utc>,
    pub stale: bool,
    pub error: bool,
}

/// Serialized cache entry: the series plus when it was fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub series: HourlySeries,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub fetched_at: DateTime<Utc>,
}

/// Cache key: coordinate rounded to a ~1.1 km grid plus the date window.
/// The 2-decimal rounding intentionally coalesces nearby regions sharing a
/// grid cell onto one upstream fetch; changing the precision changes cache
/// hit rates and observable latency.
pub fn cache_key(coordinate: Coordinate, window: &DateWindow) -> String {
    format!(
        "forecast:{:.2},{:.2}:{}",
        coordinate.latitude,
        coordinate.longitude,
        window.key()
    )
}

/// Forecast cache service
#[derive(Clone)]
pub struct ForecastService {
    client: OpenMeteoClient,
    store: Option<Arc<dyn ForecastStore>>,
    settings: CacheSettings,
}

impl ForecastService {
    pub fn new(
        client: OpenMeteoClient,
        store: Option<Arc<dyn ForecastStore>>,
        settings: CacheSettings,
    ) -> Self {
        Self {
            client,
            store,
            settings,
        }
    }

    /// Get the hourly series for a coordinate and window, serving cached
    /// data according to the freshness tiers. Never returns an error: the
    /// worst case is an empty series flagged with `error`.
    pub async fn get(&self, coordinate: Coordinate, window: &DateWindow) -> Forecast {
        let key = cache_key(coordinate, window);
        let cached = self.read_entry(&key).await;

        if let Some(entry) = &cached {
            let age = (Utc::now() - entry.fetched_at)
                .to_std()
                .unwrap_or_default();
            match freshness_tier(age, &self.settings) {
                FreshnessTier::Fresh => {
                    tracing::debug!(%key, age_secs = age.as_secs(), "cache hit");
                    return Forecast {
                        series: entry.series.clone(),
                        fetched_at: entry.fetched_at,
                        stale: false,
                        error: false,
                    };
                }
                FreshnessTier::StaleAcceptable => {
                    tracing::debug!(%key, age_secs = age.as_secs(), "cache stale, refreshing");
                    self.spawn_refresh(key, coordinate, window.clone());
                    return Forecast {
                        series: entry.series.clone(),
                        fetched_at: entry.fetched_at,
                        stale: true,
                        error: false,
                    };
                }
                FreshnessTier::Expired => {
                    tracing::debug!(%key, age_secs = age.as_secs(), "cache expired");
                }
            }
        } else {
            tracing::debug!(%key, "cache miss");
        }

        match self.fetch_and_store(&key, coordinate, window).await {
            Ok(entry) => Forecast {
                series: entry.series,
                fetched_at: entry.fetched_at,
                stale: false,
                error: false,
            },
            Err(err) => {
                tracing::warn!(%key, error = %err, "upstream fetch failed");
                // Serve whatever we still have, however stale, before
                // falling back to an explicit empty series
                match cached {
                    Some(entry) => Forecast {
                        series: entry.series,
                        fetched_at: entry.fetched_at,
                        stale: true,
                        error: true,
                    },
                    None => Forecast {
                        series: HourlySeries::default(),
                        fetched_at: Utc::now(),
                        stale: false,
                        error: true,
                    },
                }
            }
        }
    }

    async fn read_entry(&self, key: &str) -> Option<CacheEntry> {
        let store = self.store.as_ref()?;
        let raw = store.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(%key, error = %err, "discarding corrupt cache entry");
                None
            }
        }
    }

    /// One upstream call; on success the entry replaces whatever is stored
    /// under the key (last writer wins).
    async fn fetch_and_store(
        &self,
        key: &str,
        coordinate: Coordinate,
        window: &DateWindow,
    ) -> AppResult<CacheEntry> {
        let series = self.client.fetch_hourly(coordinate, window).await?;
        let entry = CacheEntry {
            series,
            fetched_at: Utc::now(),
        };

        if let Some(store) = &self.store {
            match serde_json::to_string(&entry) {
                Ok(raw) => store.put(key, raw, self.settings.ttl_secs).await,
                Err(err) => tracing::warn!(%key, error = %err, "failed to serialize cache entry"),
            }
        }
        Ok(entry)
    }

    /// Fire-and-forget refresh for the stale tier. Failures are logged and
    /// never surface to the caller that triggered the refresh.
    fn spawn_refresh(&self, key: String, coordinate: Coordinate, window: DateWindow) {
        let service = self.clone();
        tokio::spawn(async move {
            if let Err(err) = service.fetch_and_store(&key, coordinate, &window).await {
                tracing::warn!(%key, error = %err, "background refresh failed");
            }
        });
    }
}
