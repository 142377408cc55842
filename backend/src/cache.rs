//! Key-value cache store abstraction
//!
//! The forecast cache talks to an injected key-value store with TTL-based
//! eviction. The engine tolerates the store being entirely absent, in which
//! case every request goes upstream.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

/// A serialized-value store with per-entry TTL. Concurrent writers for the
/// same key may race; last write wins.
#[async_trait]
pub trait ForecastStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn put(&self, key: &str, value: String, ttl_secs: u64);
}

/// In-process store backed by a `HashMap` with lazy expiry.
///
/// Stands in for an external KV service; anything implementing
/// [`ForecastStore`] can be swapped in without touching the cache logic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredValue>>,
}

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Instant,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ForecastStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|stored| stored.expires_at > Instant::now())
            .map(|stored| stored.value.clone())
    }

    async fn put(&self, key: &str, value: String, ttl_secs: u64) {
        let mut entries = self.entries.write().await;
        // Lazy purge keeps the map from accumulating dead entries
        let now = Instant::now();
        entries.retain(|_, stored| stored.expires_at > now);
        entries.insert(
            key.to_string(),
            StoredValue {
                value,
                expires_at: now + Duration::from_secs(ttl_secs),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryStore::new();
        store.put("k", "v".to_string(), 60).await;
        assert_eq!(store.get("k").await.as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").await, None);
    }

    #[tokio::test]
    async fn expired_entry_is_not_served() {
        let store = MemoryStore::new();
        store.put("k", "v".to_string(), 0).await;
        assert_eq!(store.get("k").await, None);
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let store = MemoryStore::new();
        store.put("k", "first".to_string(), 60).await;
        store.put("k", "second".to_string(), 60).await;
        assert_eq!(store.get("k").await.as_deref(), Some("second"));
    }
}
