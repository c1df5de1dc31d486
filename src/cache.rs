//! Process-lifetime TTL cache fronting the aggregation fan-out.
//!
//! A single coarse lock guards the whole key space. That is acceptable
//! because the guarded operations are O(1) map lookups and swaps; the lock is
//! never held across a network call or a merge. Concurrent refreshes of the
//! same stale key are not deduplicated — each runs its own fan-out and the
//! last store wins.

use crate::types::weather::WeatherData;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct CacheEntry {
    data: WeatherData,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// In-memory weather cache keyed by normalized city name.
pub struct WeatherCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl WeatherCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached record for `key` if one exists and is still within
    /// the freshness window. A stale entry reports as a miss and stays in
    /// place until the next store replaces it.
    pub async fn fresh(&self, key: &str) -> Option<WeatherData> {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.data.clone())
    }

    /// Stores `data` under `key`, replacing any previous entry wholesale.
    pub async fn store(&self, key: &str, data: WeatherData) {
        let entry = CacheEntry {
            data,
            fetched_at: Instant::now(),
        };
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), entry);
    }
}
