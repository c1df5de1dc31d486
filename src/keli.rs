//! The aggregation facade. [`Keli`] is the single entry point: it normalizes
//! the city name, serves fresh cache hits, and otherwise fans out to every
//! configured source, merges whatever came back, and caches the result.

use crate::cache::WeatherCache;
use crate::error::KeliError;
use crate::merge::merge;
use crate::normalize::normalize_city;
use crate::sources::{default_sources, fetch_all, WeatherSource};
use crate::types::weather::WeatherData;
use bon::bon;
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// How long a cached record stays fresh.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
/// Network timeout for each source fetch. Fetches run in parallel, so this is
/// also the effective upper bound on a whole refresh.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Multi-source weather aggregation client.
///
/// Queries several independent weather sites concurrently, reconciles their
/// partial answers into one record, and caches it per city for a bounded
/// time. Individual sources are allowed to fail; the request only fails when
/// no source could identify the city.
///
/// # Examples
///
/// ```no_run
/// # use keli::{Keli, KeliError};
/// # async fn run() -> Result<(), KeliError> {
/// let keli = Keli::builder().build()?;
/// let weather = keli.get_weather("Hyvinkää").await?;
/// println!("{}: {}°C", weather.city, weather.temperature);
/// # Ok(())
/// # }
/// ```
pub struct Keli {
    client: Client,
    sources: Vec<Arc<dyn WeatherSource>>,
    cache: WeatherCache,
}

#[bon]
impl Keli {
    /// Creates a client via a builder.
    ///
    /// * `.sources(Vec<Arc<dyn WeatherSource>>)`: Optional. The source list
    ///   in merge precedence order. Defaults to
    ///   [`default_sources`](crate::sources::default_sources).
    /// * `.cache_ttl(Duration)`: Optional. Freshness window for cached
    ///   records. Defaults to 5 minutes.
    /// * `.request_timeout(Duration)`: Optional. Per-source network timeout.
    ///   Defaults to 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`KeliError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    #[builder]
    pub fn new(
        sources: Option<Vec<Arc<dyn WeatherSource>>>,
        cache_ttl: Option<Duration>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, KeliError> {
        let client = Client::builder()
            .timeout(request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()
            .map_err(KeliError::ClientBuild)?;

        Ok(Self {
            client,
            sources: sources.unwrap_or_else(default_sources),
            cache: WeatherCache::new(cache_ttl.unwrap_or(DEFAULT_CACHE_TTL)),
        })
    }

    /// Returns the weather for `city`.
    ///
    /// The city name is diacritic-folded to form the cache key and the
    /// outbound URLs. A fresh cache hit returns immediately without touching
    /// the network; otherwise every configured source is fetched
    /// concurrently and the successes are merged in precedence order.
    ///
    /// # Errors
    ///
    /// Returns [`KeliError::NoData`] when no source produced a city name —
    /// either every fetch failed or the pages carried nothing usable. That
    /// outcome is never cached, so the next call starts a fresh fan-out.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherData, KeliError> {
        let key = normalize_city(city);

        if let Some(cached) = self.cache.fresh(&key).await {
            return Ok(cached);
        }

        let partials = fetch_all(&self.client, &self.sources, &key).await;
        let mut merged = merge(&partials);

        if merged.city.is_empty() {
            return Err(KeliError::NoData(city.to_string()));
        }

        merged.last_updated = Utc::now();
        self.cache.store(&key, merged.clone()).await;
        Ok(merged)
    }
}
