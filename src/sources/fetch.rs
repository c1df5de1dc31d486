//! Fetch fan-out: one task per source, wait for all, keep the successes.
//!
//! A source failing — network, status, or extraction — is logged and
//! contributes nothing; it never aborts the sibling fetches or the request.
//! Successes are collected in launch order, which keeps the merge precedence
//! identical to the configured source order.

use crate::sources::error::SourceError;
use crate::sources::WeatherSource;
use crate::types::weather::WeatherData;
use futures_util::future::join_all;
use log::{debug, warn};
use reqwest::Client;
use scraper::Html;
use std::sync::Arc;

/// Fetches and extracts one source, absorbing every failure into `None`.
pub(crate) async fn fetch_source(
    client: &Client,
    source: &dyn WeatherSource,
    city: &str,
) -> Option<WeatherData> {
    match try_fetch(client, source, city).await {
        Ok(data) => {
            debug!("{}: got weather data for {}", source.name(), city);
            Some(data)
        }
        Err(e) => {
            warn!("{}: contributed nothing for {}: {}", source.name(), city, e);
            None
        }
    }
}

async fn try_fetch(
    client: &Client,
    source: &dyn WeatherSource,
    city: &str,
) -> Result<WeatherData, SourceError> {
    let url = source.url(city);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| SourceError::Request {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status { url, status });
    }

    let body = response.text().await.map_err(|e| SourceError::Request {
        url: url.clone(),
        source: e,
    })?;

    // Parsed after the last await so the future stays Send.
    let doc = Html::parse_document(&body);
    source.extract(&doc)
}

/// Runs every source concurrently and returns the partial records of those
/// that succeeded, in launch order. Tolerates zero successes.
pub(crate) async fn fetch_all(
    client: &Client,
    sources: &[Arc<dyn WeatherSource>],
    city: &str,
) -> Vec<WeatherData> {
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let client = client.clone();
            let source = Arc::clone(source);
            let city = city.to_string();
            tokio::spawn(async move { fetch_source(&client, source.as_ref(), &city).await })
        })
        .collect();

    let mut collected = Vec::new();
    for joined in join_all(handles).await {
        match joined {
            Ok(Some(data)) => collected.push(data),
            Ok(None) => {}
            Err(e) => warn!("source task failed to join: {}", e),
        }
    }
    collected
}
