//! The configured weather sources and the extraction contract they share.
//!
//! Each source knows how to build its city URL and how to read a partial
//! [`WeatherData`] out of the fetched page. Selector choices live with the
//! source that owns them; the list order returned by [`default_sources`] is
//! also the merge precedence order, so reordering it changes which source is
//! authoritative for which field.

mod ampparit;
mod dom;
mod error;
mod fetch;
mod foreca;
mod moisio;

pub use ampparit::Ampparit;
pub use error::SourceError;
pub use foreca::Foreca;
pub use moisio::Moisio;

pub(crate) use fetch::fetch_all;

use crate::types::weather::WeatherData;
use scraper::Html;
use std::sync::Arc;

/// One external weather-data provider.
///
/// Implementations extract whatever subset of fields their page carries.
/// Fields a page genuinely lacks stay at their zero value; fields the source
/// treats as mandatory fail the whole extraction instead, which drops the
/// source from that request's merge.
pub trait WeatherSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Full URL for one city, normalized form expected.
    fn url(&self, city: &str) -> String;

    /// Reads a partial record out of a fetched page.
    fn extract(&self, doc: &Html) -> Result<WeatherData, SourceError>;
}

/// The production source list, in merge precedence order.
pub fn default_sources() -> Vec<Arc<dyn WeatherSource>> {
    vec![
        Arc::new(Foreca::new()),
        Arc::new(Ampparit::new()),
        Arc::new(Moisio::new()),
    ]
}
