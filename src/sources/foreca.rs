//! Foreca daily-box extractor: today's min/max temperature, wind speed and
//! the summary text. Every field here is mandatory; Foreca never supplies
//! the city name, that comes from a later source.

use crate::sources::dom::{clean_temperature, first_text, parse_int};
use crate::sources::error::SourceError;
use crate::sources::WeatherSource;
use crate::types::weather::WeatherData;
use scraper::Html;

const FORECA_URL: &str = "https://www.foreca.fi/Finland/";

pub struct Foreca {
    base_url: String,
}

impl Foreca {
    pub fn new() -> Self {
        Self::with_base_url(FORECA_URL)
    }

    /// Builds the source against a different base URL, for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Foreca {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSource for Foreca {
    fn name(&self) -> &'static str {
        "foreca"
    }

    fn url(&self, city: &str) -> String {
        format!("{}{}", self.base_url, city)
    }

    fn extract(&self, doc: &Html) -> Result<WeatherData, SourceError> {
        let mut data = WeatherData::default();

        let max_text = first_text(doc, "#dailybox > div:nth-child(1) > a > div > p.tx > abbr")?;
        data.temperature_max = clean_temperature(&max_text)?;

        let min_text = first_text(doc, "#dailybox > div:nth-child(1) > a > div > p.tn > abbr")?;
        data.temperature_min = clean_temperature(&min_text)?;

        let wind_text = first_text(doc, "#dailybox > div:nth-child(1) > a > div > p.w > span > em")?;
        data.wind_speed = parse_int(&wind_text)?;

        // First sentence only.
        let summary = first_text(doc, ".today .day .txt")?;
        data.weather_summary = summary
            .split('.')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        Ok(data)
    }
}
