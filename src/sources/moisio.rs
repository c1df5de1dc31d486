//! Moisio sun-table extractor: sunrise, sunset and day length. These cells
//! are plain text; whatever is missing just stays empty, so this source
//! never fails extraction.

use crate::sources::dom::first_text;
use crate::sources::error::SourceError;
use crate::sources::WeatherSource;
use crate::types::weather::WeatherData;
use scraper::Html;

const MOISIO_URL: &str = "http://www.moisio.fi/taivas/aurinko.php?paikka=";

pub struct Moisio {
    base_url: String,
}

impl Moisio {
    pub fn new() -> Self {
        Self::with_base_url(MOISIO_URL)
    }

    /// Builds the source against a different base URL, for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for Moisio {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSource for Moisio {
    fn name(&self) -> &'static str {
        "moisio"
    }

    fn url(&self, city: &str) -> String {
        format!("{}{}", self.base_url, city)
    }

    fn extract(&self, doc: &Html) -> Result<WeatherData, SourceError> {
        let mut data = WeatherData::default();
        data.sunrise = first_text(doc, "td.tbl0:nth-child(4)")?;
        data.sunset = first_text(doc, "td.tbl0:nth-child(5)")?;
        data.day_length = first_text(doc, "td.tbl0:nth-child(6)")?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body><table><tr>
          <td class="tbl0">21.11.</td>
          <td class="tbl0">Turku</td>
          <td class="tbl0">325</td>
          <td class="tbl0">08:15</td>
          <td class="tbl0">17:40</td>
          <td class="tbl0">09:25</td>
        </tr></table></body></html>
    "#;

    #[test]
    fn extracts_sun_times() {
        let doc = Html::parse_document(PAGE);
        let data = Moisio::new().extract(&doc).unwrap();

        assert_eq!(data.sunrise, "08:15");
        assert_eq!(data.sunset, "17:40");
        assert_eq!(data.day_length, "09:25");
    }

    #[test]
    fn empty_page_yields_empty_fields_without_failing() {
        let doc = Html::parse_document("<html><body></body></html>");
        let data = Moisio::new().extract(&doc).unwrap();
        assert!(data.sunrise.is_empty());
        assert!(data.sunset.is_empty());
        assert!(data.day_length.is_empty());
    }
}
