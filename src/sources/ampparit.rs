//! Ampparit extractor: current conditions, tomorrow's temperatures and the
//! 24-hour forecast. The city name lives here and is mandatory — without it
//! the merged record would be unidentifiable. Hourly rows are best-effort; a
//! broken row is logged and skipped without failing the source.

use crate::sources::dom::{child_class_or, child_text, clean_temperature, first_text, parse_int, selector};
use crate::sources::error::SourceError;
use crate::sources::WeatherSource;
use crate::types::weather::{HourlyForecast, WeatherData};
use log::warn;
use scraper::{ElementRef, Html};

const AMPPARIT_URL: &str = "https://www.ampparit.com/saa/";

/// How many forecast rows the hour selector carries.
const FORECAST_HOURS: usize = 24;

pub struct Ampparit {
    base_url: String,
}

impl Ampparit {
    pub fn new() -> Self {
        Self::with_base_url(AMPPARIT_URL)
    }

    /// Builds the source against a different base URL, for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn hourly_row(&self, row: &ElementRef) -> Result<HourlyForecast, SourceError> {
        let temperature = clean_temperature(&child_text(row, ".weather-temperature > span")?)?;
        let feels_like = clean_temperature(&child_text(row, ".weather-temperature > span")?)?;
        let wind_speed = parse_int(&child_text(row, ".weather-wind > .weather-value")?)?;

        let rainfall_text = child_text(row, ".weather-precipitation-amount")?.replace(" mm", "");
        let rainfall = rainfall_text
            .parse::<f64>()
            .map_err(|e| SourceError::Number {
                text: rainfall_text,
                source: e,
            })?;

        let symbol_class = child_class_or(row, ".weather-symbol > span", "invalid")?;
        let weather_symbol = match symbol_class.as_str() {
            "d000" => "☀️",
            "n000" => "🌜",
            _ => "❓",
        };

        Ok(HourlyForecast {
            hour: child_text(row, "time")?,
            weather_symbol: weather_symbol.to_string(),
            temperature,
            temperature_feels_like: feels_like,
            wind_speed,
            rainfall,
            rain_chance: 0,
        })
    }
}

impl Default for Ampparit {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSource for Ampparit {
    fn name(&self) -> &'static str {
        "ampparit"
    }

    fn url(&self, city: &str) -> String {
        format!("{}{}", self.base_url, city)
    }

    fn extract(&self, doc: &Html) -> Result<WeatherData, SourceError> {
        let mut data = WeatherData::default();

        let city = first_text(doc, ".current-weather__location")?;
        if city.is_empty() {
            return Err(SourceError::MissingText(
                ".current-weather__location".to_string(),
            ));
        }
        data.city = city;

        let temperature_text = first_text(doc, "span.current-weather__temperature")?;
        data.temperature = clean_temperature(&temperature_text)?;

        let feels_like_text =
            first_text(doc, "span.weather-lighter.weather-temperature-feelslike")?;
        data.temperature_feels_like = clean_temperature(&feels_like_text)?;

        let rainfall_text = first_text(doc, ".current-weather__precipitation .weather-value")?
            .replace(" mm", "");
        data.rainfall = rainfall_text
            .parse::<f64>()
            .map_err(|e| SourceError::Number {
                text: rainfall_text,
                source: e,
            })?;

        let hour_text = first_text(doc, "ol > li:nth-child(1) > div.weather-time > time")?;
        data.observation_hour = parse_int(&hour_text)?;

        let row_selector = selector(".weather-hour-selector ol > li")?;
        for row in doc.select(&row_selector).take(FORECAST_HOURS) {
            match self.hourly_row(&row) {
                Ok(point) => data.hourly_forecast.push(point),
                Err(e) => warn!("ampparit: skipping hourly row: {}", e),
            }
        }

        let tomorrow_text =
            first_text(doc, ".weekly-weather-list-wrapper:nth-child(2) .weather-temperature")?;
        data.temperature_tomorrow = clean_temperature(&tomorrow_text)?;

        let tomorrow_min_text = first_text(
            doc,
            ".weekly-weather-list-wrapper:nth-child(2) .weather-min-temperature",
        )?
        .replace("alin ", "");
        data.temperature_min_tomorrow = clean_temperature(&tomorrow_min_text)?;

        Ok(data)
    }
}
