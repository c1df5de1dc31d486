use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the hour-by-hour forecast.
///
/// Produced wholesale by a single source; the merge step never combines
/// forecast rows from different sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    pub hour: String,
    #[serde(rename = "weather")]
    pub weather_symbol: String,
    pub temperature: f64,
    pub temperature_feels_like: f64,
    pub wind_speed: i32,
    pub rainfall: f64,
    pub rain_chance: u32,
}

/// The weather for one city at one point in time.
///
/// The same struct is used for the partial record a single source extracts
/// and for the merged result. A field a source could not populate stays at
/// its zero/empty value; the merge step treats that as "not supplied".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    /// Human-readable name of the city we're looking at.
    pub city: String,
    /// The hour the last observation update is from (0-23, 0 = unknown).
    pub observation_hour: u32,
    /// Text description of the weather.
    pub weather_summary: String,
    /// Current temperature (C).
    pub temperature: f64,
    /// How the current temperature feels (C).
    pub temperature_feels_like: f64,
    /// Today's min temperature (C).
    pub temperature_min: f64,
    /// Today's max temperature (C).
    pub temperature_max: f64,
    /// Amount of rain (mm).
    pub rainfall: f64,
    /// Amount of snow (mm).
    pub snowfall: f64,
    /// Wind speed (m/s).
    pub wind_speed: i32,
    /// Rain chance (%).
    pub rain_chance: u32,
    /// Tomorrow's temperature (C).
    pub temperature_tomorrow: f64,
    /// Tomorrow's min temperature (C).
    pub temperature_min_tomorrow: f64,
    /// The time the sun rises.
    pub sunrise: String,
    /// The time the sun sets.
    pub sunset: String,
    /// The length of the day (HH:MM).
    pub day_length: String,
    /// When the merge producing this record completed.
    pub last_updated: DateTime<Utc>,
    /// Hourly forecast, in chronological order.
    pub hourly_forecast: Vec<HourlyForecast>,
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            city: String::new(),
            observation_hour: 0,
            weather_summary: String::new(),
            temperature: 0.0,
            temperature_feels_like: 0.0,
            temperature_min: 0.0,
            temperature_max: 0.0,
            rainfall: 0.0,
            snowfall: 0.0,
            wind_speed: 0,
            rain_chance: 0,
            temperature_tomorrow: 0.0,
            temperature_min_tomorrow: 0.0,
            sunrise: String::new(),
            sunset: String::new(),
            day_length: String::new(),
            last_updated: DateTime::UNIX_EPOCH,
            hourly_forecast: Vec::new(),
        }
    }
}
