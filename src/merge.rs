//! Reconciles the partial records collected from the sources into one
//! [`WeatherData`].
//!
//! The reduction is deterministic and order-sensitive: the slice order is the
//! configured source order, which doubles as the precedence order. String
//! fields keep the first non-empty value; numeric fields keep the *last*
//! non-zero value. The asymmetry is intentional — it encodes which source is
//! authoritative for which kind of field.

use crate::types::weather::WeatherData;

fn first_non_empty(existing: &mut String, incoming: &str) {
    if existing.is_empty() && !incoming.is_empty() {
        *existing = incoming.to_string();
    }
}

fn last_non_zero_f64(existing: &mut f64, incoming: f64) {
    if incoming != 0.0 {
        *existing = incoming;
    }
}

/// Reduces zero or more partial records into a single record.
///
/// An empty input yields an all-default record; its empty `city` is the
/// caller's signal that no usable data was found. The merger itself never
/// fails.
///
/// A later source's genuine zero measurement cannot override an earlier
/// non-zero one; zero means "not supplied" throughout.
pub fn merge(partials: &[WeatherData]) -> WeatherData {
    let mut merged = WeatherData::default();

    for partial in partials {
        first_non_empty(&mut merged.city, &partial.city);
        first_non_empty(&mut merged.weather_summary, &partial.weather_summary);
        first_non_empty(&mut merged.sunrise, &partial.sunrise);
        first_non_empty(&mut merged.sunset, &partial.sunset);
        first_non_empty(&mut merged.day_length, &partial.day_length);

        last_non_zero_f64(&mut merged.temperature, partial.temperature);
        last_non_zero_f64(
            &mut merged.temperature_feels_like,
            partial.temperature_feels_like,
        );
        last_non_zero_f64(&mut merged.temperature_min, partial.temperature_min);
        last_non_zero_f64(&mut merged.temperature_max, partial.temperature_max);
        last_non_zero_f64(&mut merged.rainfall, partial.rainfall);
        last_non_zero_f64(&mut merged.snowfall, partial.snowfall);
        last_non_zero_f64(
            &mut merged.temperature_tomorrow,
            partial.temperature_tomorrow,
        );
        last_non_zero_f64(
            &mut merged.temperature_min_tomorrow,
            partial.temperature_min_tomorrow,
        );

        if partial.wind_speed != 0 {
            merged.wind_speed = partial.wind_speed;
        }
        if partial.observation_hour != 0 {
            merged.observation_hour = partial.observation_hour;
        }

        // Wholesale replacement; an empty forecast never clears a populated one.
        if !partial.hourly_forecast.is_empty() {
            merged.hourly_forecast = partial.hourly_forecast.clone();
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::weather::HourlyForecast;

    fn point(hour: &str) -> HourlyForecast {
        HourlyForecast {
            hour: hour.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_input_yields_all_default_record() {
        let merged = merge(&[]);
        assert_eq!(merged, WeatherData::default());
        assert!(merged.city.is_empty());
    }

    #[test]
    fn city_survives_regardless_of_position() {
        let with_city = WeatherData {
            city: "Turku".to_string(),
            ..Default::default()
        };
        for partials in [
            vec![with_city.clone(), WeatherData::default()],
            vec![WeatherData::default(), with_city.clone()],
        ] {
            assert_eq!(merge(&partials).city, "Turku");
        }
    }

    #[test]
    fn string_fields_keep_first_non_empty() {
        let a = WeatherData {
            weather_summary: "A".to_string(),
            ..Default::default()
        };
        let b = WeatherData {
            weather_summary: "B".to_string(),
            ..Default::default()
        };
        assert_eq!(merge(&[a, b]).weather_summary, "A");
    }

    #[test]
    fn numeric_fields_keep_last_non_zero() {
        let five = WeatherData {
            temperature: 5.0,
            ..Default::default()
        };
        let zero = WeatherData::default();
        let seven_five = WeatherData {
            temperature: 7.5,
            ..Default::default()
        };

        assert_eq!(
            merge(&[five.clone(), zero.clone(), seven_five]).temperature,
            7.5
        );
        assert_eq!(merge(&[five, zero]).temperature, 5.0);
    }

    #[test]
    fn integer_fields_keep_last_non_zero() {
        let a = WeatherData {
            wind_speed: 3,
            observation_hour: 9,
            ..Default::default()
        };
        let b = WeatherData {
            wind_speed: 8,
            ..Default::default()
        };
        let merged = merge(&[a, b]);
        assert_eq!(merged.wind_speed, 8);
        assert_eq!(merged.observation_hour, 9);
    }

    #[test]
    fn empty_forecast_never_overwrites_populated_one() {
        let populated = WeatherData {
            hourly_forecast: vec![point("12")],
            ..Default::default()
        };
        let empty = WeatherData::default();
        let merged = merge(&[populated, empty]);
        assert_eq!(merged.hourly_forecast, vec![point("12")]);
    }

    #[test]
    fn later_forecast_replaces_wholesale() {
        let first = WeatherData {
            hourly_forecast: vec![point("12")],
            ..Default::default()
        };
        let second = WeatherData {
            hourly_forecast: vec![point("13"), point("14")],
            ..Default::default()
        };
        let merged = merge(&[first, second]);
        assert_eq!(merged.hourly_forecast, vec![point("13"), point("14")]);
    }

    #[test]
    fn disjoint_sources_combine_into_one_record() {
        let foreca_like = WeatherData {
            city: "Turku".to_string(),
            temperature_max: 10.0,
            ..Default::default()
        };
        let ampparit_like = WeatherData {
            temperature: 3.0,
            observation_hour: 14,
            ..Default::default()
        };
        let moisio_like = WeatherData {
            sunrise: "08:15".to_string(),
            sunset: "17:40".to_string(),
            ..Default::default()
        };

        let merged = merge(&[foreca_like, ampparit_like, moisio_like]);
        assert_eq!(merged.city, "Turku");
        assert_eq!(merged.temperature_max, 10.0);
        assert_eq!(merged.temperature, 3.0);
        assert_eq!(merged.observation_hour, 14);
        assert_eq!(merged.sunrise, "08:15");
        assert_eq!(merged.sunset, "17:40");
    }
}
