//! Plain-text rendering of a weather record, Finnish labels. Pure string
//! formatting; the HTTP layer that serves it lives outside this crate.

use crate::types::weather::WeatherData;
use std::fmt::Write;

/// Formats a temperature with an explicit `+` on positive values.
pub fn signed_temperature(temperature: f64) -> String {
    if temperature > 0.0 {
        format!("+{:.1}°C", temperature)
    } else {
        format!("{:.1}°C", temperature)
    }
}

/// Renders the whole record as a plain-text report.
pub fn render_text(weather: &WeatherData) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Sää {} (Klo. {:02})",
        weather.city, weather.observation_hour
    );
    let _ = writeln!(out, "{}\n", weather.weather_summary);

    let _ = writeln!(
        out,
        "Lämpötila: {} (Tuntuu kuin {})",
        signed_temperature(weather.temperature),
        signed_temperature(weather.temperature_feels_like)
    );
    let _ = writeln!(
        out,
        "Päivän alin: {}",
        signed_temperature(weather.temperature_min)
    );
    let _ = writeln!(
        out,
        "Päivän ylin: {}",
        signed_temperature(weather.temperature_max)
    );

    let _ = writeln!(out, "Sadetta: {:.1} mm", weather.rainfall);
    let _ = writeln!(out, "Lunta: {:.1} cm", weather.snowfall);
    let _ = writeln!(out, "Tuuli: {} m/s", weather.wind_speed);

    let _ = writeln!(
        out,
        "Huomenna: {} (Alin: {})",
        signed_temperature(weather.temperature_tomorrow),
        signed_temperature(weather.temperature_min_tomorrow)
    );

    let _ = writeln!(
        out,
        "Auringonnousu: {}\nAuringonlasku: {}",
        weather.sunrise, weather.sunset
    );
    let _ = writeln!(out, "Päivän pituus: {}", weather.day_length);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_temperatures_get_a_plus_sign() {
        assert_eq!(signed_temperature(3.25), "+3.2°C");
        assert_eq!(signed_temperature(-5.0), "-5.0°C");
        assert_eq!(signed_temperature(0.0), "0.0°C");
    }

    #[test]
    fn renders_the_full_report() {
        let weather = WeatherData {
            city: "Turku".to_string(),
            observation_hour: 9,
            weather_summary: "Selkeää".to_string(),
            temperature: 3.0,
            temperature_feels_like: -1.5,
            temperature_min: -2.0,
            temperature_max: 10.0,
            rainfall: 0.2,
            wind_speed: 4,
            temperature_tomorrow: 5.0,
            temperature_min_tomorrow: -1.0,
            sunrise: "08:15".to_string(),
            sunset: "17:40".to_string(),
            day_length: "09:25".to_string(),
            ..Default::default()
        };

        let text = render_text(&weather);
        assert!(text.starts_with("Sää Turku (Klo. 09)\n"));
        assert!(text.contains("Lämpötila: +3.0°C (Tuntuu kuin -1.5°C)"));
        assert!(text.contains("Päivän alin: -2.0°C"));
        assert!(text.contains("Päivän ylin: +10.0°C"));
        assert!(text.contains("Tuuli: 4 m/s"));
        assert!(text.contains("Huomenna: +5.0°C (Alin: -1.0°C)"));
        assert!(text.contains("Auringonnousu: 08:15"));
        assert!(text.contains("Päivän pituus: 09:25"));
    }
}
