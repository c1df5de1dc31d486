//! Selector and text helpers shared by every extractor.
//!
//! All extractors go through these for element lookup and number parsing so
//! that missing markup degrades the same way everywhere: an absent element
//! reads as empty text, which then fails the numeric parse for mandatory
//! fields.

use crate::sources::error::SourceError;
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;

pub(crate) fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|_| SourceError::Selector(css.to_string()))
}

/// Trimmed text of the first element matching `css`, or an empty string when
/// nothing matches.
pub(crate) fn first_text(doc: &Html, css: &str) -> Result<String, SourceError> {
    let sel = selector(css)?;
    Ok(doc
        .select(&sel)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

/// Like [`first_text`] but scoped to an element, for per-row extraction.
pub(crate) fn child_text(element: &ElementRef, css: &str) -> Result<String, SourceError> {
    let sel = selector(css)?;
    Ok(element
        .select(&sel)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

/// `class` attribute of the first element matching `css` under `element`, or
/// `fallback` when the element or attribute is absent.
pub(crate) fn child_class_or(
    element: &ElementRef,
    css: &str,
    fallback: &str,
) -> Result<String, SourceError> {
    let sel = selector(css)?;
    Ok(element
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("class"))
        .unwrap_or(fallback)
        .to_string())
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses a scraped temperature like `"+3,2°C"` or `"-5°"` into degrees.
pub(crate) fn clean_temperature(raw: &str) -> Result<f64, SourceError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '°' | 'C' | 'F'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|e| SourceError::Number {
            text: raw.trim().to_string(),
            source: e,
        })
}

pub(crate) fn parse_int<T>(raw: &str) -> Result<T, SourceError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    raw.trim().parse::<T>().map_err(|e| SourceError::Integer {
        text: raw.trim().to_string(),
        source: e,
    })
}
