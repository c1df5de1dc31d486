mod cache;
mod error;
mod keli;
mod merge;
mod normalize;
mod places;
mod render;
mod sources;
mod types;

pub use error::KeliError;
pub use keli::*;

pub use cache::WeatherCache;
pub use merge::merge;
pub use normalize::normalize_city;
pub use places::{read_places, PlacesError};
pub use render::{render_text, signed_temperature};

pub use sources::{default_sources, Ampparit, Foreca, Moisio, SourceError, WeatherSource};

pub use types::weather::{HourlyForecast, WeatherData};
