use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeliError {
    /// All sources failed, or none of them identified the city. The string is
    /// the city name exactly as the caller passed it in.
    #[error("no weather data found for city \"{0}\"")]
    NoData(String),

    #[error("failed to build the http client")]
    ClientBuild(#[source] reqwest::Error),
}
