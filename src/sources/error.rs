use thiserror::Error;

/// Failure of a single source's fetch or extraction.
///
/// These never reach a caller of the aggregation facade; the fetch layer logs
/// them and drops the source from the fan-in set.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid selector '{0}'")]
    Selector(String),

    #[error("no text found for selector '{0}'")]
    MissingText(String),

    #[error("could not parse number from '{text}'")]
    Number {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("could not parse integer from '{text}'")]
    Integer {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
