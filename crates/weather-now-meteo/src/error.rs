//! Open-Meteo client error types.

use thiserror::Error;

/// Failure of a single request to an Open-Meteo endpoint.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// HTTP status when the service answered with a non-success code.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure of a whole lookup, tagged with the stage that failed.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No geocoding result for {0:?}")]
    CityNotFound(String),

    #[error("Geocoding failed: {0}")]
    Geocoding(#[source] ProviderError),

    #[error("Forecast failed: {0}")]
    Forecast(#[source] ProviderError),
}
