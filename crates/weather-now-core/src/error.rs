//! Centralized error types for Weather Now.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides the user-facing messages shown in the error line of the form
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Message shown for any failure that is not a handled condition
/// (transport errors, timeouts, malformed responses).
pub const GENERIC_FAILURE_MESSAGE: &str = "Error fetching weather data. Please try again later.";

/// Top-level application error type.
///
/// Use `user_message()` to get the text displayed in the UI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

}

impl AppError {
    /// Returns the message displayed to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Input(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Network(e) => e.user_message(),
        }
    }
}

/// Errors detected in the form before any request is made.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Query is empty")]
    EmptyQuery,
}

impl InputError {
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::EmptyQuery => "Please enter a city name.",
        }
    }
}

/// Handled upstream conditions: a reachable service that said no.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No geocoding match for {0:?}")]
    CityNotFound(String),

    #[error("Geocoding request failed with status {status}")]
    GeocodingFailed { status: u16 },

    #[error("Forecast request failed with status {status}")]
    ForecastFailed { status: u16 },
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound(_) => "City not found. Please try another city.",
            WeatherError::GeocodingFailed { .. } => "Failed to fetch geocoding data.",
            WeatherError::ForecastFailed { .. } => "Failed to fetch weather data.",
        }
    }
}

/// Network-related errors (connectivity, timeouts, unreadable bodies).
///
/// None of these carry a stage-specific message: they all surface as
/// [`GENERIC_FAILURE_MESSAGE`].
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

/// Configuration errors, reported through `anyhow` at start-up.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() || self.is_body() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
