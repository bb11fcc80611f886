//! Open-Meteo client for Weather Now
//!
//! Resolves a city name to coordinates with the geocoding API, then fetches
//! current, hourly and daily weather for them from the forecast API.

pub mod error;
pub mod geocode;
pub mod lookup;
pub mod provider;
pub mod types;

pub use error::{LookupError, ProviderError};
pub use geocode::GeocodingClient;
pub use lookup::WeatherLookup;
pub use provider::ForecastProvider;
pub use types::*;
