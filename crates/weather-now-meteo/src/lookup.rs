//! City lookup: geocode, then fetch the forecast for the first match.

use std::time::Duration;

use crate::error::{LookupError, ProviderError};
use crate::geocode::GeocodingClient;
use crate::provider::{build_client, ForecastProvider};
use crate::types::WeatherSnapshot;

#[derive(Debug, Clone)]
pub struct WeatherLookup {
    geocoder: GeocodingClient,
    provider: ForecastProvider,
}

impl WeatherLookup {
    pub fn new(geocoder: GeocodingClient, provider: ForecastProvider) -> Self {
        Self { geocoder, provider }
    }

    /// Build both clients over one shared HTTP client.
    pub fn connect(
        geocoding_url: &str,
        forecast_url: &str,
        language: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let client = build_client(timeout)?;
        Ok(Self::new(
            GeocodingClient::new(client.clone(), geocoding_url, language),
            ForecastProvider::new(client, forecast_url),
        ))
    }

    /// Resolve `query` and fetch its weather. The forecast call is only
    /// issued once geocoding has produced a place.
    pub async fn search(&self, query: &str) -> Result<WeatherSnapshot, LookupError> {
        let place = self
            .geocoder
            .first_match(query)
            .await
            .map_err(LookupError::Geocoding)?
            .ok_or_else(|| LookupError::CityNotFound(query.to_string()))?;

        let forecast = self
            .provider
            .fetch(&place)
            .await
            .map_err(LookupError::Forecast)?;

        Ok(WeatherSnapshot::new(&place, forecast))
    }
}
