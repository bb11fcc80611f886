//! Forward geocoding: convert a city name to coordinates and a timezone.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use crate::error::ProviderError;
use crate::provider::read_json;
use crate::types::{GeocodeResult, GeocodingResponse};
use reqwest::Client;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Arc<Client>,
    base_url: String,
    language: String,
}

impl GeocodingClient {
    pub fn new(client: Arc<Client>, base_url: &str, language: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        }
    }

    /// Best match for `name`, or `None` when the geocoder knows no such place.
    ///
    /// Only one candidate is requested; there is no disambiguation.
    #[instrument(skip(self), level = "info")]
    pub async fn first_match(&self, name: &str) -> Result<Option<GeocodeResult>, ProviderError> {
        let url = format!(
            "{}/v1/search?name={}&count=1&language={}&format=json",
            self.base_url,
            urlencoding::encode(name),
            urlencoding::encode(&self.language),
        );

        let response = self.client.get(&url).send().await?;
        let body: GeocodingResponse = read_json(response).await?;

        let place = body.results.and_then(|results| results.into_iter().next());
        match &place {
            Some(p) => tracing::info!(
                "Geocoded {:?} to {} ({}, {})",
                name,
                p.label(),
                p.latitude,
                p.longitude
            ),
            None => tracing::info!("No geocoding match for {:?}", name),
        }
        Ok(place)
    }
}
