//! Forecast API client.

use crate::error::ProviderError;
use crate::types::{Forecast, GeocodeResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

const USER_AGENT: &str = concat!("weather-now/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the geocoding and forecast clients.
/// `None` leaves requests without a timeout.
pub fn build_client(timeout: Option<Duration>) -> Result<Arc<Client>, ProviderError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(Arc::new(builder.build()?))
}

/// Check the status and decode a JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct ForecastProvider {
    client: Arc<Client>,
    base_url: String,
}

impl ForecastProvider {
    pub fn new(client: Arc<Client>, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current weather, hourly temperature and daily code/rain for `place`.
    #[instrument(skip(self, place), fields(lat = place.latitude, lon = place.longitude), level = "info")]
    pub async fn fetch(&self, place: &GeocodeResult) -> Result<Forecast, ProviderError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&hourly=temperature_2m&daily=weather_code,rain_sum&timezone={}",
            self.base_url,
            place.latitude,
            place.longitude,
            urlencoding::encode(place.forecast_timezone()),
        );

        tracing::debug!("Forecast request URL: {}", url);

        let response = self.client.get(&url).send().await?;
        let forecast: Forecast = read_json(response).await?;

        tracing::info!(
            "Forecast received: {} hourly, {} daily entries",
            forecast.hourly.temperature_2m.len(),
            forecast.daily.weather_code.len()
        );
        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn paris() -> GeocodeResult {
        GeocodeResult {
            name: "Paris".to_string(),
            country: Some("France".to_string()),
            latitude: 48.85,
            longitude: 2.35,
            timezone: Some("Europe/Paris".to_string()),
        }
    }

    fn forecast_body() -> serde_json::Value {
        serde_json::json!({
            "current_weather": { "temperature": 15.0, "windspeed": 10.0 },
            "hourly": { "temperature_2m": [15.0, 14.0] },
            "daily": { "weather_code": [3], "rain_sum": [0.2] }
        })
    }

    fn provider(server: &MockServer) -> ForecastProvider {
        let client = build_client(Some(Duration::from_secs(5))).unwrap();
        ForecastProvider::new(client, &server.uri())
    }

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "48.85"))
            .and(query_param("longitude", "2.35"))
            .and(query_param("current_weather", "true"))
            .and(query_param("hourly", "temperature_2m"))
            .and(query_param("daily", "weather_code,rain_sum"))
            .and(query_param("timezone", "Europe/Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let forecast = provider(&mock_server).fetch(&paris()).await.unwrap();

        assert_eq!(forecast.current_weather.temperature, 15.0);
        assert_eq!(forecast.current_weather.windspeed, 10.0);
        assert_eq!(forecast.daily.rain_sum_at(0), Some(0.2));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid timezone"))
            .mount(&mock_server)
            .await;

        let err = provider(&mock_server).fetch(&paris()).await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("Invalid timezone"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = provider(&mock_server).fetch(&paris()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = build_client(None).unwrap();
        let provider = ForecastProvider::new(client, "https://api.open-meteo.com/");
        assert_eq!(provider.base_url, "https://api.open-meteo.com");
    }
}
