//! Integration tests for WeatherLookup using wiremock.
//!
//! One mock server plays both the geocoding and the forecast API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use weather_now_meteo::{LookupError, WeatherLookup};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn paris_geocode() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "name": "Paris",
            "country": "France",
            "latitude": 48.85,
            "longitude": 2.35,
            "timezone": "Europe/Paris"
        }]
    })
}

fn paris_forecast() -> serde_json::Value {
    let mut hourly: Vec<f64> = vec![15.0, 14.0];
    hourly.extend(std::iter::repeat(13.0).take(22));
    hourly.push(12.0);
    hourly.push(11.5);

    serde_json::json!({
        "current_weather": { "temperature": 15.0, "windspeed": 10.0, "weathercode": 3 },
        "hourly": { "temperature_2m": hourly },
        "daily": { "weather_code": [3], "rain_sum": [0.2] }
    })
}

fn lookup(server: &MockServer) -> WeatherLookup {
    WeatherLookup::connect(&server.uri(), &server.uri(), "en", None).unwrap()
}

#[tokio::test]
async fn test_search_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_geocode()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param("timezone", "Europe/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_forecast()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let snapshot = lookup(&mock_server).search("Paris").await.unwrap();

    assert_eq!(snapshot.city, "Paris, France");
    assert_eq!(snapshot.current.temperature, 15.0);
    assert_eq!(snapshot.current.windspeed, 10.0);
    assert_eq!(snapshot.hourly.temperature_at(0), Some(15.0));
    assert_eq!(snapshot.hourly.temperature_at(24), Some(12.0));
    assert_eq!(snapshot.daily.weather_code_at(0), Some(3));
    assert_eq!(snapshot.daily.rain_sum_at(0), Some(0.2));
}

#[tokio::test]
async fn test_search_city_not_found_skips_forecast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_forecast()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = lookup(&mock_server).search("Atlantis").await.unwrap_err();

    assert!(matches!(err, LookupError::CityNotFound(ref q) if q == "Atlantis"));
}

#[tokio::test]
async fn test_search_geocoding_status_skips_forecast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_forecast()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = lookup(&mock_server).search("Paris").await.unwrap_err();

    match err {
        LookupError::Geocoding(e) => assert_eq!(e.status(), Some(500)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_search_forecast_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_geocode()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = lookup(&mock_server).search("Paris").await.unwrap_err();

    match err {
        LookupError::Forecast(e) => assert_eq!(e.status(), Some(429)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_search_malformed_forecast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_geocode()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": { "temperature": 15.0 }
        })))
        .mount(&mock_server)
        .await;

    let err = lookup(&mock_server).search("Paris").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Forecast(weather_now_meteo::ProviderError::Parse(_))
    ));
}

/// Nothing listens on port 1, so connects are refused.
const CLOSED_PORT_URL: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn test_search_geocoding_host_unreachable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let lookup = WeatherLookup::connect(
        CLOSED_PORT_URL,
        &mock_server.uri(),
        "en",
        Some(std::time::Duration::from_secs(2)),
    )
    .unwrap();

    let err = lookup.search("Paris").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Geocoding(weather_now_meteo::ProviderError::Network(_))
    ));
}

#[tokio::test]
async fn test_search_forecast_host_unreachable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_geocode()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lookup = WeatherLookup::connect(
        &mock_server.uri(),
        CLOSED_PORT_URL,
        "en",
        Some(std::time::Duration::from_secs(2)),
    )
    .unwrap();

    let err = lookup.search("Paris").await.unwrap_err();

    assert!(matches!(
        err,
        LookupError::Forecast(weather_now_meteo::ProviderError::Network(_))
    ));
}
