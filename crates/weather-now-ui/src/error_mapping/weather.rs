use weather_now_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use weather_now_meteo::{LookupError, ProviderError};

use super::IntoAppError;

impl IntoAppError for LookupError {
    fn into_app_error(self) -> AppError {
        match self {
            LookupError::CityNotFound(query) => AppError::Weather(WeatherError::CityNotFound(query)),
            LookupError::Geocoding(ProviderError::Status { status, .. }) => {
                AppError::Weather(WeatherError::GeocodingFailed { status })
            }
            LookupError::Forecast(ProviderError::Status { status, .. }) => {
                AppError::Weather(WeatherError::ForecastFailed { status })
            }
            LookupError::Geocoding(e) | LookupError::Forecast(e) => {
                AppError::Network(provider_network_error(e))
            }
        }
    }
}

fn provider_network_error(e: ProviderError) -> NetworkError {
    match e {
        ProviderError::Network(e) => e.into_network_error(),
        ProviderError::Parse(msg) => NetworkError::InvalidResponse(msg),
        ProviderError::Status { status, body } => {
            NetworkError::InvalidResponse(format!("{}: {}", status, body))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use weather_now_core::GENERIC_FAILURE_MESSAGE;

    fn status(code: u16) -> ProviderError {
        ProviderError::Status {
            status: code,
            body: String::new(),
        }
    }

    #[test]
    fn city_not_found_message() {
        let err = LookupError::CityNotFound("Atlantis".into()).into_app_error();
        assert_eq!(err.user_message(), "City not found. Please try another city.");
    }

    #[test]
    fn status_failures_keep_stage_message() {
        let err = LookupError::Geocoding(status(500)).into_app_error();
        assert_eq!(err.user_message(), "Failed to fetch geocoding data.");

        let err = LookupError::Forecast(status(502)).into_app_error();
        assert_eq!(err.user_message(), "Failed to fetch weather data.");
    }

    #[test]
    fn parse_failures_use_generic_message() {
        for err in [
            LookupError::Geocoding(ProviderError::Parse("eof".into())),
            LookupError::Forecast(ProviderError::Parse("missing field `daily`".into())),
        ] {
            let app_err = err.into_app_error();
            assert!(matches!(app_err, AppError::Network(NetworkError::InvalidResponse(_))));
            assert_eq!(app_err.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }
}
