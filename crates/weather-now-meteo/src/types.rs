use serde::{Deserialize, Serialize};

/// Timezone sent to the forecast API when the geocoder did not return one.
pub const AUTO_TIMEZONE: &str = "auto";

/// A place resolved by the geocoding API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
}

impl GeocodeResult {
    /// Display label, e.g. "Paris, France".
    pub fn label(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }

    /// Timezone to pass to the forecast API, verbatim from the geocoder.
    pub fn forecast_timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(AUTO_TIMEZONE)
    }
}

/// Body of `GET /v1/search`. `results` is absent when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodeResult>>,
}

/// `current_weather` block of the forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: Option<f64>,
    pub weathercode: Option<i32>,
    pub time: Option<String>,
}

/// `hourly` block of the forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
}

impl HourlySeries {
    /// Temperature at `index`, `None` when out of range or null upstream.
    pub fn temperature_at(&self, index: usize) -> Option<f64> {
        self.temperature_2m.get(index).copied().flatten()
    }
}

/// `daily` block of the forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    pub weather_code: Vec<Option<i32>>,
    pub rain_sum: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn weather_code_at(&self, index: usize) -> Option<i32> {
        self.weather_code.get(index).copied().flatten()
    }

    pub fn rain_sum_at(&self, index: usize) -> Option<f64> {
        self.rain_sum.get(index).copied().flatten()
    }
}

/// Body of `GET /v1/forecast` for the fields Weather Now requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub current_weather: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// Everything displayed for one successful search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub current: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

impl WeatherSnapshot {
    pub fn new(place: &GeocodeResult, forecast: Forecast) -> Self {
        Self {
            city: place.label(),
            current: forecast.current_weather,
            hourly: forecast.hourly,
            daily: forecast.daily,
        }
    }
}
