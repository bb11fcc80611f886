pub mod weather_service;

pub use weather_service::{request_search, SearchTicket, WeatherServiceMessage};
