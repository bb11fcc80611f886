//! Terminal front end for Weather Now: the search form, the background
//! lookup service and the three-card result view.

pub mod app;
pub mod error_mapping;
pub mod form;
pub mod models;
pub mod services;
pub mod theme;
pub mod tui;
pub mod view;

pub use app::{run, run_once, App};
pub use error_mapping::IntoAppError;
pub use form::SearchForm;
pub use models::{ViewState, WeatherModel};
pub use view::View;
