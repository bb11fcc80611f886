//! Maps lookup errors to weather_now_core::AppError for consistent user-facing messages.

mod weather;

use weather_now_core::AppError;

/// Conversion into the application error hierarchy.
///
/// A trait rather than `From` because both sides live in other crates.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
