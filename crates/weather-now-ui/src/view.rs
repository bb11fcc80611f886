//! Turns the view state into what the result area displays.

use weather_now_meteo::WeatherSnapshot;

use crate::models::ViewState;

/// Hourly index shown as "next hour".
pub const NEXT_HOUR_INDEX: usize = 0;
/// Hourly index shown as "tomorrow": same hour, one day later.
pub const TOMORROW_INDEX: usize = 24;
/// Shown for a value the forecast did not contain.
pub const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Empty,
    Error(String),
    Cards { city: String, cards: [Card; 3] },
}

impl View {
    /// Plain text rendering for non-interactive output.
    pub fn to_plain_text(&self) -> String {
        match self {
            View::Empty => String::new(),
            View::Error(msg) => msg.clone(),
            View::Cards { city, cards } => {
                let mut out = city.clone();
                for card in cards {
                    out.push_str("\n\n");
                    out.push_str(card.title);
                    for line in &card.lines {
                        out.push('\n');
                        out.push_str("  ");
                        out.push_str(line);
                    }
                }
                out
            }
        }
    }
}

pub fn render(state: &ViewState) -> View {
    match state {
        ViewState::Idle => View::Empty,
        ViewState::Failed(msg) => View::Error(msg.clone()),
        ViewState::Loaded(snapshot) => View::Cards {
            city: snapshot.city.clone(),
            cards: [
                current_card(snapshot),
                hourly_card(snapshot),
                daily_card(snapshot),
            ],
        },
    }
}

fn current_card(s: &WeatherSnapshot) -> Card {
    Card {
        title: "Current Weather",
        lines: vec![
            format!("Temperature: {}°C", s.current.temperature),
            format!("Wind Speed: {} m/s", s.current.windspeed),
        ],
    }
}

fn hourly_card(s: &WeatherSnapshot) -> Card {
    Card {
        title: "Hourly Forecast",
        lines: vec![
            format!(
                "Next Hour Temp: {}",
                with_unit(s.hourly.temperature_at(NEXT_HOUR_INDEX), "°C")
            ),
            format!(
                "Tomorrow Temp: {}",
                with_unit(s.hourly.temperature_at(TOMORROW_INDEX), "°C")
            ),
        ],
    }
}

fn daily_card(s: &WeatherSnapshot) -> Card {
    Card {
        title: "Daily Summary",
        lines: vec![
            format!(
                "Weather Code: {}",
                s.daily
                    .weather_code_at(0)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| MISSING.to_string())
            ),
            format!("Rain Sum: {}", with_unit(s.daily.rain_sum_at(0), " mm")),
        ],
    }
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => MISSING.to_string(),
    }
}
