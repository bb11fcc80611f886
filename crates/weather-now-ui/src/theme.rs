//! Styles for the weather screen, kept in one place.

use ratatui::style::{Color, Modifier, Style};

/// Accent used by the title, the focused input and the card titles.
pub const ACCENT: Color = Color::Rgb(0xff, 0x7f, 0x50);
pub const ERROR: Color = Color::Red;
pub const CARD_TEXT: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const MUTED: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

/// Below this width the cards stack vertically.
pub const NARROW_WIDTH: u16 = 80;

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn input_border() -> Style {
    Style::default().fg(ACCENT)
}

pub fn hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn error() -> Style {
    Style::default().fg(ERROR)
}

pub fn city() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn card_border() -> Style {
    Style::default().fg(MUTED)
}

pub fn card_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn card_text() -> Style {
    Style::default().fg(CARD_TEXT).bg(Color::Rgb(0xf7, 0xf7, 0xf7))
}
