//! Shared UI color constants.

use ratatui::style::{Color, Modifier, Style};

/// Neon green used for most chrome and text
pub const PRIMARY: Color = Color::Rgb(0, 255, 65);
pub const PRIMARY_DIM: Color = Color::Rgb(0, 140, 40);
/// Purple accent for hover, focus and in-flight animations
pub const SECONDARY: Color = Color::Rgb(190, 80, 255);
pub const MUTED: Color = Color::Rgb(110, 130, 110);
pub const ERROR: Color = Color::Rgb(255, 60, 60);

pub const BACKGROUND: Color = Color::Rgb(5, 10, 5);
pub const PANEL_BG: Color = Color::Rgb(12, 20, 12);
pub const CODE_BG: Color = Color::Rgb(20, 28, 20);
pub const SELECTED_BG: Color = Color::Rgb(25, 50, 30);

pub fn primary() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn secondary() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}
