//! TUI Theme
//!
//! Cyan for the user's side, green for the agent, amber for anything waiting.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Agent messages - soft green
pub const AGENT: Color = Color::Rgb(130, 200, 130);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Selected item background
pub const SELECTED_BG: Color = Color::Rgb(50, 60, 80);

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn selected() -> Style {
    Style::default()
        .bg(SELECTED_BG)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Open conversation / chosen dialect marker
pub fn active_marker() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub fn outbound() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn inbound() -> Style {
    Style::default().fg(AGENT)
}

pub fn waiting() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn key_hint() -> Style {
    Style::default().fg(AGENT)
}
