//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::Deserialize;

/// Configuration for all TUI colors.
///
/// Values deserialize through ratatui's own `Color` support: named colors
/// ("Cyan", "DarkGray"), ANSI indices ("8"), or hex codes ("#RRGGBB").
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub header_fg: Color,
    pub header_bg: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub spinner: Color,
    pub error: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Blue,
            tab_active: Color::White,
            tab_inactive: Color::DarkGray,
            selection_fg: Color::Black,
            selection_bg: Color::Cyan,
            spinner: Color::Gray,
            error: Color::Red,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}
