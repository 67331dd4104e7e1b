//! Color theme.

use ratatui::style::Color;

/// Background & Surface colors
pub const BG_DARK: Color = Color::Rgb(18, 18, 24);
pub const BG_SURFACE: Color = Color::Rgb(24, 24, 32);
pub const BG_ELEVATED: Color = Color::Rgb(32, 32, 42);

/// Primary - Amber
pub const PRIMARY: Color = Color::Rgb(255, 179, 71);

/// Accent - Cyan
pub const ACCENT: Color = Color::Rgb(103, 224, 227);

/// Text colors
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 235);
pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 170);
pub const TEXT_MUTED: Color = Color::Rgb(100, 100, 110);

/// Semantic colors
pub const SUCCESS: Color = Color::Rgb(118, 218, 133);
pub const ERROR: Color = Color::Rgb(255, 108, 108);
pub const INFO: Color = Color::Rgb(130, 170, 255);

/// Matched-token highlight, the light green of the web page
pub const HIGHLIGHT_BG: Color = Color::Rgb(144, 238, 144);
pub const HIGHLIGHT_FG: Color = Color::Rgb(18, 18, 24);

/// Border colors
pub const BORDER_DIM: Color = Color::Rgb(48, 48, 58);
pub const BORDER_FOCUS: Color = PRIMARY;
