use ratatui::style::Color;

/// Pass / left swipe
pub const ACCENT_PRIMARY: Color = Color::Rgb(235, 94, 85);
/// Save / right swipe
pub const ACCENT_SECONDARY: Color = Color::Rgb(80, 200, 120);
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(110, 170, 255);
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(140, 140, 150);
pub const BG_DARK: Color = Color::Rgb(24, 24, 30);
pub const BORDER_COLOR: Color = Color::Rgb(80, 80, 95);
