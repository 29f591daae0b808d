//! Color constants for the TUI.

use ratatui::style::Color;

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Enabled device row.
pub const ENABLED_FG: Color = Color::Green;
/// Disabled device row.
pub const DISABLED_FG: Color = Color::DarkGray;
/// Highlighted row background.
pub const SELECTED_BG: Color = Color::Blue;
/// Input line while editing.
pub const EDIT_FG: Color = Color::Yellow;
/// Totals text.
pub const TOTALS_FG: Color = Color::Cyan;

/// Returns the row color for a device.
pub fn device_color(enabled: bool) -> Color {
    if enabled { ENABLED_FG } else { DISABLED_FG }
}
