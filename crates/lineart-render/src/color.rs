//! Color conversion for terminal output.

use ratatui::style::Color;

/// Map a simulation color to a terminal RGB color.
///
/// Channels may drift to 256 (or further with oversized speeds), so they
/// are clamped into `0..=255`.
pub fn to_terminal_color(color: &lineart_core::Color) -> Color {
    let [r, g, b] = color.rgb().map(channel_to_u8);
    Color::Rgb(r, g, b)
}

fn channel_to_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
