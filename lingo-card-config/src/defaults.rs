//! Default value functions for configuration.
//!
//! Free functions used as `#[serde(default = "crate::defaults::...")]`
//! attributes on `StyleConfig` fields. The values reproduce the feedback
//! bot's established card look (Nord-flavored palette, 600 px card).

use crate::color::Color;

// ── Geometry ───────────────────────────────────────────────────────────────

pub fn width() -> u32 {
    600
}

pub fn padding() -> u32 {
    30
}

pub fn box_spacing() -> u32 {
    20
}

pub fn corner_radius() -> u32 {
    15
}

pub fn banner_height() -> u32 {
    80
}

pub fn line_spacing() -> u32 {
    15
}

pub fn highlight_margin_x() -> u32 {
    5
}

pub fn highlight_margin_y() -> u32 {
    2
}

// ── Text ───────────────────────────────────────────────────────────────────

pub fn font_size() -> f32 {
    20.0
}

pub fn plain_font_size() -> f32 {
    18.0
}

pub fn wrap_width_chars() -> usize {
    45
}

pub fn plain_wrap_width_chars() -> usize {
    40
}

// ── Colors ─────────────────────────────────────────────────────────────────

pub fn banner_background() -> Color {
    Color::new(0x43, 0x4C, 0x5E) // Oxford gray (Nord)
}

pub fn banner_foreground() -> Color {
    Color::new(0xEB, 0xCB, 0x8B) // Yellow (Nord)
}

pub fn body_background() -> Color {
    Color::new(0xFF, 0xFF, 0xFF)
}

pub fn text_color() -> Color {
    Color::new(0x00, 0x00, 0x00)
}

pub fn incorrect_background() -> Color {
    Color::new(0xF3, 0x4A, 0x07)
}

pub fn incorrect_foreground() -> Color {
    Color::new(0xFF, 0xFF, 0xFF)
}

pub fn tint_background() -> Color {
    Color::new(0xFF, 0xFB, 0xEA) // pale yellow
}

pub fn rule_color() -> Color {
    Color::new(0xD8, 0xDE, 0xE9)
}

pub fn page_background() -> Color {
    Color::new(0xFF, 0xFF, 0xFF)
}
