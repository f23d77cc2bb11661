//! Font fallback chain configuration.
//!
//! Defines the priority order of fallback families when the configured family
//! is unavailable.

/// Fallback font families in priority order.
///
/// The feedback cards render proportional body text, so the chain prefers the
/// sans faces that ship with common Linux distributions (the bot's original
/// deployment target), then the equivalents bundled with macOS and Windows:
/// 1. DejaVu / Liberation / Noto (stock on most Linux images)
/// 2. Ubuntu and GNOME desktop faces
/// 3. Arial / Helvetica (macOS, Windows)
pub const FALLBACK_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
    "Ubuntu",
    "Cantarell",
    "Open Sans",
    "Roboto",
    "Arial",
    "Helvetica",
    "Helvetica Neue",
    "Segoe UI",
    "Verdana",
];
