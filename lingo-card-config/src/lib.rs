//! Style configuration for the lingo-card feedback renderer.
//!
//! This crate provides the plain-data style options consumed by the rendering
//! pipeline:
//!
//! - Canvas geometry (width, padding, box spacing, corner radius)
//! - Per-role colors (banner, body text, error highlight, tip tint)
//! - Font sizes and wrap widths
//! - TOML loading and saving with per-field defaults
//!
//! The renderer receives a [`StyleConfig`] by reference on every call; nothing
//! in this crate holds process-wide mutable state.

pub mod color;
pub mod defaults;
pub mod error;
pub mod style;

// Re-export main types for convenience
pub use color::Color;
pub use error::ConfigError;
pub use style::StyleConfig;
