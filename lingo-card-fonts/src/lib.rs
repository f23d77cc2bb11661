//! Font discovery and glyph metrics for the lingo-card feedback renderer.
//!
//! This crate provides:
//! - System font discovery with a priority-ordered fallback chain
//! - Regular and bold face resolution with warn-and-degrade behavior
//! - The [`Typeface`] contract (advance widths, ascent/descent, alpha-mask
//!   rasterization) that the layout and render code consumes
//!
//! # Architecture
//!
//! [`FontManager`] resolves font files once at startup: a requested family is
//! looked up in the system database, and when it is missing the chain in
//! [`FALLBACK_FAMILIES`] is scanned instead. [`ScaledFace`] then binds a
//! resolved face to a pixel size, exposing scaled metrics and rasterized
//! glyphs behind an LRU cache.
//!
//! The render core is written against the [`Typeface`] trait rather than
//! `ScaledFace` directly, so layout decisions stay testable on machines with
//! no fonts installed at all.

pub mod face;
pub mod font_manager;

mod error;

// Re-export main types for convenience
pub use error::FontError;
pub use face::{FacePair, GlyphBitmap, ScaledFace, Typeface};
pub use font_manager::{FALLBACK_FAMILIES, FontData, FontManager};
