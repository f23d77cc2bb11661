//! The glyph-metrics contract consumed by layout and rendering.
//!
//! The render core never touches font files directly; it works against
//! [`Typeface`], which exposes exactly what layout needs (advance widths,
//! vertical extents) plus alpha-mask rasterization for drawing. [`ScaledFace`]
//! is the production implementation over a swash `FontRef`; tests substitute a
//! fixed-advance implementation so layout decisions are verifiable without
//! any fonts installed.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source};

use crate::font_manager::FontData;

/// Rasterized glyphs cached per face. Sized for a full Latin repertoire with
/// accents; the cards rarely use more than ~100 distinct characters.
const RASTER_CACHE_CAPACITY: usize = 512;

/// A rasterized glyph: an alpha mask plus its placement relative to the pen.
///
/// `left` offsets the mask from the pen position; `top` is the distance from
/// the baseline up to the mask's first row.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// One alpha byte per pixel, row-major.
    pub alpha: Vec<u8>,
}

/// Scaled glyph metrics and rasterization for one face at one pixel size.
///
/// Layout calls [`Typeface::advance`] and the vertical extents to make line
/// break decisions; drawing calls [`Typeface::rasterize`]. Both passes see the
/// same numbers, which is what makes measure-then-draw deterministic.
pub trait Typeface {
    /// Distance from the baseline to the top of the tallest glyphs, in pixels.
    fn ascent(&self) -> f32;

    /// Distance from the baseline to the bottom of the deepest glyphs, in
    /// pixels (positive).
    fn descent(&self) -> f32;

    /// Horizontal advance of `ch`, in pixels.
    fn advance(&self, ch: char) -> f32;

    /// Rasterize `ch` to an alpha mask. `None` when the face cannot produce a
    /// visible mask (whitespace, missing glyph).
    fn rasterize(&self, ch: char) -> Option<GlyphBitmap>;

    /// Total advance of `text`, in pixels.
    fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.advance(c)).sum()
    }
}

/// A regular/bold pair of faces at the same size.
pub struct FacePair<F: Typeface> {
    pub regular: F,
    pub bold: F,
}

/// Production [`Typeface`] over a swash `FontRef` bound to a pixel size.
pub struct ScaledFace {
    font: FontData,
    size: f32,
    /// Font-unit to pixel conversion factor.
    scale: f32,
    ascent: f32,
    descent: f32,
    raster_cache: Mutex<LruCache<char, Option<GlyphBitmap>>>,
}

impl ScaledFace {
    /// Bind `font` to `size` pixels, precomputing scaled vertical metrics.
    pub fn new(font: FontData, size: f32) -> Self {
        let metrics = font.font_ref.metrics(&[]);
        let scale = size / metrics.units_per_em as f32;
        Self {
            size,
            scale,
            ascent: metrics.ascent * scale,
            descent: metrics.descent * scale,
            font,
            raster_cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(RASTER_CACHE_CAPACITY).unwrap(),
            )),
        }
    }

    /// The pixel size this face is bound to.
    pub fn size(&self) -> f32 {
        self.size
    }

    fn rasterize_uncached(&self, ch: char) -> Option<GlyphBitmap> {
        let font_ref = self.font.font_ref;
        let glyph_id = font_ref.charmap().map(ch);
        if glyph_id == 0 {
            log::debug!("No glyph for '{}' (U+{:04X})", ch, ch as u32);
            return None;
        }

        let mut context = ScaleContext::new();
        let mut scaler = context
            .builder(font_ref)
            .size(self.size)
            .hint(true)
            .build();
        let image = Render::new(&[Source::Outline]).render(&mut scaler, glyph_id)?;

        let alpha = match image.content {
            Content::Mask => image.data,
            // Color sources are never requested; keep the alpha channel if
            // one slips through.
            Content::Color => image.data.chunks_exact(4).map(|px| px[3]).collect(),
            _ => return None,
        };

        if image.placement.width == 0 || image.placement.height == 0 {
            return None;
        }

        Some(GlyphBitmap {
            left: image.placement.left,
            top: image.placement.top,
            width: image.placement.width,
            height: image.placement.height,
            alpha,
        })
    }
}

impl Typeface for ScaledFace {
    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }

    fn advance(&self, ch: char) -> f32 {
        let glyph_id = self.font.font_ref.charmap().map(ch);
        self.font.font_ref.glyph_metrics(&[]).advance_width(glyph_id) * self.scale
    }

    fn rasterize(&self, ch: char) -> Option<GlyphBitmap> {
        let mut cache = self.raster_cache.lock();
        if let Some(hit) = cache.get(&ch) {
            return hit.clone();
        }
        let raster = self.rasterize_uncached(ch);
        cache.put(ch, raster.clone());
        raster
    }
}
