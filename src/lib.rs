//! Renders structured tutoring feedback into annotated raster cards.
//!
//! The pipeline takes the feedback generator's labeled text block and
//! produces a single PNG highlighting exactly which words of the learner's
//! sentence were wrong:
//!
//! 1. [`FeedbackDocument::parse`] extracts the labeled sections
//! 2. [`diff::diff_words`] aligns original vs. corrected words
//! 3. [`layout`] wraps text and places classified tokens
//! 4. [`sections`] renders each section onto an exactly-sized canvas
//! 5. [`compositor`] stacks the sections and exports PNG bytes
//!
//! Every step is a pure function of its inputs plus an immutable
//! [`StyleConfig`]; concurrent renders need no coordination. The entry point
//! is [`Renderer`]:
//!
//! ```no_run
//! use lingo_card::{Renderer, StyleConfig};
//!
//! let renderer = Renderer::new(StyleConfig::default())?;
//! let png = renderer.render_feedback_image(
//!     "Original: \"I go yesterday\" Corregido: \"I went yesterday\"",
//! )?;
//! # anyhow::Ok(())
//! ```

pub mod canvas;
pub mod compositor;
pub mod diff;
pub mod document;
pub mod layout;
pub mod sections;

mod error;

pub use error::RenderError;

// Re-export the configuration and font contracts callers need.
pub use lingo_card_config::{Color, StyleConfig};
pub use lingo_card_fonts::{FacePair, FontManager, GlyphBitmap, ScaledFace, Typeface};

pub use diff::{DiffToken, TokenClass};
pub use document::FeedbackDocument;

/// The feedback card renderer: an immutable style plus resolved faces.
///
/// Construct once at startup and share freely; rendering borrows `self`
/// immutably and keeps no state between calls.
pub struct Renderer<F: Typeface = ScaledFace> {
    style: StyleConfig,
    faces: FacePair<F>,
    plain_face: F,
}

impl Renderer<ScaledFace> {
    /// Build a renderer from system fonts.
    ///
    /// Resolves the configured families (or the fallback chain) once; a
    /// missing bold face degrades to the regular face with a logged warning.
    pub fn new(style: StyleConfig) -> anyhow::Result<Self> {
        style.validate()?;
        let manager = FontManager::new(
            style.font_family.as_deref(),
            style.bold_font_family.as_deref(),
        )?;
        let faces = manager.scaled_pair(style.font_size);
        let plain_face = manager.scaled_regular(style.plain_font_size);
        Ok(Renderer {
            style,
            faces,
            plain_face,
        })
    }
}

impl<F: Typeface> Renderer<F> {
    /// Build a renderer over explicit faces.
    ///
    /// This is the injection seam: embedders with their own font stack and
    /// tests with synthetic metrics both enter here.
    pub fn with_faces(style: StyleConfig, faces: FacePair<F>, plain_face: F) -> Self {
        Renderer {
            style,
            faces,
            plain_face,
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Parse `raw` and render the feedback card to PNG bytes.
    pub fn render_feedback_image(&self, raw: &str) -> Result<Vec<u8>, RenderError> {
        let doc = FeedbackDocument::parse(raw);
        self.render_document(&doc)
    }

    /// UTF-8-validating front door for byte-oriented transports.
    pub fn render_feedback_image_bytes(&self, raw: &[u8]) -> Result<Vec<u8>, RenderError> {
        let text = std::str::from_utf8(raw)?;
        self.render_feedback_image(text)
    }

    /// Render an already-parsed document to PNG bytes.
    pub fn render_document(&self, doc: &FeedbackDocument) -> Result<Vec<u8>, RenderError> {
        compositor::compose(doc, &self.style, &self.faces)
    }

    /// Render bare text as a shrink-to-fit tinted card.
    pub fn render_plain_paragraph(&self, text: &str) -> Result<Vec<u8>, RenderError> {
        compositor::compose_plain(text, &self.style, &self.plain_face)
    }
}
