//! Typed errors for the rendering pipeline.

use thiserror::Error;

/// Errors a render call can surface.
///
/// Missing document structure is never an error (the card degrades to a
/// banner-only image); these cover genuine caller contract violations and
/// encoder failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The raw input was not valid UTF-8 text.
    #[error("input is not valid UTF-8: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),

    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
