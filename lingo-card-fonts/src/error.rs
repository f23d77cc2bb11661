//! Typed errors for font resolution.

use thiserror::Error;

/// Errors produced while resolving fonts.
///
/// Missing *requested* families are not errors — they degrade to the fallback
/// chain with a logged warning. An error is only surfaced when no usable face
/// exists at all.
#[derive(Debug, Error)]
pub enum FontError {
    /// Neither the requested family nor any fallback family produced a
    /// loadable face.
    #[error("no usable font face found (searched requested family and {searched} fallbacks)")]
    NoUsableFont {
        /// Number of fallback families that were tried.
        searched: usize,
    },

    /// A face was found in the database but its data could not be parsed.
    #[error("font face '{family}' could not be parsed")]
    UnreadableFace { family: String },
}
