//! Font management with a fallback chain for card rendering.
//!
//! This module provides font loading and face resolution:
//! - Requested regular/bold families resolved against the system database
//! - A priority-ordered fallback chain when a requested family is missing
//! - Bold degrading to the regular face when no bold face exists

mod fallbacks;
mod loader;
mod types;

use fontdb::{Database, Style, Weight};

use crate::error::FontError;
use crate::face::{FacePair, ScaledFace};

pub use fallbacks::FALLBACK_FAMILIES;
pub use types::FontData;

/// Resolves and owns the regular and bold faces used by the renderer.
///
/// Construction scans the system font database once; the resolved faces are
/// immutable afterwards. Face resolution order:
/// 1. The requested family (if any)
/// 2. Each family in [`FALLBACK_FAMILIES`]
/// 3. The database's generic sans-serif face
pub struct FontManager {
    /// Regular-weight face.
    regular: FontData,

    /// Bold face; `None` falls back to the regular face.
    bold: Option<FontData>,
}

impl FontManager {
    /// Create a new FontManager from system fonts.
    ///
    /// # Arguments
    /// * `family` - Requested regular font family name
    /// * `bold_family` - Requested bold font family name; when `None` the
    ///   regular family is queried at bold weight instead
    pub fn new(family: Option<&str>, bold_family: Option<&str>) -> Result<Self, FontError> {
        let mut font_db = Database::new();
        font_db.load_system_fonts();
        log::info!("Loaded {} system fonts", font_db.len());

        let regular = Self::load_regular(&font_db, family)?;
        let bold = Self::load_bold(&font_db, family, bold_family);
        if bold.is_none() {
            log::warn!("No bold face found, labels will use the regular face");
        }

        Ok(FontManager { regular, bold })
    }

    /// Resolve the regular face, walking the fallback chain.
    fn load_regular(font_db: &Database, family: Option<&str>) -> Result<FontData, FontError> {
        if let Some(family_name) = family {
            log::info!("Attempting to load font: {}", family_name);
            if let Some(font_data) = loader::load_font_from_db(font_db, family_name) {
                log::info!("Successfully loaded font: {}", family_name);
                return Ok(font_data);
            }
            log::warn!(
                "Requested font '{}' not found, scanning fallback families",
                family_name
            );
        }

        for family_name in FALLBACK_FAMILIES {
            if let Some(font_data) = loader::load_font_from_db(font_db, family_name) {
                log::info!("Using fallback font: {}", family_name);
                return Ok(font_data);
            }
        }

        if let Some(font_data) = loader::load_generic_sans(font_db) {
            log::warn!("No fallback family present, using generic sans-serif face");
            return Ok(font_data);
        }

        Err(FontError::NoUsableFont {
            searched: FALLBACK_FAMILIES.len(),
        })
    }

    /// Resolve the bold face.
    ///
    /// An explicit bold family wins; otherwise the regular family (or each
    /// fallback family) is queried at bold weight.
    fn load_bold(
        font_db: &Database,
        family: Option<&str>,
        bold_family: Option<&str>,
    ) -> Option<FontData> {
        if let Some(name) = bold_family {
            log::info!("Attempting to load bold font: {}", name);
            let loaded = loader::load_font_from_db(font_db, name);
            if loaded.is_some() {
                return loaded;
            }
            log::warn!("Bold font '{}' not found, querying bold weight", name);
        }

        let candidates = family.into_iter().chain(FALLBACK_FAMILIES.iter().copied());
        for name in candidates {
            if let Some(font_data) =
                loader::load_font_from_db_with_style(font_db, name, Weight::BOLD, Style::Normal)
            {
                log::info!("Using bold weight of: {}", name);
                return Some(font_data);
            }
        }
        None
    }

    /// The resolved regular face.
    pub fn regular(&self) -> &FontData {
        &self.regular
    }

    /// The resolved bold face, when one exists.
    pub fn bold(&self) -> Option<&FontData> {
        self.bold.as_ref()
    }

    /// Bind the resolved faces to a pixel size.
    ///
    /// The bold slot degrades to the regular face when no bold face was
    /// resolved, matching how the cards have always rendered on hosts without
    /// a bold DejaVu install.
    pub fn scaled_pair(&self, size: f32) -> FacePair<ScaledFace> {
        let bold_data = self.bold.clone().unwrap_or_else(|| self.regular.clone());
        FacePair {
            regular: ScaledFace::new(self.regular.clone(), size),
            bold: ScaledFace::new(bold_data, size),
        }
    }

    /// Bind the regular face alone to a pixel size.
    pub fn scaled_regular(&self, size: f32) -> ScaledFace {
        ScaledFace::new(self.regular.clone(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Host machines are not guaranteed to ship fonts (minimal CI images);
    // these tests exercise the happy path only where one exists.
    fn manager_or_skip() -> Option<FontManager> {
        match FontManager::new(None, None) {
            Ok(fm) => Some(fm),
            Err(e) => {
                eprintln!("skipping: {e}");
                None
            }
        }
    }

    #[test]
    fn test_system_font_loads() {
        let Some(fm) = manager_or_skip() else { return };
        assert!(!fm.regular().data.is_empty());
    }

    #[test]
    fn test_unknown_family_falls_back() {
        if manager_or_skip().is_none() {
            return;
        }
        let fm = FontManager::new(Some("No Such Family 9000"), None);
        assert!(fm.is_ok(), "missing family should fall back, not fail");
    }

    #[test]
    fn test_scaled_pair_has_positive_metrics() {
        use crate::face::Typeface;
        let Some(fm) = manager_or_skip() else { return };
        let pair = fm.scaled_pair(20.0);
        assert!(pair.regular.ascent() > 0.0);
        assert!(pair.bold.ascent() > 0.0);
    }
}
