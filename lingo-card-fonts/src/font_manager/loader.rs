//! Font loading from the system font database.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};

use super::types::FontData;

/// Load a font family from the database at normal weight and style.
pub fn load_font_from_db(font_db: &Database, family: &str) -> Option<FontData> {
    load_font_from_db_with_style(font_db, family, Weight::NORMAL, Style::Normal)
}

/// Load a font family from the database with an explicit weight and style.
///
/// Returns `None` when the family has no matching face or the face data
/// cannot be parsed.
pub fn load_font_from_db_with_style(
    font_db: &Database,
    family: &str,
    weight: Weight,
    style: Style,
) -> Option<FontData> {
    let query = Query {
        families: &[Family::Name(family)],
        weight,
        stretch: Stretch::Normal,
        style,
    };
    let id = font_db.query(&query)?;

    let loaded = font_db.with_face_data(id, |data, face_index| {
        FontData::new_with_index(data.to_vec(), face_index as usize)
    })?;

    if loaded.is_none() {
        log::warn!("Font face for '{family}' matched but could not be parsed");
    }
    loaded
}

/// Load whatever generic sans-serif face the database resolves.
///
/// Last resort before giving up entirely; lets the renderer work on systems
/// where none of the named fallback families exist.
pub fn load_generic_sans(font_db: &Database) -> Option<FontData> {
    let query = Query {
        families: &[Family::SansSerif],
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let id = font_db.query(&query)?;
    font_db.with_face_data(id, |data, face_index| {
        FontData::new_with_index(data.to_vec(), face_index as usize)
    })?
}
