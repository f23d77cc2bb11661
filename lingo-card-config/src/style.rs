//! The `StyleConfig` struct and its persistence methods.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;

/// Style options for the feedback card renderer.
///
/// Every render call receives one of these by reference; the renderer itself
/// keeps no settings of its own. Unknown keys in the file are rejected so a
/// typo does not silently fall back to a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Card width in pixels.
    #[serde(default = "crate::defaults::width")]
    pub width: u32,

    /// Horizontal and top/bottom content padding in pixels.
    #[serde(default = "crate::defaults::padding")]
    pub padding: u32,

    /// Vertical gap between the banner and the body block.
    #[serde(default = "crate::defaults::box_spacing")]
    pub box_spacing: u32,

    /// Corner radius of the banner and the body card.
    #[serde(default = "crate::defaults::corner_radius")]
    pub corner_radius: u32,

    /// Fixed height of the "Feedback" banner.
    #[serde(default = "crate::defaults::banner_height")]
    pub banner_height: u32,

    /// Extra pixels added below each text line (on top of ascent + descent).
    #[serde(default = "crate::defaults::line_spacing")]
    pub line_spacing: u32,

    /// Horizontal padding of the highlight box around an incorrect word.
    #[serde(default = "crate::defaults::highlight_margin_x")]
    pub highlight_margin_x: u32,

    /// Vertical padding of the highlight box around an incorrect word.
    #[serde(default = "crate::defaults::highlight_margin_y")]
    pub highlight_margin_y: u32,

    /// Body font size in pixels.
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    /// Font size for the plain-paragraph card.
    #[serde(default = "crate::defaults::plain_font_size")]
    pub plain_font_size: f32,

    /// Wrap budget, in characters, for paragraph sections.
    #[serde(default = "crate::defaults::wrap_width_chars")]
    pub wrap_width_chars: usize,

    /// Wrap budget, in characters, for the plain-paragraph card.
    #[serde(default = "crate::defaults::plain_wrap_width_chars")]
    pub plain_wrap_width_chars: usize,

    /// Requested regular font family. `None` uses the built-in fallback chain.
    #[serde(default)]
    pub font_family: Option<String>,

    /// Requested bold font family. `None` queries the regular family at bold
    /// weight, falling back to the regular face.
    #[serde(default)]
    pub bold_font_family: Option<String>,

    #[serde(default = "crate::defaults::banner_background")]
    pub banner_background: Color,

    #[serde(default = "crate::defaults::banner_foreground")]
    pub banner_foreground: Color,

    #[serde(default = "crate::defaults::body_background")]
    pub body_background: Color,

    #[serde(default = "crate::defaults::text_color")]
    pub text_color: Color,

    /// Highlight fill behind a word flagged as incorrect.
    #[serde(default = "crate::defaults::incorrect_background")]
    pub incorrect_background: Color,

    /// Foreground of a word flagged as incorrect.
    #[serde(default = "crate::defaults::incorrect_foreground")]
    pub incorrect_foreground: Color,

    /// Background band behind the tip section and the plain-paragraph card.
    #[serde(default = "crate::defaults::tint_background")]
    pub tint_background: Color,

    /// Horizontal rule between body sections.
    #[serde(default = "crate::defaults::rule_color")]
    pub rule_color: Color,

    /// Opaque background the final card is flattened onto.
    #[serde(default = "crate::defaults::page_background")]
    pub page_background: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: crate::defaults::width(),
            padding: crate::defaults::padding(),
            box_spacing: crate::defaults::box_spacing(),
            corner_radius: crate::defaults::corner_radius(),
            banner_height: crate::defaults::banner_height(),
            line_spacing: crate::defaults::line_spacing(),
            highlight_margin_x: crate::defaults::highlight_margin_x(),
            highlight_margin_y: crate::defaults::highlight_margin_y(),
            font_size: crate::defaults::font_size(),
            plain_font_size: crate::defaults::plain_font_size(),
            wrap_width_chars: crate::defaults::wrap_width_chars(),
            plain_wrap_width_chars: crate::defaults::plain_wrap_width_chars(),
            font_family: None,
            bold_font_family: None,
            banner_background: crate::defaults::banner_background(),
            banner_foreground: crate::defaults::banner_foreground(),
            body_background: crate::defaults::body_background(),
            text_color: crate::defaults::text_color(),
            incorrect_background: crate::defaults::incorrect_background(),
            incorrect_foreground: crate::defaults::incorrect_foreground(),
            tint_background: crate::defaults::tint_background(),
            rule_color: crate::defaults::rule_color(),
            page_background: crate::defaults::page_background(),
        }
    }
}

impl StyleConfig {
    /// Load configuration from the default path, or return defaults when no
    /// file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        log::info!("Style config path: {:?}", path);
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("No style config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Validation(format!("serialization failed: {e}")))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    /// XDG-compliant default config file location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lingo-card")
            .join("style.toml")
    }

    /// Semantic validation of field values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be nonzero".into()));
        }
        if self.padding * 2 >= self.width {
            return Err(ConfigError::Validation(format!(
                "padding {} leaves no content area in width {}",
                self.padding, self.width
            )));
        }
        if self.wrap_width_chars == 0 || self.plain_wrap_width_chars == 0 {
            return Err(ConfigError::Validation(
                "wrap widths must be nonzero".into(),
            ));
        }
        if !(self.font_size > 0.0) || !(self.plain_font_size > 0.0) {
            return Err(ConfigError::Validation(
                "font sizes must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_card_look() {
        let c = StyleConfig::default();
        assert_eq!(c.width, 600);
        assert_eq!(c.padding, 30);
        assert_eq!(c.box_spacing, 20);
        assert_eq!(c.corner_radius, 15);
        assert_eq!(c.banner_height, 80);
        assert_eq!(c.wrap_width_chars, 45);
        assert_eq!(c.banner_background, Color::new(0x43, 0x4C, 0x5E));
        assert_eq!(c.incorrect_background, Color::new(0xF3, 0x4A, 0x07));
        assert_eq!(c.tint_background, Color::new(0xFF, 0xFB, 0xEA));
        assert!(c.font_family.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: StyleConfig = toml::from_str("width = 800\n").unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.padding, 30);
        assert_eq!(config.banner_foreground, Color::new(0xEB, 0xCB, 0x8B));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<StyleConfig, _> = toml::from_str("widht = 800\n");
        assert!(result.is_err(), "typo'd key should not be accepted");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        let mut config = StyleConfig::default();
        config.width = 720;
        config.font_family = Some("DejaVu Sans".to_string());
        config.save_to(&path).unwrap();
        let loaded = StyleConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = StyleConfig::default();
        config.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_padding_exceeding_width() {
        let mut config = StyleConfig::default();
        config.width = 50;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_rejects_bad_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "text_color = \"#XYZ\"\n").unwrap();
        assert!(StyleConfig::load_from(&path).is_err());
    }
}
