//! Text wrapping and token placement.
//!
//! Two wrapping modes serve the two kinds of content:
//!
//! - [`wrap`] breaks paragraph text on a character-count budget, the measure
//!   the tip/response/corrected sections have always used.
//! - [`place`] breaks the diff-classified original sentence on a pixel
//!   budget, tracking a drawing cursor so each word keeps its classification
//!   and its exact horizontal position across line breaks.
//!
//! Both are pure functions of their inputs: wrapping the same text twice
//! yields identical lines, which is what lets callers measure a section's
//! height before allocating its canvas and then draw into it with the same
//! break decisions.

use lingo_card_fonts::Typeface;

use crate::diff::{DiffToken, TokenClass};

/// A word placed on a line, with its pen offset from the content box's left
/// edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedToken {
    pub text: String,
    pub class: TokenClass,
    pub x: f32,
    pub width: f32,
}

/// One line of placed tokens. Rebuilt per render; never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutLine {
    pub tokens: Vec<PlacedToken>,
}

/// Vertical extent of one line: glyph ascent + descent plus the configured
/// inter-line spacing.
pub fn line_height<F: Typeface>(face: &F, line_spacing: u32) -> f32 {
    face.ascent() + face.descent() + line_spacing as f32
}

/// Greedy word wrap on a character-count budget.
///
/// Hard line breaks in `text` are honored as paragraph breaks. A single word
/// longer than the budget occupies its own line unsplit.
pub fn wrap(text: &str, width_chars: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for hard_line in text.split('\n') {
        let mut words = hard_line.split_whitespace();
        let Some(first) = words.next() else {
            // Blank source line: preserved as a visual paragraph break.
            lines.push(String::new());
            continue;
        };

        let mut current = first.to_string();
        let mut current_chars = first.chars().count();
        for word in words {
            let word_chars = word.chars().count();
            if current_chars + 1 + word_chars <= width_chars {
                current.push(' ');
                current.push_str(word);
                current_chars += 1 + word_chars;
            } else {
                lines.push(current);
                current = word.to_string();
                current_chars = word_chars;
            }
        }
        lines.push(current);
    }
    lines
}

/// Place diff tokens on a pixel budget, preserving classification.
///
/// Words are separated by one space advance. A word that alone exceeds
/// `box_width` is placed alone on its own line, unmodified.
pub fn place<F: Typeface>(tokens: &[DiffToken], box_width: f32, face: &F) -> Vec<LayoutLine> {
    let space = face.advance(' ');
    let mut lines = Vec::new();
    let mut line = LayoutLine::default();
    let mut x = 0.0f32;

    for token in tokens {
        let width = face.text_width(&token.text);
        if !line.tokens.is_empty() && x + width > box_width {
            lines.push(std::mem::take(&mut line));
            x = 0.0;
        }
        line.tokens.push(PlacedToken {
            text: token.text.clone(),
            class: token.class,
            x,
            width,
        });
        x += width + space;
    }
    if !line.tokens.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_card_fonts::GlyphBitmap;

    /// Ten pixels per character, any character.
    struct TenPxFace;

    impl Typeface for TenPxFace {
        fn ascent(&self) -> f32 {
            8.0
        }
        fn descent(&self) -> f32 {
            2.0
        }
        fn advance(&self, _ch: char) -> f32 {
            10.0
        }
        fn rasterize(&self, _ch: char) -> Option<GlyphBitmap> {
            None
        }
    }

    fn tok(text: &str, class: TokenClass) -> DiffToken {
        DiffToken {
            text: text.to_string(),
            class,
        }
    }

    #[test]
    fn test_wrap_deterministic() {
        let text = "one two three four five six seven eight nine ten";
        let a = wrap(text, 12);
        let b = wrap(text, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrap_respects_budget() {
        let lines = wrap("aa bb cc dd ee", 5);
        for line in &lines {
            assert!(line.chars().count() <= 5, "line '{line}' exceeds budget");
        }
        assert_eq!(lines, vec!["aa bb", "cc dd", "ee"]);
    }

    #[test]
    fn test_wrap_overlong_word_alone() {
        let lines = wrap("hi incomprehensibilities hi", 10);
        assert_eq!(lines, vec!["hi", "incomprehensibilities", "hi"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 45).is_empty());
        assert!(wrap("   ", 45).is_empty());
    }

    #[test]
    fn test_wrap_honors_hard_breaks() {
        let lines = wrap("first\nsecond third", 45);
        assert_eq!(lines, vec!["first", "second third"]);
    }

    #[test]
    fn test_line_height_formula() {
        assert_eq!(line_height(&TenPxFace, 15), 25.0);
    }

    #[test]
    fn test_place_breaks_on_pixel_budget() {
        // Each word is 30 px; three words with spaces need 110 px.
        let tokens = vec![
            tok("abc", TokenClass::Matched),
            tok("def", TokenClass::Incorrect),
            tok("ghi", TokenClass::Matched),
        ];
        let lines = place(&tokens, 75.0, &TenPxFace);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].tokens.len(), 2);
        assert_eq!(lines[1].tokens.len(), 1);
        // Classification survives the break.
        assert_eq!(lines[0].tokens[1].class, TokenClass::Incorrect);
        // Second word starts one word + one space in.
        assert_eq!(lines[0].tokens[1].x, 40.0);
        // New line restarts the cursor.
        assert_eq!(lines[1].tokens[0].x, 0.0);
    }

    #[test]
    fn test_place_overlong_word_alone() {
        let tokens = vec![
            tok("a", TokenClass::Matched),
            tok("superlongword", TokenClass::Matched),
        ];
        let lines = place(&tokens, 50.0, &TenPxFace);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].tokens[0].text, "superlongword");
        assert_eq!(lines[1].tokens[0].x, 0.0);
    }

    #[test]
    fn test_place_empty() {
        assert!(place(&[], 100.0, &TenPxFace).is_empty());
    }

    #[test]
    fn test_place_deterministic() {
        let tokens = vec![
            tok("uno", TokenClass::Matched),
            tok("dos", TokenClass::Incorrect),
            tok("tres", TokenClass::Matched),
        ];
        let a = place(&tokens, 80.0, &TenPxFace);
        let b = place(&tokens, 80.0, &TenPxFace);
        assert_eq!(a, b);
    }
}
