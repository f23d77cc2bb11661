//! Layout policy and vertical composition of the final card.
//!
//! A parsed document selects exactly one of two layouts up front:
//!
//! - **Response-only** — no correction and no tip, just a reply: banner plus
//!   one tinted paragraph.
//! - **Full** — everything else: banner, the diff-highlighted original
//!   sentence, then whichever of corrected/tip/response are present.
//!
//! Sections are rendered independently and stacked; the only gap is between
//! the banner and the body card (sections inside the body are contiguous and
//! separated by the rules the renderer draws). The final canvas is exactly
//! the sum of the parts — nothing is over-allocated and cropped.

use lingo_card_config::StyleConfig;
use lingo_card_fonts::{FacePair, Typeface};

use crate::canvas::{self, Canvas};
use crate::diff::diff_words;
use crate::document::{FeedbackDocument, LABEL_CORRECTED, LABEL_RESPONSE, LABEL_TIP};
use crate::error::RenderError;
use crate::layout;
use crate::sections::{
    BANNER_TITLE, SectionKind, SectionSpec, SectionStyle, measure_section, render_section,
};

/// Label of the diff-highlighted sentence section.
pub const LABEL_SENTENCE: &str = "Frase Original:";

/// Assemble the ordered section list for a document.
///
/// The first spec is always the banner; any body sections follow with their
/// corner/padding flags already assigned.
pub fn plan_sections(doc: &FeedbackDocument) -> Vec<SectionSpec> {
    let mut specs = vec![SectionSpec {
        kind: SectionKind::Banner {
            title: BANNER_TITLE.to_string(),
        },
        label: None,
        style: SectionStyle::default(),
    }];

    let response_only = doc.corrected.is_none() && doc.tip.is_none() && doc.response.is_some();

    let mut body: Vec<SectionSpec> = Vec::new();
    if response_only {
        let response = doc.response.clone().unwrap_or_default();
        body.push(SectionSpec {
            kind: SectionKind::Paragraph { body: response },
            label: Some(LABEL_RESPONSE.to_string()),
            style: SectionStyle {
                tinted: true,
                ..Default::default()
            },
        });
    } else {
        if !doc.original.is_empty() {
            let tokens = diff_words(&doc.original, doc.corrected.as_deref());
            body.push(SectionSpec {
                kind: SectionKind::DiffSentence { tokens },
                label: Some(LABEL_SENTENCE.to_string()),
                style: SectionStyle {
                    rule_after: true,
                    ..Default::default()
                },
            });
        }
        if let Some(corrected) = &doc.corrected {
            body.push(SectionSpec {
                kind: SectionKind::Paragraph {
                    body: corrected.clone(),
                },
                label: Some(LABEL_CORRECTED.to_string()),
                style: SectionStyle {
                    rule_after: true,
                    ..Default::default()
                },
            });
        }
        if let Some(tip) = &doc.tip {
            body.push(SectionSpec {
                kind: SectionKind::Paragraph { body: tip.clone() },
                label: Some(LABEL_TIP.to_string()),
                style: SectionStyle {
                    tinted: true,
                    rule_after: true,
                    ..Default::default()
                },
            });
        }
        if let Some(response) = &doc.response {
            body.push(SectionSpec {
                kind: SectionKind::Paragraph {
                    body: response.clone(),
                },
                label: Some(LABEL_RESPONSE.to_string()),
                style: SectionStyle::default(),
            });
        }
    }

    if let Some(first) = body.first_mut() {
        first.style.round_top = true;
    }
    if let Some(last) = body.last_mut() {
        last.style.round_bottom = true;
        last.style.pad_bottom = true;
    }
    specs.extend(body);
    specs
}

/// Render a document to PNG bytes.
pub(crate) fn compose<F: Typeface>(
    doc: &FeedbackDocument,
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> Result<Vec<u8>, RenderError> {
    let specs = plan_sections(doc);
    log::debug!("Composing card with {} section(s)", specs.len());

    let heights: Vec<u32> = specs
        .iter()
        .map(|s| measure_section(s, style, faces))
        .collect();
    let body_total: u32 = heights.iter().skip(1).sum();
    let mut total = heights[0];
    if body_total > 0 {
        total += style.box_spacing + body_total;
    }

    let mut card = Canvas::new(style.width, total);
    let mut y = 0u32;
    for (index, spec) in specs.iter().enumerate() {
        let section = render_section(spec, style, faces);
        card.overlay(&section, y);
        y += section.height();
        if index == 0 {
            y += style.box_spacing;
        }
    }

    let flat = card.flatten(style.page_background);
    Ok(canvas::encode_png(&flat)?)
}

/// Render bare text as a shrink-to-fit tinted card.
///
/// Unlike the feedback card, the canvas width hugs the widest wrapped line —
/// this is the "just show this text" output used for plain replies.
pub(crate) fn compose_plain<F: Typeface>(
    text: &str,
    style: &StyleConfig,
    face: &F,
) -> Result<Vec<u8>, RenderError> {
    let lines = layout::wrap(text, style.plain_wrap_width_chars);
    let line_height = layout::line_height(face, style.line_spacing);

    let content_width = lines
        .iter()
        .map(|l| face.text_width(l))
        .fold(0.0f32, f32::max)
        .ceil() as u32;
    let block_height = if lines.is_empty() {
        0
    } else {
        // The last line does not need trailing inter-line spacing.
        ((lines.len() as f32 * line_height).ceil() as u32).saturating_sub(style.line_spacing)
    };

    let width = content_width + 2 * style.padding;
    let height = block_height + 2 * style.padding;
    log::debug!("Composing plain card {}x{}", width, height);

    let mut card = Canvas::new(width, height);
    card.fill_rect(0, 0, width, height, style.tint_background);

    let pad = style.padding as f32;
    for (row, line) in lines.iter().enumerate() {
        let baseline = pad + row as f32 * line_height + face.ascent();
        card.draw_text(face, line, pad, baseline, style.text_color);
    }

    let flat = card.flatten(style.page_background);
    Ok(canvas::encode_png(&flat)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(
        original: &str,
        corrected: Option<&str>,
        tip: Option<&str>,
        response: Option<&str>,
    ) -> FeedbackDocument {
        FeedbackDocument {
            original: original.to_string(),
            corrected: corrected.map(String::from),
            tip: tip.map(String::from),
            response: response.map(String::from),
        }
    }

    fn kinds(specs: &[SectionSpec]) -> Vec<&'static str> {
        specs
            .iter()
            .map(|s| match s.kind {
                SectionKind::Banner { .. } => "banner",
                SectionKind::DiffSentence { .. } => "diff",
                SectionKind::Paragraph { .. } => "paragraph",
            })
            .collect()
    }

    #[test]
    fn test_response_only_layout() {
        let specs = plan_sections(&doc("Good job", None, None, Some("Great!")));
        assert_eq!(kinds(&specs), vec!["banner", "paragraph"]);
        assert!(specs[1].style.tinted);
        assert_eq!(specs[1].label.as_deref(), Some(LABEL_RESPONSE));
    }

    #[test]
    fn test_full_layout_with_all_sections() {
        let specs = plan_sections(&doc(
            "I has",
            Some("I have"),
            Some("Use 'have' with I"),
            Some("Good try"),
        ));
        assert_eq!(
            kinds(&specs),
            vec!["banner", "diff", "paragraph", "paragraph", "paragraph"]
        );
    }

    #[test]
    fn test_tip_forces_full_layout() {
        // A tip without a correction still selects the full layout.
        let specs = plan_sections(&doc("Bien hecho", None, Some("Keep going"), Some("ok")));
        assert_eq!(kinds(&specs), vec!["banner", "diff", "paragraph", "paragraph"]);
    }

    #[test]
    fn test_empty_document_is_banner_only() {
        let specs = plan_sections(&FeedbackDocument::default());
        assert_eq!(kinds(&specs), vec!["banner"]);
    }

    #[test]
    fn test_body_corner_flags() {
        let specs = plan_sections(&doc("I has", Some("I have"), Some("tip"), None));
        let body = &specs[1..];
        assert!(body[0].style.round_top);
        assert!(!body[0].style.round_bottom);
        let last = body.last().unwrap();
        assert!(last.style.round_bottom);
        assert!(last.style.pad_bottom);
    }

    #[test]
    fn test_diff_tokens_flag_incorrect_word() {
        use crate::diff::TokenClass;
        let specs = plan_sections(&doc("I has", Some("I have"), None, None));
        let SectionKind::DiffSentence { tokens } = &specs[1].kind else {
            panic!("second section should be the diff sentence");
        };
        assert_eq!(tokens[0].class, TokenClass::Matched);
        assert_eq!(tokens[1].text, "has");
        assert_eq!(tokens[1].class, TokenClass::Incorrect);
    }
}
