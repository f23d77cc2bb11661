//! Declarative section specs and their rendering.
//!
//! The compositor describes a card as an ordered list of [`SectionSpec`]
//! values; this module turns one spec into a width-fixed, height-exact
//! [`Canvas`]. Heights come from [`measure_section`], which runs the same
//! wrap/place computation the draw pass uses — there is no oversized scratch
//! canvas and no cropping.

use lingo_card_config::StyleConfig;
use lingo_card_fonts::{FacePair, Typeface};

use crate::canvas::{Canvas, Corners};
use crate::diff::{DiffToken, TokenClass};
use crate::layout::{self, LayoutLine};

/// Title drawn in the banner section.
pub const BANNER_TITLE: &str = "Feedback";

/// The closed set of section shapes a card can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionKind {
    /// Centered bold title on a solid rounded background, fixed height.
    Banner { title: String },
    /// The original sentence with per-word highlight classification.
    DiffSentence { tokens: Vec<DiffToken> },
    /// Wrapped plain text with an optional bold label.
    Paragraph { body: String },
}

/// Per-section presentation flags, assigned by the compositor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionStyle {
    /// Draw the full-width tint band behind label and body.
    pub tinted: bool,
    /// Draw a horizontal rule after the content.
    pub rule_after: bool,
    /// Round the top corners (first section of the body card).
    pub round_top: bool,
    /// Round the bottom corners (last section of the body card).
    pub round_bottom: bool,
    /// Add the card's bottom padding (last section of the body card).
    pub pad_bottom: bool,
}

/// One renderable unit of the card.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    pub kind: SectionKind,
    pub label: Option<String>,
    pub style: SectionStyle,
}

/// Computed height of a section for the given style and faces.
///
/// Guaranteed to match what [`render_section`] draws: both run the same
/// layout plan.
pub fn measure_section<F: Typeface>(
    spec: &SectionSpec,
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> u32 {
    match &spec.kind {
        SectionKind::Banner { .. } => style.banner_height,
        SectionKind::DiffSentence { tokens } => diff_plan(tokens, style, faces).height,
        SectionKind::Paragraph { body } => {
            paragraph_plan(body, spec.label.is_some(), spec.style, style, faces).height
        }
    }
}

/// Render a section onto a fresh canvas of exactly its measured size.
pub fn render_section<F: Typeface>(
    spec: &SectionSpec,
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> Canvas {
    match &spec.kind {
        SectionKind::Banner { title } => render_banner(title, style, faces),
        SectionKind::DiffSentence { tokens } => render_diff(spec, tokens, style, faces),
        SectionKind::Paragraph { body } => render_paragraph(spec, body, style, faces),
    }
}

fn body_corners(section: SectionStyle) -> Corners {
    Corners {
        top: section.round_top,
        bottom: section.round_bottom,
    }
}

fn render_banner<F: Typeface>(title: &str, style: &StyleConfig, faces: &FacePair<F>) -> Canvas {
    let mut canvas = Canvas::new(style.width, style.banner_height);
    canvas.fill_rounded_rect(
        0,
        0,
        style.width,
        style.banner_height,
        style.corner_radius,
        Corners::ALL,
        style.banner_background,
    );

    let bold = &faces.bold;
    let text_height = bold.ascent() + bold.descent();
    let x = (style.width as f32 - bold.text_width(title)) / 2.0;
    let baseline = (style.banner_height as f32 - text_height) / 2.0 + bold.ascent();
    canvas.draw_text(bold, title, x, baseline, style.banner_foreground);
    canvas
}

// ── Diff sentence ──────────────────────────────────────────────────────────

struct DiffPlan {
    lines: Vec<LayoutLine>,
    line_height: f32,
    height: u32,
}

fn diff_plan<F: Typeface>(
    tokens: &[DiffToken],
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> DiffPlan {
    let box_width = (style.width - 2 * style.padding) as f32;
    let lines = layout::place(tokens, box_width, &faces.regular);
    let line_height = layout::line_height(&faces.regular, style.line_spacing);

    // Label line + wrapped token lines, then the rule on the last pixel row.
    let rows = 1 + lines.len() as u32;
    let rule_y = style.padding + (rows as f32 * line_height).ceil() as u32;
    DiffPlan {
        lines,
        line_height,
        height: rule_y + 1,
    }
}

fn render_diff<F: Typeface>(
    spec: &SectionSpec,
    tokens: &[DiffToken],
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> Canvas {
    let plan = diff_plan(tokens, style, faces);
    let mut canvas = Canvas::new(style.width, plan.height);
    canvas.fill_rounded_rect(
        0,
        0,
        style.width,
        plan.height,
        style.corner_radius,
        body_corners(spec.style),
        style.body_background,
    );

    let regular = &faces.regular;
    let ascent = regular.ascent();
    let pad = style.padding as f32;

    if let Some(label) = &spec.label {
        canvas.draw_text(&faces.bold, label, pad, pad + ascent, style.text_color);
    }

    for (row, line) in plan.lines.iter().enumerate() {
        let top = pad + (1 + row) as f32 * plan.line_height;
        for token in &line.tokens {
            let x = pad + token.x;
            if token.class == TokenClass::Incorrect {
                let mx = style.highlight_margin_x as i32;
                let my = style.highlight_margin_y as i32;
                canvas.fill_rect(
                    x.round() as i32 - mx,
                    top.round() as i32 - my,
                    token.width.round() as u32 + 2 * mx as u32,
                    (ascent + regular.descent()).round() as u32 + 2 * my as u32,
                    style.incorrect_background,
                );
                canvas.draw_text(
                    regular,
                    &token.text,
                    x,
                    top + ascent,
                    style.incorrect_foreground,
                );
            } else {
                canvas.draw_text(regular, &token.text, x, top + ascent, style.text_color);
            }
        }
    }

    canvas.hline(
        style.padding as i32,
        (style.width - style.padding) as i32,
        plan.height as i32 - 1,
        style.rule_color,
    );
    canvas
}

// ── Paragraph ──────────────────────────────────────────────────────────────

struct ParagraphPlan {
    lines: Vec<String>,
    line_height: f32,
    pad_top: u32,
    content_bottom: u32,
    rule_y: Option<u32>,
    height: u32,
}

fn paragraph_plan<F: Typeface>(
    body: &str,
    has_label: bool,
    section: SectionStyle,
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> ParagraphPlan {
    let lines = layout::wrap(body, style.wrap_width_chars);
    let line_height = layout::line_height(&faces.regular, style.line_spacing);

    let rows = lines.len() as u32 + u32::from(has_label);
    let pad_top = style.padding / 2;
    let content_bottom = pad_top + (rows as f32 * line_height).ceil() as u32;

    let rule_y = section.rule_after.then(|| content_bottom + style.padding / 2);
    let mut height = rule_y.map_or(content_bottom, |y| y + 1);
    if section.pad_bottom {
        height += style.padding;
    }

    ParagraphPlan {
        lines,
        line_height,
        pad_top,
        content_bottom,
        rule_y,
        height,
    }
}

fn render_paragraph<F: Typeface>(
    spec: &SectionSpec,
    body: &str,
    style: &StyleConfig,
    faces: &FacePair<F>,
) -> Canvas {
    let plan = paragraph_plan(body, spec.label.is_some(), spec.style, style, faces);
    let mut canvas = Canvas::new(style.width, plan.height);
    canvas.fill_rounded_rect(
        0,
        0,
        style.width,
        plan.height,
        style.corner_radius,
        body_corners(spec.style),
        style.body_background,
    );

    if spec.style.tinted {
        // From just above the label to just below the last line.
        let tint_top = plan.pad_top.saturating_sub(style.line_spacing);
        canvas.fill_rect(
            0,
            tint_top as i32,
            style.width,
            plan.content_bottom - tint_top,
            style.tint_background,
        );
    }

    let regular = &faces.regular;
    let ascent = regular.ascent();
    let pad = style.padding as f32;
    let top = plan.pad_top as f32;

    let mut row = 0u32;
    if let Some(label) = &spec.label {
        canvas.draw_text(&faces.bold, label, pad, top + ascent, style.text_color);
        row += 1;
    }
    for line in &plan.lines {
        let line_top = top + row as f32 * plan.line_height;
        canvas.draw_text(regular, line, pad, line_top + ascent, style.text_color);
        row += 1;
    }

    if let Some(rule_y) = plan.rule_y {
        canvas.hline(
            style.padding as i32,
            (style.width - style.padding) as i32,
            rule_y as i32,
            style.rule_color,
        );
    }
    canvas
}
