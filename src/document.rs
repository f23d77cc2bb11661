//! Parsing the feedback generator's labeled text block.
//!
//! The generator emits a loosely structured block of up to four labeled
//! sections, e.g.:
//!
//! ```text
//! Original: "I go to school yesterday"
//! Corregido: "I went to school yesterday"
//! Tip: Use the past tense for finished actions.
//! Respuesta: ¡Buen intento!
//! ```
//!
//! Any subset of labels may be present, in any order. Absence of structure is
//! a valid, common case (a perfect sentence usually arrives as a bare
//! `Respuesta:`), so parsing never fails — it degrades to whatever subset of
//! labels is found.

/// Label introducing the learner's original sentence (quoted payload).
pub const LABEL_ORIGINAL: &str = "Original:";
/// Label introducing the corrected sentence (quoted payload).
pub const LABEL_CORRECTED: &str = "Corregido:";
/// Label introducing the grammar tip (payload runs to the next label).
pub const LABEL_TIP: &str = "Tip:";
/// Label introducing the conversational reply (payload runs to the next label).
pub const LABEL_RESPONSE: &str = "Respuesta:";

/// All labels the scanner recognizes. Tail payloads end at the earliest
/// occurrence of any of these.
const LABELS: &[&str] = &[LABEL_ORIGINAL, LABEL_CORRECTED, LABEL_TIP, LABEL_RESPONSE];

/// The parsed result of one generator message.
///
/// `corrected.is_some()` is the sole signal that the original sentence
/// contains errors; when it is absent the whole original renders as correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDocument {
    pub original: String,
    pub corrected: Option<String>,
    pub tip: Option<String>,
    pub response: Option<String>,
}

impl FeedbackDocument {
    /// Extract the labeled sections from `raw`.
    pub fn parse(raw: &str) -> Self {
        FeedbackDocument {
            original: quoted_payload(raw, LABEL_ORIGINAL).unwrap_or_default(),
            corrected: quoted_payload(raw, LABEL_CORRECTED),
            tip: tail_payload(raw, LABEL_TIP),
            response: tail_payload(raw, LABEL_RESPONSE),
        }
    }

    /// True when no label produced any content.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
            && self.corrected.is_none()
            && self.tip.is_none()
            && self.response.is_none()
    }
}

/// Convert literal `\n` two-character sequences into real line breaks.
fn unescape_breaks(s: &str) -> String {
    s.replace("\\n", "\n")
}

/// Payload between the first pair of double quotes after `label`.
///
/// Only whitespace may separate the label from the opening quote; both quotes
/// are required. Multi-line content between the quotes is allowed.
fn quoted_payload(raw: &str, label: &str) -> Option<String> {
    let start = raw.find(label)? + label.len();
    let rest = raw[start..].trim_start();
    let body = rest.strip_prefix('"')?;
    let close = body.find('"')?;
    Some(unescape_breaks(&body[..close]))
}

/// Payload from `label` to the next recognized label or end of input.
///
/// Empty payloads normalize to `None` so a dangling label renders nothing.
fn tail_payload(raw: &str, label: &str) -> Option<String> {
    let start = raw.find(label)? + label.len();
    let rest = &raw[start..];

    let mut end = rest.len();
    for other in LABELS {
        if let Some(pos) = rest.find(other) {
            end = end.min(pos);
        }
    }

    let payload = unescape_breaks(rest[..end].trim());
    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let raw = concat!(
            "Original: \"I go to school yesterday\"\n",
            "Corregido: \"I went to school yesterday\"\n",
            "Tip: Use the past tense for finished actions.\n",
            "Respuesta: ¡Buen intento! ¿Qué aprendiste?",
        );
        let doc = FeedbackDocument::parse(raw);
        assert_eq!(doc.original, "I go to school yesterday");
        assert_eq!(
            doc.corrected.as_deref(),
            Some("I went to school yesterday")
        );
        assert_eq!(
            doc.tip.as_deref(),
            Some("Use the past tense for finished actions.")
        );
        assert_eq!(doc.response.as_deref(), Some("¡Buen intento! ¿Qué aprendiste?"));
    }

    #[test]
    fn test_response_only() {
        let doc = FeedbackDocument::parse("Respuesta: ¡Perfecto!");
        assert_eq!(doc.original, "");
        assert!(doc.corrected.is_none());
        assert!(doc.tip.is_none());
        assert_eq!(doc.response.as_deref(), Some("¡Perfecto!"));
    }

    #[test]
    fn test_no_labels_degrades_to_empty() {
        let doc = FeedbackDocument::parse("just some chatter with no structure");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_tail_payload_stops_at_next_label() {
        let raw = "Tip: short tip Respuesta: the reply";
        let doc = FeedbackDocument::parse(raw);
        assert_eq!(doc.tip.as_deref(), Some("short tip"));
        assert_eq!(doc.response.as_deref(), Some("the reply"));
    }

    #[test]
    fn test_labels_in_any_order() {
        let raw = "Respuesta: reply first Tip: tip later";
        let doc = FeedbackDocument::parse(raw);
        assert_eq!(doc.tip.as_deref(), Some("tip later"));
        assert_eq!(doc.response.as_deref(), Some("reply first"));
    }

    #[test]
    fn test_escaped_line_breaks_become_real() {
        let doc = FeedbackDocument::parse("Tip: first line\\nsecond line");
        assert_eq!(doc.tip.as_deref(), Some("first line\nsecond line"));
    }

    #[test]
    fn test_multi_line_quoted_payload() {
        let doc = FeedbackDocument::parse("Original: \"two\nlines\"");
        assert_eq!(doc.original, "two\nlines");
    }

    #[test]
    fn test_unquoted_original_yields_empty() {
        // The quoted-payload rule requires both quotes.
        let doc = FeedbackDocument::parse("Original: no quotes here");
        assert_eq!(doc.original, "");
    }

    #[test]
    fn test_missing_closing_quote_yields_empty() {
        let doc = FeedbackDocument::parse("Original: \"half open");
        assert_eq!(doc.original, "");
    }

    #[test]
    fn test_dangling_tip_label_is_none() {
        let doc = FeedbackDocument::parse("Tip:   ");
        assert!(doc.tip.is_none());
    }

    #[test]
    fn test_corrected_may_be_empty_but_present() {
        // An empty quoted correction still counts as "a correction exists".
        let doc = FeedbackDocument::parse("Original: \"word\" Corregido: \"\"");
        assert_eq!(doc.corrected.as_deref(), Some(""));
    }

    #[test]
    fn test_case_sensitive_labels() {
        let doc = FeedbackDocument::parse("original: \"lower\" TIP: loud");
        assert!(doc.is_empty());
    }
}
