//! Word-level alignment between the original and corrected sentences.
//!
//! The diff classifies every word of the *original* sentence: words that
//! survive into the correction are `Matched`, words the correction removed or
//! replaced are `Incorrect`. Words that exist only in the corrected sentence
//! are not rendered as standalone tokens — the corrected sentence is shown in
//! full as its own section — so insertions are consumed and dropped here.

/// Diff classification of one original-sentence word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Present in both sentences.
    Matched,
    /// Present only in the original sentence.
    Incorrect,
}

/// One classified word of the original sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffToken {
    pub text: String,
    pub class: TokenClass,
}

impl DiffToken {
    fn new(text: &str, class: TokenClass) -> Self {
        DiffToken {
            text: text.to_string(),
            class,
        }
    }
}

/// Align `original` against `corrected` and classify each original word.
///
/// `corrected` of `None` means no correction was needed: every word is
/// `Matched` and no alignment runs. Otherwise a minimal LCS edit script is
/// computed over the whitespace-tokenized words, with ties broken by taking
/// shared words as early as possible (maximizing the common prefix).
pub fn diff_words(original: &str, corrected: Option<&str>) -> Vec<DiffToken> {
    let o: Vec<&str> = original.split_whitespace().collect();
    let Some(corrected) = corrected else {
        return o
            .iter()
            .map(|w| DiffToken::new(w, TokenClass::Matched))
            .collect();
    };
    let c: Vec<&str> = corrected.split_whitespace().collect();

    let lcs = lcs_table(&o, &c);
    let (m, n) = (o.len(), c.len());
    let mut tokens = Vec::with_capacity(m);
    let (mut i, mut j) = (0, 0);

    while i < m && j < n {
        if o[i] == c[j] {
            // Taking a shared word never shortens the LCS, and taking it at
            // the first opportunity is the earliest-Equal tie-break.
            tokens.push(DiffToken::new(o[i], TokenClass::Matched));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            tokens.push(DiffToken::new(o[i], TokenClass::Incorrect));
            i += 1;
        } else {
            // Insertion: a corrected-only word, consumed but not rendered.
            j += 1;
        }
    }
    while i < m {
        tokens.push(DiffToken::new(o[i], TokenClass::Incorrect));
        i += 1;
    }

    tokens
}

/// `lcs[i][j]` = length of the longest common subsequence of `o[i..]` and
/// `c[j..]`.
fn lcs_table(o: &[&str], c: &[&str]) -> Vec<Vec<usize>> {
    let (m, n) = (o.len(), c.len());
    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            lcs[i][j] = if o[i] == c[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }
    lcs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(tokens: &[DiffToken]) -> Vec<(String, TokenClass)> {
        tokens
            .iter()
            .map(|t| (t.text.clone(), t.class))
            .collect()
    }

    #[test]
    fn test_spec_example() {
        let tokens = diff_words("I go to school yesterday", Some("I went to school yesterday"));
        assert_eq!(
            classes(&tokens),
            vec![
                ("I".into(), TokenClass::Matched),
                ("go".into(), TokenClass::Incorrect),
                ("to".into(), TokenClass::Matched),
                ("school".into(), TokenClass::Matched),
                ("yesterday".into(), TokenClass::Matched),
            ]
        );
    }

    #[test]
    fn test_identity_is_all_matched() {
        let s = "the quick brown fox";
        let tokens = diff_words(s, Some(s));
        assert!(tokens.iter().all(|t| t.class == TokenClass::Matched));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_no_correction_is_all_matched() {
        let tokens = diff_words("anything at all", None);
        assert!(tokens.iter().all(|t| t.class == TokenClass::Matched));
    }

    #[test]
    fn test_reconstruction_property() {
        // Matched + Incorrect tokens concatenated reproduce the original.
        let original = "yo soy ir a la tienda ayer mañana";
        let tokens = diff_words(original, Some("yo fui a la tienda ayer"));
        let rebuilt: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let expected: Vec<&str> = original.split_whitespace().collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_empty_original() {
        assert!(diff_words("", Some("anything")).is_empty());
        assert!(diff_words("", None).is_empty());
    }

    #[test]
    fn test_empty_corrected_flags_everything() {
        let tokens = diff_words("all wrong", Some(""));
        assert!(tokens.iter().all(|t| t.class == TokenClass::Incorrect));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_case_sensitive_words() {
        let tokens = diff_words("He said Hello", Some("He said hello"));
        assert_eq!(tokens[2].class, TokenClass::Incorrect);
    }

    #[test]
    fn test_repeated_words_prefer_earliest_match() {
        // "a b a" vs "a a": the first "a" matches first, so "b" alone is
        // flagged rather than the leading "a".
        let tokens = diff_words("a b a", Some("a a"));
        assert_eq!(
            classes(&tokens),
            vec![
                ("a".into(), TokenClass::Matched),
                ("b".into(), TokenClass::Incorrect),
                ("a".into(), TokenClass::Matched),
            ]
        );
    }

    #[test]
    fn test_insertions_are_dropped() {
        // Words only in the correction never appear in the token list.
        let tokens = diff_words("I school", Some("I went to school"));
        assert_eq!(
            classes(&tokens),
            vec![
                ("I".into(), TokenClass::Matched),
                ("school".into(), TokenClass::Matched),
            ]
        );
    }
}
