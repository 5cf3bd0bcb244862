//! Text normalization for search comparison.
//!
//! Converts arbitrary human text (queries, item names, artist strings)
//! into comparable forms: lowercased, diacritic-folded, punctuation-free,
//! with an additional stopword-stripped variant for matching that focuses
//! on meaningful terms.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// English function words removed from the stopword-stripped variants.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "of", "to", "in", "on", "at", "for",
        "by", "with", "from",
    ]
    .into_iter()
    .collect()
});

/// A search query in its comparable forms, computed once per search term.
///
/// All fields derive deterministically from the raw input; re-normalizing
/// the same input always produces the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedQuery {
    /// Lowercased, diacritic-folded, punctuation-stripped query with
    /// collapsed whitespace.
    pub normalized: String,
    /// `normalized` with stopwords removed, rejoined by single spaces.
    pub without_stopwords: String,
    /// The word tokens of `without_stopwords`, in order.
    pub tokens_no_stop: Vec<String>,
}

impl NormalizedQuery {
    /// Normalizes a raw query string as typed by the user.
    ///
    /// Never fails: empty, whitespace-only, or punctuation-only input
    /// produces an empty query (see [`NormalizedQuery::is_empty`]).
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let without_stopwords = strip_stopwords(&normalized);
        let tokens_no_stop = tokenize(&without_stopwords)
            .map(str::to_owned)
            .collect();

        Self {
            normalized,
            without_stopwords,
            tokens_no_stop,
        }
    }

    /// Returns true if nothing comparable survived normalization.
    ///
    /// Scoring an item against an empty query yields 0; callers check
    /// this before doing any per-item work.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns true if the normalized query contains more than one word.
    #[inline]
    pub fn is_multi_word(&self) -> bool {
        self.normalized.contains(' ')
    }
}

/// Normalizes arbitrary text into its comparable form.
///
/// Lowercases, folds accented characters to their base letters, strips
/// punctuation, and collapses runs of whitespace to single spaces.
///
/// # Example
/// ```
/// use encore_search::normalize::normalize;
///
/// assert_eq!(normalize("  Café del MAR!  "), "cafe del mar");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let folded = fold_diacritics(text).to_lowercase();
    folded
        .unicode_words()
        .filter_map(|word| {
            // Word segmentation keeps internal punctuation ("don't",
            // "r.e.m"); drop it so queries match however the user types.
            let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes stopwords from already-normalized text, token by token.
///
/// Text consisting entirely of stopwords collapses to the empty string;
/// downstream comparisons treat empty operands as "no match".
pub fn strip_stopwords(text: &str) -> String {
    tokenize(text)
        .filter(|token| !STOPWORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convenience: normalizes text and strips stopwords in one pass.
pub fn normalize_no_stopwords(text: &str) -> String {
    strip_stopwords(&normalize(text))
}

/// Splits normalized text into word tokens, discarding empty tokens.
#[inline]
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Decomposes to NFD and drops combining marks, so "é" compares as "e".
fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Pink FLOYD  "), "pink floyd");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("AC/DC"), "ac dc");
        assert_eq!(normalize("R.E.M."), "rem");
    }

    #[test]
    fn test_normalize_folds_diacritics() {
        assert_eq!(normalize("Café Tacvba"), "cafe tacvba");
        assert_eq!(normalize("Björk"), "bjork");
        assert_eq!(normalize("Motörhead"), "motorhead");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("dark\t side \n of  the moon"), "dark side of the moon");
    }

    #[test]
    fn test_normalize_punctuation_only_is_empty() {
        assert_eq!(normalize("?!... ---"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_joins_contractions() {
        // "don't" is one word under unicode segmentation; the apostrophe
        // itself is dropped
        assert_eq!(normalize("Don't Stop Me Now"), "dont stop me now");
    }

    #[test]
    fn test_strip_stopwords() {
        assert_eq!(strip_stopwords("the dark side of the moon"), "dark side moon");
        assert_eq!(strip_stopwords("ramones"), "ramones");
    }

    #[test]
    fn test_strip_stopwords_all_stopwords_is_empty() {
        assert_eq!(strip_stopwords("the and of"), "");
    }

    #[test]
    fn test_tokenize_discards_empty_tokens() {
        let tokens: Vec<&str> = tokenize("dark side moon").collect();
        assert_eq!(tokens, vec!["dark", "side", "moon"]);
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_normalized_query_forms() {
        let query = NormalizedQuery::new("The Dark Side of the Moon");
        assert_eq!(query.normalized, "the dark side of the moon");
        assert_eq!(query.without_stopwords, "dark side moon");
        assert_eq!(query.tokens_no_stop, vec!["dark", "side", "moon"]);
        assert!(!query.is_empty());
        assert!(query.is_multi_word());
    }

    #[test]
    fn test_normalized_query_empty_input() {
        assert!(NormalizedQuery::new("").is_empty());
        assert!(NormalizedQuery::new("  ??!  ").is_empty());
    }

    #[test]
    fn test_normalized_query_stopword_only_input() {
        // Normalized form survives, the stopword-free variant is empty
        let query = NormalizedQuery::new("The The");
        assert!(!query.is_empty());
        assert_eq!(query.normalized, "the the");
        assert_eq!(query.without_stopwords, "");
        assert!(query.tokens_no_stop.is_empty());
    }

    #[test]
    fn test_normalized_query_deterministic() {
        assert_eq!(
            NormalizedQuery::new("Beatles, The"),
            NormalizedQuery::new("Beatles, The")
        );
    }
}
