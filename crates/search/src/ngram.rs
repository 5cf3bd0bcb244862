//! Character n-gram overlap similarity.
//!
//! Catches partial relevance the exact and fuzzy tiers miss, e.g. a query
//! word buried in the middle of a compound or concatenated name.

use std::collections::HashSet;

/// Dice set-overlap coefficient over adjacent-character pairs.
///
/// `2 * |A ∩ B| / (|A| + |B|)` where `A` and `B` are the bigram sets of
/// the two strings. Strings shorter than two characters have no bigrams
/// and score 0.0.
///
/// # Example
/// ```
/// use encore_search::ngram::bigram_similarity;
///
/// assert_eq!(bigram_similarity("night", "night"), 1.0);
/// assert!(bigram_similarity("night", "nightswimming") > 0.4);
/// assert_eq!(bigram_similarity("a", "night"), 0.0);
/// ```
#[inline]
pub fn bigram_similarity(a: &str, b: &str) -> f64 {
    ngram_similarity(a, b, 2)
}

/// Dice set-overlap coefficient over length-`n` character grams.
///
/// Bigram is the tuned default granularity; larger `n` trades recall for
/// precision. Either string shorter than `n` characters scores 0.0.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }

    let a_grams = ngrams(a, n);
    let b_grams = ngrams(b, n);
    if a_grams.is_empty() || b_grams.is_empty() {
        return 0.0;
    }

    let overlap = a_grams.intersection(&b_grams).count();
    (2.0 * overlap as f64) / ((a_grams.len() + b_grams.len()) as f64)
}

/// The set of distinct length-`n` character windows of `text`.
fn ngrams(text: &str, n: usize) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < n {
        return HashSet::new();
    }

    chars.windows(n).map(|window| window.iter().collect()).collect()
}
