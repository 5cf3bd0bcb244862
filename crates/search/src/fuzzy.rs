//! Fuzzy string similarity for typo-tolerant matching.

/// Similarity between two strings in `[0.0, 1.0]`, tolerant of small
/// misspellings and transpositions.
///
/// Backed by Jaro-Winkler, which rewards shared prefixes: `similarity` is
/// therefore not strictly symmetric in how it weights the two inputs,
/// which suits query-vs-name matching where users type names from the
/// start. Identical non-empty strings score 1.0; an empty operand scores
/// 0.0 (no signal, not a vacuous match).
///
/// # Example
/// ```
/// use encore_search::fuzzy::similarity;
///
/// assert_eq!(similarity("beatles", "beatles"), 1.0);
/// assert!(similarity("beatles", "beetles") > 0.85);
/// assert_eq!(similarity("", "beatles"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::jaro_winkler(a, b).clamp(0.0, 1.0)
}

/// Highest pairwise [`similarity`] across the cross product of query
/// tokens and candidate tokens.
///
/// Lets a multi-word query find its best-matching single word inside a
/// multi-word candidate name (and vice versa). Returns 0.0 if either
/// token set is empty.
pub fn best_token_match<'a, Q, C>(query_tokens: Q, candidate_tokens: C) -> f64
where
    Q: IntoIterator<Item = &'a str>,
    C: IntoIterator<Item = &'a str>,
{
    let candidates: Vec<&str> = candidate_tokens.into_iter().collect();
    let mut best = 0.0_f64;

    for query_token in query_tokens {
        for candidate_token in &candidates {
            best = best.max(similarity(query_token, candidate_token));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(similarity("pink floyd", "pink floyd"), 1.0);
    }

    #[test]
    fn test_empty_operands_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("pink", ""), 0.0);
        assert_eq!(similarity("", "floyd"), 0.0);
    }

    #[test]
    fn test_single_substitution_scores_high() {
        assert!(similarity("beatles", "beetles") > 0.85);
    }

    #[test]
    fn test_transposition_scores_high() {
        assert!(similarity("floyd", "flyod") > 0.85);
    }

    #[test]
    fn test_unrelated_strings_score_low() {
        assert!(similarity("ramones", "mozart") < 0.6);
    }

    #[test]
    fn test_result_stays_in_unit_range() {
        for (a, b) in [("abba", "abba"), ("a", "zzzzzzzz"), ("queen", "quen")] {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a} vs {b}: {score}");
        }
    }

    #[test]
    fn test_best_token_match_finds_best_pair() {
        let query = ["dark", "moon"];
        let candidate = ["moom", "rising"];
        // "moon" vs "moom" is the best pair
        let best = best_token_match(query, candidate);
        assert!(best > 0.85);
        assert!(best < 1.0);
    }

    #[test]
    fn test_best_token_match_exact_token() {
        assert_eq!(best_token_match(["floyd"], ["pink", "floyd"]), 1.0);
    }

    #[test]
    fn test_best_token_match_empty_sides() {
        assert_eq!(best_token_match([], ["pink"]), 0.0);
        assert_eq!(best_token_match(["pink"], []), 0.0);
        let none: [&str; 0] = [];
        assert_eq!(best_token_match(none, none), 0.0);
    }
}
