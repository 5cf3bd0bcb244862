//! Tunable scoring weights and thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// The weight, threshold, and bonus bundle driving [`SearchScorer`].
///
/// Primary-tier weights must be strictly descending so that a stronger
/// textual signal always dominates a weaker one, and the two linear scale
/// bands must not cross into the tier above them; [`ScoringConfig::validate`]
/// rejects any bundle that breaks this. Construct overrides with struct
/// update syntax on the tuned defaults:
///
/// ```
/// use encore_search::ScoringConfig;
///
/// let config = ScoringConfig {
///     favorite_bonus: 12.0,
///     ..ScoringConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// [`SearchScorer`]: crate::SearchScorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Raw lowercase name equality.
    pub exact_match: f64,
    /// Stopword-free name equality.
    pub exact_match_no_stopwords: f64,
    /// Name starts with the query.
    pub starts_with: f64,
    /// The query begins a word inside the name.
    pub word_boundary: f64,
    /// The query contains the name (extra words around a known name).
    pub reverse_contains: f64,
    /// Name contains the query anywhere.
    pub contains: f64,
    /// Base weight for whole-string fuzzy matches above
    /// [`fuzzy_high_threshold`](Self::fuzzy_high_threshold).
    pub fuzzy_high: f64,
    /// Width of the linear band above [`fuzzy_high`](Self::fuzzy_high);
    /// closer fuzzy matches land higher inside it.
    pub fuzzy_scale_band: f64,
    /// Flat weight for fuzzy matches above
    /// [`fuzzy_medium_threshold`](Self::fuzzy_medium_threshold), and for
    /// token-level fuzzy matches above the high threshold.
    pub fuzzy_medium: f64,
    /// Base weight for bigram matches above
    /// [`ngram_threshold`](Self::ngram_threshold).
    pub ngram: f64,
    /// Width of the linear band above [`ngram`](Self::ngram).
    pub ngram_scale_band: f64,
    /// Floor for items with no local textual signal; the upstream search
    /// already considered them relevant.
    pub baseline: f64,

    /// Whole-string similarity at or above this is a high-confidence
    /// fuzzy match.
    pub fuzzy_high_threshold: f64,
    /// Whole-string similarity at or above this is still a plausible
    /// fuzzy match.
    pub fuzzy_medium_threshold: f64,
    /// Bigram overlap at or above this counts as a partial match.
    pub ngram_threshold: f64,

    /// Minimum query-token length for the reverse-contains token-equality
    /// check, so single letters don't match short names.
    pub reverse_token_min_len: usize,

    /// Artist string equals the query (albums and tracks).
    pub artist_exact_bonus: f64,
    /// Artist string contains the query.
    pub artist_partial_bonus: f64,
    /// Containing-album name contains the query (tracks).
    pub album_contains_bonus: f64,
    /// Authors string equals the query (audiobooks).
    pub author_exact_bonus: f64,
    /// Authors string contains the query.
    pub author_partial_bonus: f64,
    /// Narrators string contains the query.
    pub narrator_contains_bonus: f64,
    /// A podcast metadata field equals the query.
    pub creator_exact_bonus: f64,
    /// A podcast metadata field contains the query.
    pub creator_partial_bonus: f64,
    /// Extra on top of the partial bonus for the middle prominence band
    /// of the podcast name fallback.
    pub prominence_mid_boost: f64,
    /// Podcast description contains the query.
    pub description_contains_bonus: f64,
    /// Album is in the requesting account's library.
    pub library_bonus: f64,
    /// Item is flagged as a favorite.
    pub favorite_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_match: 100.0,
            exact_match_no_stopwords: 96.0,
            starts_with: 80.0,
            word_boundary: 72.0,
            reverse_contains: 64.0,
            contains: 56.0,
            fuzzy_high: 24.0,
            fuzzy_scale_band: 6.0,
            fuzzy_medium: 18.0,
            ngram: 8.0,
            ngram_scale_band: 6.0,
            baseline: 1.0,

            fuzzy_high_threshold: 0.85,
            fuzzy_medium_threshold: 0.70,
            ngram_threshold: 0.45,

            reverse_token_min_len: 3,

            artist_exact_bonus: 30.0,
            artist_partial_bonus: 12.0,
            album_contains_bonus: 8.0,
            author_exact_bonus: 30.0,
            author_partial_bonus: 12.0,
            narrator_contains_bonus: 8.0,
            creator_exact_bonus: 24.0,
            creator_partial_bonus: 10.0,
            prominence_mid_boost: 4.0,
            description_contains_bonus: 6.0,
            library_bonus: 10.0,
            favorite_bonus: 5.0,
        }
    }
}

impl ScoringConfig {
    /// Checks the tier-dominance invariant.
    ///
    /// # Returns
    /// `Ok(())` if the weights are usable, [`SearchError::InvalidConfig`]
    /// naming the offending fields otherwise.
    pub fn validate(&self) -> Result<()> {
        let tiers = [
            ("exact_match", self.exact_match),
            ("exact_match_no_stopwords", self.exact_match_no_stopwords),
            ("starts_with", self.starts_with),
            ("word_boundary", self.word_boundary),
            ("reverse_contains", self.reverse_contains),
            ("contains", self.contains),
            ("fuzzy_high", self.fuzzy_high),
            ("fuzzy_medium", self.fuzzy_medium),
            ("ngram", self.ngram),
            ("baseline", self.baseline),
        ];

        for pair in tiers.windows(2) {
            let (upper_name, upper) = pair[0];
            let (lower_name, lower) = pair[1];
            if !(upper > lower) {
                return Err(SearchError::InvalidConfig(format!(
                    "{upper_name} ({upper}) must be greater than {lower_name} ({lower})"
                )));
            }
        }

        if !(self.baseline > 0.0) {
            return Err(SearchError::InvalidConfig(format!(
                "baseline ({}) must be positive",
                self.baseline
            )));
        }

        if self.fuzzy_scale_band < 0.0 || self.ngram_scale_band < 0.0 {
            return Err(SearchError::InvalidConfig(
                "scale bands must be non-negative".into(),
            ));
        }
        if self.fuzzy_high + self.fuzzy_scale_band >= self.contains {
            return Err(SearchError::InvalidConfig(format!(
                "fuzzy_high + fuzzy_scale_band ({}) must stay below contains ({})",
                self.fuzzy_high + self.fuzzy_scale_band,
                self.contains
            )));
        }
        if self.ngram + self.ngram_scale_band >= self.fuzzy_medium {
            return Err(SearchError::InvalidConfig(format!(
                "ngram + ngram_scale_band ({}) must stay below fuzzy_medium ({})",
                self.ngram + self.ngram_scale_band,
                self.fuzzy_medium
            )));
        }

        for (name, value) in [
            ("fuzzy_high_threshold", self.fuzzy_high_threshold),
            ("fuzzy_medium_threshold", self.fuzzy_medium_threshold),
            ("ngram_threshold", self.ngram_threshold),
        ] {
            if !(0.0..1.0).contains(&value) || value == 0.0 {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} ({value}) must be inside (0, 1)"
                )));
            }
        }
        if self.fuzzy_medium_threshold >= self.fuzzy_high_threshold {
            return Err(SearchError::InvalidConfig(format!(
                "fuzzy_medium_threshold ({}) must be below fuzzy_high_threshold ({})",
                self.fuzzy_medium_threshold, self.fuzzy_high_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tier_inversion_rejected() {
        let config = ScoringConfig {
            starts_with: 99.0,
            exact_match_no_stopwords: 90.0,
            ..ScoringConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("starts_with"));
    }

    #[test]
    fn test_zero_baseline_rejected() {
        let config = ScoringConfig {
            baseline: 0.0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_band_crossing_next_tier_rejected() {
        let config = ScoringConfig {
            fuzzy_scale_band: 40.0,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = ScoringConfig {
            fuzzy_high_threshold: 1.2,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            fuzzy_medium_threshold: 0.9,
            ..ScoringConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_override_uses_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"favorite_bonus": 9.5}"#).unwrap();
        assert_eq!(config.favorite_bonus, 9.5);
        assert_eq!(config.exact_match, ScoringConfig::default().exact_match);
        assert!(config.validate().is_ok());
    }
}
