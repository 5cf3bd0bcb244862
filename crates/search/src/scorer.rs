//! Multi-tier relevance scoring for media search results.
//!
//! A [`SearchScorer`] turns one candidate item plus the active query into
//! a single relevance number. Primary tiers are strictly ordered (first
//! match wins, stronger signals score higher by construction), then
//! type-specific field bonuses and status bonuses are added on top. The
//! caller sorts candidates by descending score; see [`crate::batch`].

use tracing::debug;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::fuzzy;
use crate::media::{MediaItem, MediaKind, PodcastFields};
use crate::ngram;
use crate::normalize::{normalize, normalize_no_stopwords, strip_stopwords, tokenize, NormalizedQuery};

/// Scores candidate items against a search query.
///
/// One scorer serves one search session: ranking a result set is
/// inherently sequential (normalize the query once, then score each
/// candidate), and the per-instance query cache makes that cheap.
/// Concurrent sessions should each construct their own scorer; for
/// shared-nothing batch scoring use [`score_with_query`] with an
/// externally normalized query.
///
/// [`score_with_query`]: SearchScorer::score_with_query
///
/// # Example
/// ```
/// use encore_search::{MediaItem, SearchScorer};
///
/// let mut scorer = SearchScorer::default();
/// let exact = scorer.score_item(&MediaItem::artist("Pink Floyd"), "pink floyd");
/// let typo = scorer.score_item(&MediaItem::artist("Pink Flyod"), "pink floyd");
/// assert!(exact > typo);
/// assert!(typo > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SearchScorer {
    config: ScoringConfig,
    /// Raw query string the cache was built for.
    cached_query_string: Option<String>,
    /// Normalized forms of `cached_query_string`.
    cached_query: NormalizedQuery,
}

impl Default for SearchScorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
            cached_query_string: None,
            cached_query: NormalizedQuery::new(""),
        }
    }
}

impl SearchScorer {
    /// Creates a scorer with the given config.
    ///
    /// # Returns
    /// [`SearchError::InvalidConfig`](crate::SearchError::InvalidConfig)
    /// if the weights violate the tier-dominance invariant.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cached_query_string: None,
            cached_query: NormalizedQuery::new(""),
        })
    }

    /// The active scoring config.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Drops the cached query so the next [`score_item`] call
    /// re-normalizes.
    ///
    /// The cache is keyed on the raw query string and rebuilt on any
    /// mismatch, so calling this between searches is optional.
    ///
    /// [`score_item`]: SearchScorer::score_item
    pub fn clear_cache(&mut self) {
        self.cached_query_string = None;
    }

    /// Scores one candidate against the query, reusing the cached
    /// normalized query when the raw string is unchanged.
    ///
    /// Never fails: empty or unmatchable input falls through to lower
    /// tiers, ultimately the baseline floor, or 0 for an empty query.
    pub fn score_item(&mut self, item: &MediaItem, query: &str) -> f64 {
        if self.cached_query_string.as_deref() != Some(query) {
            debug!(query, "rebuilding cached query");
            self.cached_query_string = Some(query.to_owned());
            self.cached_query = NormalizedQuery::new(query);
        }

        self.score_with_query(item, &self.cached_query)
    }

    /// Scores one candidate against an externally normalized query.
    ///
    /// Takes `&self` and no cache, so a batch caller can normalize once
    /// and score candidates from multiple threads.
    pub fn score_with_query(&self, item: &MediaItem, query: &NormalizedQuery) -> f64 {
        if query.is_empty() {
            return 0.0;
        }

        let name = normalize(&item.name);
        if name.is_empty() {
            return 0.0;
        }
        let name_no_stop = strip_stopwords(&name);

        self.primary_score(&name, &name_no_stop, query)
            + self.secondary_score(item, &name_no_stop, query)
            + self.status_bonus(item)
    }

    /// The ordered tier chain over the item's name. First match wins.
    fn primary_score(&self, name: &str, name_no_stop: &str, query: &NormalizedQuery) -> f64 {
        let cfg = &self.config;
        let qn = query.normalized.as_str();
        let qs = query.without_stopwords.as_str();
        let both_no_stop = !qs.is_empty() && !name_no_stop.is_empty();

        // Exact equality, raw then stopword-free
        if name == qn {
            return cfg.exact_match;
        }
        if both_no_stop && name_no_stop == qs {
            return cfg.exact_match_no_stopwords;
        }

        // Name starts with the query
        if name.starts_with(qn) || (both_no_stop && name_no_stop.starts_with(qs)) {
            return cfg.starts_with;
        }

        // Query begins a word inside the name
        if query.is_multi_word() {
            if name.contains(&format!(" {qn}"))
                || (both_no_stop && name_no_stop.contains(&format!(" {qs}")))
            {
                return cfg.word_boundary;
            }
        } else if tokenize(name).any(|word| word.starts_with(qn)) {
            return cfg.word_boundary;
        }

        // The query contains the name: extra words typed around a name
        // the library knows without them, e.g. "the ramones live" for
        // the artist "Ramones"
        if !name_no_stop.is_empty() {
            let token_equals_name = query.tokens_no_stop.iter().any(|token| {
                token.chars().count() >= cfg.reverse_token_min_len
                    && token.as_str() == name_no_stop
            });
            if qn.contains(name_no_stop) || token_equals_name {
                return cfg.reverse_contains;
            }
        }

        // Name contains the query anywhere
        if name.contains(qn) || (both_no_stop && name_no_stop.contains(qs)) {
            return cfg.contains;
        }

        // Whole-string fuzzy over the stopword-free forms
        let whole = fuzzy::similarity(qs, name_no_stop);
        if whole >= cfg.fuzzy_high_threshold {
            let closeness = (whole - cfg.fuzzy_high_threshold) / (1.0 - cfg.fuzzy_high_threshold);
            return cfg.fuzzy_high + closeness * cfg.fuzzy_scale_band;
        }
        if whole >= cfg.fuzzy_medium_threshold {
            return cfg.fuzzy_medium;
        }

        // Token-level fuzzy: best single word pair. A weaker signal than
        // a whole-string match, so it is capped at the medium weight.
        let token_best = fuzzy::best_token_match(
            query.tokens_no_stop.iter().map(String::as_str),
            tokenize(name_no_stop),
        );
        if token_best >= cfg.fuzzy_high_threshold {
            return cfg.fuzzy_medium;
        }

        // Bigram overlap for partial/compound matches
        let overlap = ngram::bigram_similarity(qs, name_no_stop);
        if overlap >= cfg.ngram_threshold {
            let closeness = (overlap - cfg.ngram_threshold) / (1.0 - cfg.ngram_threshold);
            return cfg.ngram + closeness * cfg.ngram_scale_band;
        }

        // The upstream search returned this item, so it carries some
        // relevance even without a local textual signal
        cfg.baseline
    }

    /// Additive bonuses from type-specific secondary fields.
    fn secondary_score(&self, item: &MediaItem, name_no_stop: &str, query: &NormalizedQuery) -> f64 {
        let cfg = &self.config;
        let qs = query.without_stopwords.as_str();
        if qs.is_empty() {
            return 0.0;
        }

        match &item.kind {
            MediaKind::Artist | MediaKind::Playlist | MediaKind::Radio => 0.0,
            MediaKind::Album(fields) => self.credited_names_bonus(
                &fields.artists,
                qs,
                cfg.artist_exact_bonus,
                cfg.artist_partial_bonus,
            ),
            MediaKind::Track(fields) => {
                let mut bonus = self.credited_names_bonus(
                    &fields.artists,
                    qs,
                    cfg.artist_exact_bonus,
                    cfg.artist_partial_bonus,
                );
                if let Some(album) = &fields.album {
                    let album_no_stop = normalize_no_stopwords(album);
                    if !album_no_stop.is_empty() && album_no_stop.contains(qs) {
                        bonus += cfg.album_contains_bonus;
                    }
                }
                bonus
            }
            MediaKind::Audiobook(fields) => {
                let mut bonus = self.credited_names_bonus(
                    &fields.authors,
                    qs,
                    cfg.author_exact_bonus,
                    cfg.author_partial_bonus,
                );
                let narrators = normalize_no_stopwords(&fields.narrators);
                if !narrators.is_empty() && narrators.contains(qs) {
                    bonus += cfg.narrator_contains_bonus;
                }
                bonus
            }
            MediaKind::Podcast(fields) | MediaKind::PodcastEpisode(fields) => {
                self.podcast_bonus(fields, name_no_stop, query)
            }
        }
    }

    /// Exact-vs-partial bonus for a flattened credited-names string
    /// (artists, authors).
    fn credited_names_bonus(&self, names: &str, qs: &str, exact: f64, partial: f64) -> f64 {
        let names_no_stop = normalize_no_stopwords(names);
        if names_no_stop.is_empty() {
            return 0.0;
        }
        if names_no_stop == qs {
            exact
        } else if names_no_stop.contains(qs) {
            partial
        } else {
            0.0
        }
    }

    /// Podcast metadata bonus: ordered creator-field scan with exact
    /// short-circuit, an independent description check, and a
    /// name-prominence fallback when neither fires.
    fn podcast_bonus(
        &self,
        fields: &PodcastFields,
        name_no_stop: &str,
        query: &NormalizedQuery,
    ) -> f64 {
        let cfg = &self.config;
        let qs = query.without_stopwords.as_str();
        let mut bonus = 0.0;

        let mut exact = false;
        let mut partial = false;
        for field in fields.creator_fields().into_iter().flatten() {
            let field_no_stop = normalize_no_stopwords(field);
            if field_no_stop.is_empty() {
                continue;
            }
            if field_no_stop == qs {
                exact = true;
                break;
            }
            if field_no_stop.contains(qs) {
                partial = true;
            }
        }
        if exact {
            bonus += cfg.creator_exact_bonus;
        } else if partial {
            bonus += cfg.creator_partial_bonus;
        }

        if let Some(description) = &fields.description {
            let description = normalize(description);
            if !description.is_empty() && description.contains(qs) {
                bonus += cfg.description_contains_bonus;
            }
        }

        if bonus == 0.0 && name_no_stop.contains(qs) {
            // No metadata signal; fall back to how prominently the query
            // figures in the name itself
            if query.is_multi_word() {
                let ratio =
                    qs.chars().count() as f64 / name_no_stop.chars().count().max(1) as f64;
                bonus = if ratio >= 0.5 {
                    cfg.creator_exact_bonus
                } else if ratio >= 0.3 {
                    cfg.creator_partial_bonus + cfg.prominence_mid_boost
                } else {
                    cfg.creator_partial_bonus
                };
            } else {
                bonus = cfg.description_contains_bonus;
            }
        }

        bonus
    }

    /// Library and favorite bonuses, independent of the textual tiers.
    fn status_bonus(&self, item: &MediaItem) -> f64 {
        let cfg = &self.config;
        let mut bonus = 0.0;

        if let MediaKind::Album(fields) = &item.kind {
            if fields.in_library {
                bonus += cfg.library_bonus;
            }
        }
        if item.favorite {
            bonus += cfg.favorite_bonus;
        }

        bonus
    }
}
