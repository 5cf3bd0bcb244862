//! Batch ranking with optional parallelism.
//!
//! The scorer itself ranks nothing; these helpers score a whole candidate
//! list against one query and sort it, which is what the search screen
//! actually consumes.

use serde::Serialize;

use crate::media::MediaItem;
use crate::normalize::NormalizedQuery;
use crate::scorer::SearchScorer;

/// One scored candidate, borrowing the item it ranks.
#[derive(Debug, Clone, Serialize)]
pub struct RankedItem<'a> {
    /// The candidate item.
    pub item: &'a MediaItem,
    /// Relevance score (higher is better).
    pub score: f64,
}

/// Scores every candidate against the query and sorts descending by
/// score.
///
/// The query is normalized once and shared across candidates; scoring is
/// parallel under the `parallel` feature. Ties keep their original order,
/// preserving whatever ordering the upstream search returned.
///
/// # Example
/// ```
/// use encore_search::{rank, MediaItem, SearchScorer};
///
/// let scorer = SearchScorer::default();
/// let items = vec![
///     MediaItem::artist("Pink Flyod"),
///     MediaItem::artist("Pink Floyd"),
/// ];
///
/// let ranked = rank(&scorer, &items, "pink floyd");
/// assert_eq!(ranked[0].item.name, "Pink Floyd");
/// ```
pub fn rank<'a>(scorer: &SearchScorer, items: &'a [MediaItem], query: &str) -> Vec<RankedItem<'a>> {
    let query = NormalizedQuery::new(query);

    #[cfg(feature = "parallel")]
    let mut ranked: Vec<RankedItem<'a>> = {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| RankedItem {
                item,
                score: scorer.score_with_query(item, &query),
            })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut ranked: Vec<RankedItem<'a>> = items
        .iter()
        .map(|item| RankedItem {
            item,
            score: scorer.score_with_query(item, &query),
        })
        .collect();

    // Stable sort keeps the upstream order for equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Like [`rank`], truncated to the `max_results` best candidates.
pub fn rank_top<'a>(
    scorer: &SearchScorer,
    items: &'a [MediaItem],
    query: &str,
    max_results: usize,
) -> Vec<RankedItem<'a>> {
    let mut ranked = rank(scorer, items, query);
    ranked.truncate(max_results);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<MediaItem> {
        vec![
            MediaItem::artist("Pink Flyod"),
            MediaItem::album("The Wall", "Pink Floyd").with_in_library(true),
            MediaItem::artist("Pink Floyd").with_favorite(true),
            MediaItem::artist("Mozart"),
        ]
    }

    #[test]
    fn test_rank_orders_descending() {
        let scorer = SearchScorer::default();
        let items = candidates();
        let ranked = rank(&scorer, &items, "pink floyd");

        assert_eq!(ranked.len(), items.len());
        for window in ranked.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
        assert_eq!(ranked[0].item.name, "Pink Floyd");
        assert_eq!(ranked[1].item.name, "The Wall");
        assert_eq!(ranked[2].item.name, "Pink Flyod");
        assert_eq!(ranked[3].item.name, "Mozart");
    }

    #[test]
    fn test_rank_empty_query_scores_all_zero() {
        let scorer = SearchScorer::default();
        let items = candidates();
        let ranked = rank(&scorer, &items, "  ");
        assert!(ranked.iter().all(|r| r.score == 0.0));
        // Upstream order untouched when every score ties
        let names: Vec<&str> = ranked.iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["Pink Flyod", "The Wall", "Pink Floyd", "Mozart"]);
    }

    #[test]
    fn test_rank_ties_keep_original_order() {
        let scorer = SearchScorer::default();
        let items = vec![
            MediaItem::artist("Ramones"),
            MediaItem::artist("Ramones"),
            MediaItem::artist("Ramones"),
        ];
        let ranked = rank(&scorer, &items, "ramones");
        let first = items.first().map(|i| i as *const MediaItem);
        assert_eq!(ranked.first().map(|r| r.item as *const MediaItem), first);
    }

    #[test]
    fn test_rank_top_truncates() {
        let scorer = SearchScorer::default();
        let items = candidates();
        let ranked = rank_top(&scorer, &items, "pink floyd", 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].item.name, "Pink Floyd");
    }

    #[test]
    fn test_rank_empty_candidate_list() {
        let scorer = SearchScorer::default();
        assert!(rank(&scorer, &[], "pink floyd").is_empty());
    }
}
