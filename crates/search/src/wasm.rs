//! WASM bindings for the relevance engine.

use wasm_bindgen::prelude::*;

use crate::media::MediaItem;
use crate::scorer::SearchScorer;

/// Score a single media item against a query.
///
/// # Arguments
/// * `query` - Search query as typed by the user
/// * `item_json` - JSON object with `name`, `type`, and type-specific fields
///
/// # Returns
/// Relevance score (higher is better), or 0 if the item JSON is invalid
#[wasm_bindgen]
pub fn score_item(query: &str, item_json: &str) -> f64 {
    let item: MediaItem = match serde_json::from_str(item_json) {
        Ok(item) => item,
        Err(_) => return 0.0,
    };

    let mut scorer = SearchScorer::default();
    scorer.score_item(&item, query)
}

/// Rank media items and return sorted results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of media items
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of `{item, score}` objects sorted by descending score
#[wasm_bindgen]
pub fn search_items(query: &str, items_json: &str, max_results: usize) -> String {
    let items: Vec<MediaItem> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let scorer = SearchScorer::default();
    let ranked = if max_results > 0 {
        crate::batch::rank_top(&scorer, &items, query, max_results)
    } else {
        crate::batch::rank(&scorer, &items, query)
    };

    serde_json::to_string(&ranked).unwrap_or_else(|_| "[]".to_string())
}

/// Fuzzy similarity between two raw strings (threshold tuning aid).
#[wasm_bindgen]
pub fn fuzzy_similarity(a: &str, b: &str) -> f64 {
    crate::fuzzy::similarity(a, b)
}

/// Bigram overlap between two raw strings (threshold tuning aid).
#[wasm_bindgen]
pub fn bigram_overlap(a: &str, b: &str) -> f64 {
    crate::ngram::bigram_similarity(a, b)
}
