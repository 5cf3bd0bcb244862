//! Multi-tier search relevance scoring for Encore.
//!
//! This crate provides:
//! - Tiered relevance scoring over heterogeneous media items
//! - Unicode-aware text normalization with stopword handling
//! - Jaro-Winkler fuzzy matching and bigram overlap for typo tolerance
//! - Batch ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! The engine is a pure function over in-memory strings: the caller
//! supplies a raw query and candidate items already fetched from the
//! media server, and gets back a per-item score (or a sorted list via
//! [`rank`]). Fetching, debouncing, and pagination stay with the caller.
//!
//! # Example
//!
//! ```
//! use encore_search::{rank, MediaItem, SearchScorer};
//!
//! let scorer = SearchScorer::default();
//! let candidates = vec![
//!     MediaItem::album("The Wall", "Pink Floyd"),
//!     MediaItem::artist("Pink Floyd").with_favorite(true),
//! ];
//!
//! let ranked = rank(&scorer, &candidates, "pink floyd");
//! assert_eq!(ranked[0].item.name, "Pink Floyd");
//! assert!(ranked[0].score > ranked[1].score);
//! ```

mod batch;
mod config;
mod error;
pub mod fuzzy;
mod media;
pub mod ngram;
pub mod normalize;
mod scorer;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{rank, rank_top, RankedItem};
pub use config::ScoringConfig;
pub use error::{Result, SearchError};
pub use media::{AlbumFields, AudiobookFields, MediaItem, MediaKind, PodcastFields, TrackFields};
pub use normalize::NormalizedQuery;
pub use scorer::SearchScorer;
