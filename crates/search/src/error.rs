//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
///
/// Scoring itself never fails; the only failure surface is rejecting an
/// unusable [`ScoringConfig`](crate::ScoringConfig) at construction time.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Scoring weights violate the tier-dominance invariant
    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),
}
