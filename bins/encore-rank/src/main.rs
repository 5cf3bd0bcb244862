//! encore-rank: relevance tuning CLI for the Encore search engine.
//!
//! Feeds JSON candidate lists through the same scoring pipeline the app
//! uses, so weight and threshold changes can be checked against real
//! library data before shipping them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use encore_search::{
    fuzzy, ngram, normalize, rank, rank_top, MediaItem, NormalizedQuery, ScoringConfig,
    SearchScorer,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "encore-rank")]
#[command(about = "Relevance scoring harness for Encore media search")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a JSON array of candidate items against a query
    Rank {
        /// Path to a JSON array of media items
        path: PathBuf,
        /// Search query
        #[arg(short, long)]
        query: String,
        /// Maximum results to print (0 for all)
        #[arg(long, default_value_t = 0)]
        max: usize,
        /// Scoring config overrides (JSON object, partial fields allowed)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single item against a query
    Score {
        /// Path to a JSON media item
        path: PathBuf,
        /// Search query
        #[arg(short, long)]
        query: String,
        /// Scoring config overrides (JSON object, partial fields allowed)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the normalized forms of a query
    Explain {
        /// Search query
        query: String,
    },

    /// Compare two strings with the fuzzy and bigram metrics
    Similarity {
        a: String,
        b: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("encore_search=debug,encore_rank=debug")
            .init();
    }

    match cli.command {
        Commands::Rank {
            path,
            query,
            max,
            config,
            json,
        } => {
            let scorer = load_scorer(config.as_deref())?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading candidates from {}", path.display()))?;
            let items: Vec<MediaItem> =
                serde_json::from_str(&raw).context("parsing candidate JSON array")?;

            let ranked = if max > 0 {
                rank_top(&scorer, &items, &query, max)
            } else {
                rank(&scorer, &items, &query)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                for entry in &ranked {
                    println!(
                        "{:>8.2}  {:<16} {}",
                        entry.score,
                        entry.item.kind.label(),
                        entry.item.name
                    );
                }
                println!("\n{} candidates ranked", ranked.len());
            }
        }

        Commands::Score {
            path,
            query,
            config,
        } => {
            let mut scorer = load_scorer(config.as_deref())?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading item from {}", path.display()))?;
            let item: MediaItem = serde_json::from_str(&raw).context("parsing item JSON")?;

            println!("{:.2}", scorer.score_item(&item, &query));
        }

        Commands::Explain { query } => {
            let normalized = NormalizedQuery::new(&query);
            println!("normalized:         {:?}", normalized.normalized);
            println!("without stopwords:  {:?}", normalized.without_stopwords);
            println!("tokens:             {:?}", normalized.tokens_no_stop);
            println!("multi-word:         {}", normalized.is_multi_word());
            if normalized.is_empty() {
                println!("(empty query: everything scores 0)");
            }
        }

        Commands::Similarity { a, b } => {
            let a_norm = normalize::normalize_no_stopwords(&a);
            let b_norm = normalize::normalize_no_stopwords(&b);
            println!("fuzzy:   {:.4}", fuzzy::similarity(&a_norm, &b_norm));
            println!("bigram:  {:.4}", ngram::bigram_similarity(&a_norm, &b_norm));
        }
    }

    Ok(())
}

/// Builds a scorer from an optional JSON config file; missing fields fall
/// back to the tuned defaults.
fn load_scorer(config: Option<&std::path::Path>) -> Result<SearchScorer> {
    match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading scoring config from {}", path.display()))?;
            let config: ScoringConfig =
                serde_json::from_str(&raw).context("parsing scoring config")?;
            Ok(SearchScorer::new(config)?)
        }
        None => Ok(SearchScorer::default()),
    }
}
