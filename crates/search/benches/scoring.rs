use criterion::{black_box, criterion_group, criterion_main, Criterion};
use encore_search::{rank, MediaItem, NormalizedQuery, SearchScorer};

const ARTIST_NAMES: &[&str] = &[
    "Pink Floyd",
    "The Beatles",
    "Ramones",
    "Sigur Rós",
    "Motörhead",
    "Queen",
    "The Rolling Stones",
    "Led Zeppelin",
    "Fleetwood Mac",
    "Tangerine Dream",
];

/// A result page the size the media server actually returns.
fn candidate_set() -> Vec<MediaItem> {
    let mut items = Vec::new();
    for name in ARTIST_NAMES {
        items.push(MediaItem::artist(*name));
        for suffix in ["Live", "Anthology", "Greatest Hits", "Sessions", "Rarities"] {
            items.push(MediaItem::album(format!("{name} {suffix}"), *name));
            items.push(MediaItem::track(
                format!("{suffix} Intro"),
                *name,
                Some(format!("{name} {suffix}")),
            ));
        }
    }
    items
}

fn bench_score_single(c: &mut Criterion) {
    let scorer = SearchScorer::default();
    let query = NormalizedQuery::new("pink floyd");
    let item = MediaItem::album("The Dark Side of the Moon", "Pink Floyd");

    c.bench_function("score_single_item", |b| {
        b.iter(|| scorer.score_with_query(black_box(&item), black_box(&query)))
    });
}

fn bench_score_typo_query(c: &mut Criterion) {
    let scorer = SearchScorer::default();
    // Falls through the exact tiers into fuzzy and n-gram work
    let query = NormalizedQuery::new("pnik floyd");
    let item = MediaItem::artist("Pink Floyd");

    c.bench_function("score_typo_query", |b| {
        b.iter(|| scorer.score_with_query(black_box(&item), black_box(&query)))
    });
}

fn bench_rank_result_page(c: &mut Criterion) {
    let scorer = SearchScorer::default();
    let items = candidate_set();

    c.bench_function("rank_result_page", |b| {
        b.iter(|| rank(black_box(&scorer), black_box(&items), black_box("beatles live")))
    });
}

fn bench_query_normalization(c: &mut Criterion) {
    c.bench_function("normalize_query", |b| {
        b.iter(|| NormalizedQuery::new(black_box("The Dárk Side of the Möon (Remastered)")))
    });
}

criterion_group!(
    benches,
    bench_score_single,
    bench_score_typo_query,
    bench_rank_result_page,
    bench_query_normalization
);
criterion_main!(benches);
