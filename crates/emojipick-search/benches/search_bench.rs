//! Benchmarks for fuzzy emoji search.
//!
//! Run with: `cargo bench --package emojipick-search --bench search_bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use emojipick_core::Dataset;
use emojipick_search::{FuzzyScorer, SearchIndex};
use std::hint::black_box;

fn bench_search(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    let index = SearchIndex::new(&dataset);

    let mut group = c.benchmark_group("search");
    for query in ["", "face", "thumbs up", "watermlon", "no such emoji anywhere"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, q| {
            b.iter(|| black_box(index.search(black_box(q))));
        });
    }
    group.finish();
}

fn bench_scorer(c: &mut Criterion) {
    let scorer = FuzzyScorer::new();
    let text = "smiling face with smiling eyes and a very long description";
    c.bench_function("scorer/long_text", |b| {
        b.iter(|| black_box(scorer.score(black_box("smilng"), black_box(text))));
    });
}

criterion_group!(benches, bench_search, bench_scorer);
criterion_main!(benches);
