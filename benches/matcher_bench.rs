//! Benchmarks for the page-scan path.
//!
//! Run with: cargo bench

use std::collections::HashSet;
use criterion::{criterion_group, criterion_main, Criterion};
use vocabmark_rs::{reduce, Matcher};

const PAGE: &str = "Researchers studied how the happiest children learned faster when \
    they played outside, stopping only to watch the birds fly over the running streams.";

// A few real entries padded out to a few hundred words.
fn vocabulary() -> Vec<String> {
    let words = [
        "study", "happy", "child", "learn", "fast", "play", "stop", "watch", "bird", "fly",
    ];
    words
        .iter()
        .map(|w| w.to_string())
        .chain((0..290).map(|i| format!("filler{}", i)))
        .collect()
}

fn bench_reduce(c: &mut Criterion) {
    c.bench_function("reduce", |b| b.iter(|| reduce("studying")));
}

fn bench_scan(c: &mut Criterion) {
    let matcher = Matcher::default();
    let words = vocabulary();
    let set: HashSet<String> = words.iter().cloned().collect();
    let index = matcher.index(&words);
    let tokens: Vec<&str> = PAGE.split_whitespace().collect();

    c.bench_function("is_member per page", |b| {
        b.iter(|| tokens.iter().filter(|t| matcher.is_member(&set, t)).count())
    });
    c.bench_function("index highlight per page", |b| b.iter(|| index.highlight(PAGE).len()));
}

criterion_group!(benches, bench_reduce, bench_scan);
criterion_main!(benches);
