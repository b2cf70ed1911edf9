//! Benchmarks for splitting text into newspaper regions.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use broadsheet::document::masthead::DEFAULT_MARKDOWN;
use broadsheet::document::segment;

fn bench_segment_sample(c: &mut Criterion) {
    c.bench_function("segment_sample", |b| {
        b.iter(|| segment(black_box(DEFAULT_MARKDOWN)))
    });
}

fn bench_segment_long(c: &mut Criterion) {
    let story = include_str!("../tests/fixtures/front_page.md");
    let long = story.repeat(200);

    c.bench_function("segment_long", |b| b.iter(|| segment(black_box(&long))));
}

criterion_group!(benches, bench_segment_sample, bench_segment_long);
criterion_main!(benches);
