use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use horae::{CoreIndex, Interval};
use std::hint::black_box;

/// Builds an index with `num_vertices` vertices, each tracking 4 core
/// orders of `intervals_per_level` disjoint windows.
fn generate_index(num_vertices: usize, intervals_per_level: usize) -> CoreIndex {
    let data = (0..num_vertices)
        .map(|v| {
            (0..4)
                .map(|level| {
                    (0..intervals_per_level)
                        .map(|i| {
                            let ts = (i as u64) * 10 + (v % 3) as u64 + level as u64;
                            Interval::new(ts, ts + 5)
                        })
                        .collect()
                })
                .collect()
        })
        .collect();
    CoreIndex::new(data).expect("generated index is canonical")
}

fn bench_single_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/single");

    for intervals in [16, 256, 4096].iter() {
        let index = generate_index(8, *intervals);
        let mid = (*intervals as u64) * 5;

        group.bench_with_input(
            BenchmarkId::from_parameter(intervals),
            intervals,
            |b, _| {
                b.iter(|| index.search(black_box(3), black_box(4), black_box(mid), black_box(mid + 3)));
            },
        );
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("search/scan");

    for vertices in [100, 1_000, 10_000].iter() {
        let index = generate_index(*vertices, 64);

        group.bench_with_input(
            BenchmarkId::from_parameter(vertices),
            vertices,
            |b, _| {
                b.iter(|| index.search_all(black_box(2), black_box(120), black_box(123)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_search, bench_scan);
criterion_main!(benches);
