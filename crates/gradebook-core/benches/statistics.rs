use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::statistics;
use gradebook_core::store::StudentStore;

fn full_store() -> StudentStore {
    let mut store = StudentStore::with_capacity(100);
    for i in 0..100u32 {
        // Spread scores across all four bands.
        let score = (i as f64 * 7.3) % 100.0;
        store.add(i, "Benchmark Student", score).unwrap();
    }
    store
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics_compute");

    let store = full_store();
    group.bench_function("100_records", |b| {
        b.iter(|| statistics::compute(black_box(store.records())))
    });

    let mut small = StudentStore::new();
    small.add(1, "Solo", 72.5).unwrap();
    group.bench_function("1_record", |b| {
        b.iter(|| statistics::compute(black_box(small.records())))
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_score");

    let store = full_store();
    group.bench_function("100_records", |b| {
        b.iter_batched(
            || store.clone(),
            |mut s| {
                s.sort_by_score_descending();
                s
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_sort);
criterion_main!(benches);
