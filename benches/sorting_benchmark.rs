use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use shelfsort::prelude::*;
use std::hint::black_box;

fn random_records(count: usize, distinct_authors: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    let authors: Vec<String> = (0..distinct_authors)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect();

    (0..count)
        .map(|i| {
            let author = &authors[rng.random_range(0..authors.len())];
            Record::new(format!("Title {i}"), author.as_str())
        })
        .collect()
}

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("Record Sort");
    group.sample_size(10);

    let records = random_records(10_000, 2_000);

    group.bench_function("sort_records (merge)", |b| {
        b.iter(|| sort_records(black_box(&records)))
    });

    group.bench_function("merge_sort (indices)", |b| {
        b.iter(|| merge_sort(black_box(&records)))
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort_by (stable)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| data.sort_by(|x, y| x.author_key().cmp(y.author_key())),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_heavy_ties(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heavy Ties");
    group.sample_size(10);

    // Few authors, many books each.
    let records = random_records(10_000, 8);

    group.bench_function("sort_records (merge)", |b| {
        b.iter(|| sort_records(black_box(&records)))
    });

    group.bench_function("slice::sort_by (stable)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| data.sort_by(|x, y| x.author_key().cmp(y.author_key())),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_heavy_ties);
criterion_main!(benches);
