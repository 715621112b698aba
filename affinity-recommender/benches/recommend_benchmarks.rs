//! Criterion benchmarks for the recommender.
//!
//! Measures a full recommendation query across matrix sizes (500, 2 000 and
//! 8 000 users) to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package affinity-recommender
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;
use std::time::Duration;

use affinity_recommender::Recommender;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};


use bench_support::{BENCHMARK_SEED, generate_matrix};

/// Matrix sizes to benchmark, in users.
const USER_COUNTS: &[u64] = &[500, 2_000, 8_000];

/// Size of the item catalogue.
const ITEM_COUNT: u64 = 1_000;

/// Target user for every query.
const TARGET_USER: u64 = 0;

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    group.measurement_time(Duration::from_secs(10));

    let recommender = Recommender::new();
    for &users in USER_COUNTS {
        // Pre-generate inputs outside the benchmark loop.
        let matrix = generate_matrix(users, ITEM_COUNT, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(users));
        group.bench_with_input(BenchmarkId::from_parameter(users), &matrix, |b, matrix| {
            b.iter(|| {
                recommender
                    .recommend(black_box(matrix), black_box(TARGET_USER))
                    .unwrap_or_default()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
