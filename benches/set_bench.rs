//! Benchmarks for Set.
//!
//! Compares zeroset's `Set` against the standard library `HashSet` for
//! building, membership, set algebra and JSON encoding.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashSet;
use std::hint::black_box;
use zeroset::{Set, difference, intersection, union};

// =============================================================================
// Construction
// =============================================================================

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_build");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                set.add_seq(0..size);
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let set: HashSet<i32> = (0..size).collect();
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Membership
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_contains");

    for size in [100, 1000, 10000] {
        let set: Set<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for probe in 0..size * 2 {
                    if set.contains(&probe) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Set Algebra
// =============================================================================

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra");

    for size in [100, 1000, 10000] {
        let left: Set<i32> = (0..size).collect();
        let right: Set<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(union([&left, &right])));
        });

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(intersection([&left, &right])));
            },
        );

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(difference(left.clone(), [&right])));
        });
    }

    group.finish();
}

// =============================================================================
// JSON
// =============================================================================

fn benchmark_json(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_json");

    for size in [100, 1000, 10000] {
        let set: Set<i32> = (0..size).collect();
        let json = serde_json::to_string(&set).unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), &size, |bencher, _| {
            bencher.iter(|| black_box(serde_json::to_string(&set).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("deserialize", size), &json, |bencher, json| {
            bencher.iter(|| {
                let restored: Set<i32> = serde_json::from_str(json).unwrap();
                black_box(restored)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_build,
    benchmark_contains,
    benchmark_algebra,
    benchmark_json,
);
criterion_main!(benches);
