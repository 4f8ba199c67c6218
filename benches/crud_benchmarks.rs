use bst_map::OrderedMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;

const N: usize = 10_000;
// Sorted keys degrade the tree into a chain, so keep that case small.
const N_SORTED: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert_or_update(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_sorted(c: &mut Criterion) {
    let keys = ordered_keys(N_SORTED);
    let mut group = c.benchmark_group("insert_sorted");

    group.bench_function(BenchmarkId::new("OrderedMap", N_SORTED), |b| {
        b.iter(|| {
            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert_or_update(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N_SORTED), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Ok(&v) = map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bt_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || bt_map.clone(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let keys = random_keys(N);
    let map: OrderedMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("clone");

    group.bench_function(BenchmarkId::new("OrderedMap", N), |b| b.iter(|| map.clone()));
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| b.iter(|| bt_map.clone()));

    group.finish();
}

criterion_group!(insert_benches, bench_insert_random, bench_insert_sorted,);

criterion_group!(lookup_benches, bench_get_random,);

criterion_group!(remove_benches, bench_remove_random, bench_clone,);

criterion_main!(insert_benches, lookup_benches, remove_benches);
