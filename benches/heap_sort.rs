//! Throughput of `heap_sort` and of raw insert/extract cycles.
//!
//! ```bash
//! cargo bench --bench heap_sort
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kv_min_heap::{heap_sort, MinHeap};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_keys(len: usize) -> Vec<u32> {
    let mut rng = XorShiftRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");
    for &size in &SIZES {
        let input = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &input, |b, input| {
            b.iter(|| {
                let mut list = input.clone();
                heap_sort(black_box(&mut list));
                list
            });
        });
        group.bench_with_input(BenchmarkId::new("std_sort_unstable", size), &input, |b, input| {
            b.iter(|| {
                let mut list = input.clone();
                black_box(&mut list).sort_unstable();
                list
            });
        });
    }
    group.finish();
}

fn bench_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract");
    for &size in &SIZES {
        let input = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut heap = MinHeap::with_capacity(input.len());
                for &key in input {
                    heap.insert(key, ());
                }
                while let Some(entry) = heap.extract_min_entry() {
                    black_box(entry);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heap_sort, bench_insert_extract);
criterion_main!(benches);
