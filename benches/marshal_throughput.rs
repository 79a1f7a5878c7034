//! Marshalling throughput benchmarks
//!
//! Measures end-to-end rendering of nested records with:
//! - Value sizes (1, 16, 256 records)
//! - Cold vs warm dispatch cache
//! - Sequential vs parallel batches
//!
//! Run benchmarks: `cargo bench --bench marshal_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mosaic::{DispatchCache, Marshaller};
use serde::Serialize;
use std::collections::BTreeMap;
use std::hint::black_box;
use std::sync::Arc;

#[derive(Serialize, Clone)]
struct Inner {
    label: String,
    ratio: f32,
}

#[derive(Serialize, Clone)]
struct Item {
    id: i64,
    active: bool,
    name: String,
    score: f64,
    inner: Inner,
    buckets: BTreeMap<i32, Vec<i32>>,
}

fn generate_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            id: i as i64 * 7919 - 5000,
            active: i % 3 == 0,
            name: format!("item-{}", i),
            score: (i % 10) as f64 / 10.0,
            inner: Inner {
                label: "nested".to_string(),
                ratio: 0.5,
            },
            buckets: (1..=3).map(|k| (k, (0..k).collect())).collect(),
        })
        .collect()
}

fn bench_value_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_size");
    for count in [1usize, 16, 256] {
        let items = generate_items(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            let marshaller = Marshaller::new();
            b.iter(|| marshaller.marshal(black_box(items), 900.0))
        });
    }
    group.finish();
}

fn bench_dispatch_cache(c: &mut Criterion) {
    let items = generate_items(16);
    let mut group = c.benchmark_group("dispatch_cache");

    group.bench_function("cold", |b| {
        b.iter(|| {
            let marshaller = Marshaller::new().with_cache(Arc::new(DispatchCache::new()));
            marshaller.marshal(black_box(&items), 900.0)
        })
    });

    let warm = Marshaller::new().with_cache(Arc::new(DispatchCache::new()));
    let _ = warm.marshal(&items, 900.0);
    group.bench_function("warm", |b| b.iter(|| warm.marshal(black_box(&items), 900.0)));

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let items = generate_items(64);
    let marshaller = Marshaller::new();
    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(items.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            items
                .iter()
                .map(|item| marshaller.marshal(item, 300.0))
                .collect::<Vec<_>>()
        })
    });
    group.bench_function("marshal_batch", |b| {
        b.iter(|| marshaller.marshal_batch(black_box(&items), 300.0))
    });

    group.finish();
}

criterion_group!(benches, bench_value_size, bench_dispatch_cache, bench_batch);
criterion_main!(benches);
