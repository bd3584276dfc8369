//! Benchmark suite for walking deques
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench deque_walk

use bionicblue_wdeque::{ProxiedDeque, WalkingDeque};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark single steps, the per-frame operation of every timing track
fn bench_walk(c: &mut Criterion) {
	let mut group = c.benchmark_group("wdeque_walk");

	for len in [4usize, 16, 256] {
		let mut deque = WalkingDeque::new(0..len).unwrap();
		group.bench_with_input(BenchmarkId::new("step", len), &len, |b, _| {
			b.iter(|| {
				deque.walk(black_box(1));
				black_box(*deque.front())
			});
		});

		let mut deque = WalkingDeque::new(0..len).unwrap();
		group.bench_with_input(BenchmarkId::new("restore", len), &len, |b, _| {
			b.iter(|| {
				deque.walk(black_box(3));
				deque.restore_walking();
				black_box(deque.total_walking())
			});
		});
	}

	group.finish();
}

/// Benchmark loop boundary queries
fn bench_loops(c: &mut Criterion) {
	let mut group = c.benchmark_group("wdeque_loops");
	let mut deque = WalkingDeque::new(0..12).unwrap();
	deque.walk(7);

	group.bench_function("peek_loops_no", |b| {
		b.iter(|| black_box(deque.peek_loops_no(black_box(1))));
	});
	group.bench_function("index_of_first", |b| {
		b.iter(|| black_box(deque.index_of_first()));
	});

	group.finish();
}

/// Benchmark source writes propagated to content views
fn bench_views(c: &mut Criterion) {
	let mut group = c.benchmark_group("wdeque_views");

	for views in [1usize, 8] {
		let mut proxied = ProxiedDeque::new(WalkingDeque::new(0..16).unwrap());
		for _ in 0..views {
			proxied.content_view();
		}

		group.bench_with_input(BenchmarkId::new("set", views), &views, |b, _| {
			b.iter(|| proxied.set(black_box(3), black_box(42)).unwrap());
		});
		group.bench_with_input(BenchmarkId::new("walk", views), &views, |b, _| {
			b.iter(|| proxied.walk(black_box(1)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_walk, bench_loops, bench_views);
criterion_main!(benches);
