//! Benchmark suite for animation playback
//!
//! This benchmark measures the per-frame cost of an animation player and the
//! one-off cost of resolving an animation set.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench player_step

use std::{hint::black_box, rc::Rc};

use bionicblue_ani2d::{
	geometry::{Anchor, Vec2},
	player::{AnimationPlayer, Canvas, FrameRecorder},
	surface::Color,
};
use bionicblue_benches::{LOOP_ANIMATION, REVERSED_ANIMATION, synthetic_data, synthetic_source};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Benchmark one draw call, positioning and recording every part
fn bench_draw(c: &mut Criterion) {
	let mut group = c.benchmark_group("player_draw");

	for parts in [1usize, 4, 16] {
		let data = Rc::new(synthetic_data(parts, 8));
		let mut player =
			AnimationPlayer::from_data(data, LOOP_ANIMATION, Anchor::MidBottom, Vec2::new(160, 120))
				.unwrap();
		let mut recorder = FrameRecorder::new();

		group.throughput(Throughput::Elements(parts as u64));
		group.bench_with_input(BenchmarkId::new("record", parts), &parts, |b, _| {
			b.iter(|| {
				recorder.clear();
				player.draw(&mut recorder);
				black_box(recorder.blits().len())
			});
		});
	}

	let data = Rc::new(synthetic_data(4, 8));
	let mut player =
		AnimationPlayer::from_data(data, LOOP_ANIMATION, Anchor::Center, Vec2::new(32, 32)).unwrap();
	let mut canvas = Canvas::new(64, 64, Color::new(0, 0, 0));

	group.bench_function("canvas", |b| {
		b.iter(|| {
			canvas.clear();
			player.draw(&mut canvas);
		});
	});

	group.finish();
}

/// Benchmark switching back and forth, which restores every track
fn bench_switch(c: &mut Criterion) {
	let mut group = c.benchmark_group("player_switch");
	let data = Rc::new(synthetic_data(8, 16));
	let mut player =
		AnimationPlayer::from_data(data, LOOP_ANIMATION, Anchor::Center, Vec2::ZERO).unwrap();

	group.bench_function("switch", |b| {
		b.iter(|| {
			player.switch_animation(black_box(REVERSED_ANIMATION)).unwrap();
			player.switch_animation(black_box(LOOP_ANIMATION)).unwrap();
		});
	});

	group.finish();
}

/// Benchmark resolution of a whole animation set
fn bench_resolve(c: &mut Criterion) {
	let mut group = c.benchmark_group("anim_resolve");

	for parts in [4usize, 16] {
		let source = synthetic_source(parts, 16);
		group.bench_with_input(BenchmarkId::new("resolve", parts), &source, |b, source| {
			b.iter(|| black_box(source.resolve(&Default::default()).unwrap()));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_draw, bench_switch, bench_resolve);
criterion_main!(benches);
