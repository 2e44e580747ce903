//! Criterion benchmarks for the `SegmentSet` operations.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segset::{NoCache, Segment, SegmentSet};

/// linear multiplier for work done by benchmarks
const REPEAT: u32 = 1_000;

/// utility for constructing a set of `[4i, 4i+1]` segments for benches
fn build_striped_set(n: u32) -> SegmentSet<u32> {
	SegmentSet::from_segments((0..n).map(|i| Segment::new(4 * i, 4 * i + 1)))
		.expect("striped segments are valid")
}

fn bench_insert(c: &mut Criterion) {
	c.bench_function("insert_segment striped", |b| {
		b.iter(|| build_striped_set(black_box(REPEAT)))
	});
	c.bench_function("insert_segment merging", |b| {
		let set = build_striped_set(REPEAT);
		b.iter(|| {
			let mut set = set.clone();
			set.insert_segment(Segment::new(0, 4 * REPEAT)).expect("valid")
		})
	});
}

fn bench_count_less_than(c: &mut Criterion) {
	let set = build_striped_set(REPEAT);
	c.bench_function("count_less_than cached", |b| {
		b.iter(|| {
			for i in 0..REPEAT {
				black_box(set.count_less_than(black_box(4 * i + 1)));
			}
		})
	});

	let uncached: SegmentSet<u32, NoCache> =
		SegmentSet::from_segments(set.iter().copied()).expect("valid");
	c.bench_function("count_less_than uncached", |b| {
		b.iter(|| {
			for i in (0..REPEAT).step_by(50) {
				black_box(uncached.count_less_than(black_box(4 * i + 1)));
			}
		})
	});
}

fn bench_shift(c: &mut Criterion) {
	let set = build_striped_set(REPEAT);
	c.bench_function("shift_insert front", |b| {
		b.iter(|| {
			let mut set = set.clone();
			set.shift_insert(Segment::new(2, 3)).expect("no overflow");
			set
		})
	});
	c.bench_function("shift_erase front", |b| {
		b.iter(|| {
			let mut set = set.clone();
			set.shift_erase(Segment::new(0, 2)).expect("valid");
			set
		})
	});
	c.bench_function("erase_segment middle", |b| {
		b.iter(|| {
			let mut set = set.clone();
			set.erase_segment(Segment::new(REPEAT, 3 * REPEAT)).expect("valid")
		})
	});
}

fn bench_iter(c: &mut Criterion) {
	let set = build_striped_set(REPEAT);
	c.bench_function("values", |b| b.iter(|| set.values().count()));
	c.bench_function("cursor walk", |b| {
		b.iter(|| {
			let mut cursor = set.cursor_front();
			let mut steps = 0;
			while cursor.move_next() {
				steps += 1;
			}
			steps
		})
	});
}

criterion_group!(
	benches,
	bench_insert,
	bench_count_less_than,
	bench_shift,
	bench_iter
);
criterion_main!(benches);
