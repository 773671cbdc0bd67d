//! Per-frame cost of dirty rectangle tracking
//!
//! The tracker runs inside the render loop, so every pattern here should stay
//! well under a microsecond per `add`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dirty_core::{DirtyRects, FixupMode, Rect};

/// Deterministic pseudo-random rectangles on a 1280x720 surface
fn scattered_rects(count: usize, seed: u32) -> Vec<Rect> {
    let mut state = seed;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    (0..count)
        .map(|_| {
            let x = i32::try_from(next() % 1280).unwrap_or_default();
            let y = i32::try_from(next() % 720).unwrap_or_default();
            Rect::new(x, y, 8 + next() % 120, 8 + next() % 60)
        })
        .collect()
}

/// Non-overlapping cells, the common case of independent widgets
fn grid_rects(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let i = i32::try_from(i).unwrap_or_default();
            Rect::new((i % 16) * 80, (i / 16) * 45, 40, 20)
        })
        .collect()
}

fn bench_add_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_frame");

    let patterns = [
        ("grid", grid_rects(64)),
        ("scattered", scattered_rects(64, 0x9E37_79B9)),
    ];

    for (name, rects) in &patterns {
        for mode in [FixupMode::FirstEntry, FixupMode::Pairwise] {
            group.bench_with_input(
                BenchmarkId::new(format!("{name}/{mode:?}"), rects.len()),
                rects,
                |b, rects| {
                    b.iter(|| {
                        let mut dirty = DirtyRects::<10>::with_mode(mode);
                        for rect in rects {
                            dirty.add(black_box(*rect));
                        }
                        black_box(dirty.redraw_area())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity");
    let rects = scattered_rects(128, 0x2545_F491);

    macro_rules! bench_cap {
        ($cap:literal) => {
            group.bench_function(BenchmarkId::from_parameter($cap), |b| {
                b.iter(|| {
                    let mut dirty = DirtyRects::<$cap>::new();
                    for rect in &rects {
                        dirty.add(black_box(*rect));
                    }
                    black_box(dirty.len())
                });
            });
        };
    }

    bench_cap!(4);
    bench_cap!(10);
    bench_cap!(32);

    group.finish();
}

fn bench_frame_cycle(c: &mut Criterion) {
    let rects = grid_rects(8);

    c.bench_function("frame_cycle_take", |b| {
        let mut dirty: DirtyRects = DirtyRects::new();
        b.iter(|| {
            for rect in &rects {
                dirty.add(*rect);
            }
            black_box(dirty.take())
        });
    });
}

criterion_group!(benches, bench_add_patterns, bench_capacity, bench_frame_cycle);
criterion_main!(benches);
