//! Benchmarks for the CPU side of a frame: motion update and draw-list
//! recording.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use motes::{DrawList, Mode, Session, SessionConfig};

fn seeded(count: usize, mode: Mode, edge_probability: f32) -> Session {
    Session::new(SessionConfig {
        particle_count: count,
        seed: Some(7),
        initial_mode: mode,
        edge_probability,
        ..Default::default()
    })
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for mode in [Mode::Random, Mode::Wave, Mode::Sphere, Mode::Pulse] {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            let mut session = seeded(10_000, mode, 0.0);
            b.iter(|| session.advance())
        });
    }

    group.finish();
}

fn bench_draw_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_frame");

    group.bench_function("dots_only", |b| {
        let mut session = seeded(10_000, Mode::Random, 0.0);
        let mut list = DrawList::new();
        b.iter(|| {
            list.clear();
            session.draw_frame(&mut list);
            black_box(list.points.len())
        })
    });

    // Every pair is visited each frame; the first frame also samples them.
    for count in [250usize, 1000] {
        group.bench_with_input(BenchmarkId::new("graph", count), &count, |b, &count| {
            let mut session = seeded(count, Mode::Graph, 0.001);
            let mut list = DrawList::new();
            b.iter(|| {
                list.clear();
                session.draw_frame(&mut list);
                black_box(list.segment_count())
            })
        });
    }

    group.finish();
}

fn bench_reinitialize(c: &mut Criterion) {
    c.bench_function("reinitialize_1000", |b| {
        let mut session = seeded(1000, Mode::Wave, 0.0);
        b.iter(|| session.reinitialize())
    });
}

criterion_group!(benches, bench_advance, bench_draw_frame, bench_reinitialize);
criterion_main!(benches);
