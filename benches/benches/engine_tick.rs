// Copyright 2025 the Springlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use springlist_engine::{Engine, EngineConfig};
use springlist_input::event::{InputBatch, InputKind, RawInput};
use springlist_input::scheduler::FrameContext;
use springlist_motion::{MS_PER_ANIMATION_STEP, Spring};

const WIDTH: f64 = 1280.0;

fn tick(engine: &mut Engine<()>, now: f64, inputs: &[RawInput]) -> bool {
    let batch = InputBatch::from_inputs(inputs.iter().copied());
    let ctx = FrameContext {
        now,
        batch: &batch,
        animation_steps: 3,
        ms_per_step: MS_PER_ANIMATION_STEP,
    };
    engine.advance(&ctx, WIDTH).still_animating
}

/// An engine with `n` rows, settled into its resting layout.
fn settled(n: u32) -> Engine<()> {
    let config = EngineConfig::default().with_item_count(n);
    let Ok(mut engine) = Engine::new(config, WIDTH, |_| ()) else {
        panic!("default config is valid");
    };
    let mut now = 0.0;
    while tick(&mut engine, now, &[]) {
        now += 16.0;
    }
    engine
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");
    for &n in &[5_u32, 50, 500] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("initial_layout_n{n}"), |b| {
            b.iter_batched(
                || Engine::new(EngineConfig::default().with_item_count(n), WIDTH, |_| ()),
                |engine| {
                    let Ok(mut engine) = engine else { return };
                    let mut now = 0.0;
                    let mut frames = 0_u32;
                    while tick(&mut engine, now, &[]) {
                        now += 16.0;
                        frames += 1;
                    }
                    black_box(frames);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &n in &[5_u32, 50, 500] {
        let base = settled(n);
        let (x, top) = base
            .items()
            .get(0)
            .map_or((0.0, 0.0), |i| (i.x.pos + 10.0, i.y.pos + 5.0));
        let bottom = base
            .items()
            .iter()
            .last()
            .map_or(top, |i| i.y.dest + i.size_y);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("sweep_first_row_to_end_n{n}"), |b| {
            b.iter_batched(
                || base.clone(),
                |mut engine| {
                    let mut now = 10_000.0;
                    tick(
                        &mut engine,
                        now,
                        &[RawInput::new(InputKind::PointerDown, x, top)],
                    );
                    for i in 1..=60 {
                        now += 16.0;
                        let y = top + (bottom - top) * f64::from(i) / 60.0;
                        tick(
                            &mut engine,
                            now,
                            &[RawInput::new(InputKind::MouseMove, x, y)],
                        );
                    }
                    black_box(engine.items().position(springlist_engine::ItemId(0)));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_spring(c: &mut Criterion) {
    c.bench_function("spring_step_1000", |b| {
        b.iter(|| {
            let mut s = Spring::with_params(0.0, black_box(100.0), 0.0, 225.0, 25.0);
            s.step_n(1000);
            black_box(s.pos)
        })
    });
}

criterion_group!(benches, bench_settle, bench_drag, bench_spring);
criterion_main!(benches);
