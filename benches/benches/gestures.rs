// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for momentum decay and gesture normalization.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use understory_event_state::momentum::{MomentumConfig, MomentumTracker};
use understory_gesture::{GestureConfig, GestureNormalizer, InputEvent, PointerInput};

fn flicked_tracker() -> MomentumTracker {
    let mut tracker =
        MomentumTracker::new(MomentumConfig::default()).expect("default configuration is valid");
    tracker.on_down(1, Point::new(0.0, 0.0), 0);
    tracker.on_move(1, Point::new(400.0, 250.0), 50);
    tracker.on_up(1, 50);
    tracker
}

fn bench_momentum_decay(c: &mut Criterion) {
    c.bench_function("event_state/momentum_decay", |b| {
        b.iter_batched(
            flicked_tracker,
            |mut tracker| {
                let mut ticks = 0_u32;
                while tracker.tick().is_some() {
                    ticks += 1;
                }
                black_box(ticks)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_drag_frames(c: &mut Criterion) {
    c.bench_function("gesture/drag_frames", |b| {
        b.iter_batched(
            || GestureNormalizer::new(GestureConfig::default()).expect("default configuration is valid"),
            |mut gestures| {
                gestures.handle(&InputEvent::PointerDown(PointerInput::primary(1, Point::ZERO, 0)));
                for i in 1..=60_i32 {
                    let p = Point::new(f64::from(i) * 4.0, f64::from(i) * 2.0);
                    gestures.handle(&InputEvent::PointerMove(PointerInput::primary(
                        1,
                        p,
                        i64::from(i) * 16,
                    )));
                    black_box(gestures.on_frame());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_momentum_decay, bench_drag_frames);
criterion_main!(benches);
