// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for momentum coasting in `understory_event_state`.
//!
//! These check that a flick keeps moving in its direction, slows down
//! geometrically, and always comes to rest.

use kurbo::{Point, Vec2};
use proptest::prelude::*;
use understory_event_state::momentum::{
    MomentumConfig, MomentumEvent, MomentumPhase, MomentumTracker,
};

fn flick(tracker: &mut MomentumTracker, to: Point, over_ms: i64) {
    tracker.on_down(1, Point::ZERO, 0);
    tracker.on_move(1, to, over_ms);
    tracker.on_up(1, over_ms);
}

#[test]
fn flick_right_coasts_right_and_stops() {
    let mut tracker = MomentumTracker::new(MomentumConfig::default()).unwrap();
    flick(&mut tracker, Point::new(100.0, 0.0), 50);
    assert!(tracker.velocity().x > 0.0);

    let mut speeds = Vec::new();
    let mut stopped = None;
    while let Some(event) = tracker.tick() {
        match event {
            MomentumEvent::Moved { delta, .. } => {
                assert!(delta.x > 0.0, "coasting reversed: {delta:?}");
                speeds.push(delta.x);
            }
            MomentumEvent::Stopped { value, delta } => {
                stopped = Some((value, delta));
                break;
            }
        }
    }

    // Each step is the previous one scaled by friction.
    for pair in speeds.windows(2) {
        assert!((pair[1] / pair[0] - 0.92).abs() < 1e-9, "{pair:?}");
    }
    let (value, delta) = stopped.expect("tracker should stop");
    assert!(delta.x.abs() <= tracker.stop_threshold());
    assert_eq!(value, tracker.value());
    assert_eq!(tracker.phase(), MomentumPhase::Idle);
}

#[test]
fn vertical_bounds_pull_back_after_flick() {
    let config = MomentumConfig {
        bounds_y: Some(-100.0..100.0),
        ..MomentumConfig::default()
    };
    let mut tracker = MomentumTracker::new(config).unwrap();
    flick(&mut tracker, Point::new(0.0, 90.0), 20);

    let mut peak = f64::MIN;
    while let Some(event) = tracker.tick() {
        let MomentumEvent::Moved { value, .. } = event else {
            break;
        };
        peak = peak.max(value.y);
    }
    assert!(peak > 100.0, "flick should overshoot, peak {peak}");
    let y = tracker.value().y;
    assert!((-100.0..=100.0).contains(&y), "settled at {y}");
}

#[test]
fn multiplier_scales_drag() {
    let config = MomentumConfig {
        multiplier: 2.0,
        ..MomentumConfig::default()
    };
    let mut tracker = MomentumTracker::new(config).unwrap();
    tracker.on_down(1, Point::ZERO, 0);
    let event = tracker.on_move(1, Point::new(5.0, -5.0), 10).unwrap();
    assert_eq!(event.delta(), Vec2::new(10.0, -10.0));
}

proptest! {
    #[test]
    fn coasting_always_terminates(
        dx in -5000.0..5000.0_f64,
        dy in -5000.0..5000.0_f64,
        over_ms in 1_i64..100,
        friction in 0.01..0.99_f64,
        bounded in any::<bool>(),
        bounce in any::<bool>(),
    ) {
        let bounds = bounded.then_some(-200.0..200.0);
        let config = MomentumConfig {
            friction,
            bounce,
            bounds_x: bounds.clone(),
            bounds_y: bounds,
            ..MomentumConfig::default()
        };
        let max_ticks = config.max_decel_ticks;
        let mut tracker = MomentumTracker::new(config).unwrap();
        flick(&mut tracker, Point::new(dx, dy), over_ms);

        let mut ticks = 0_u32;
        while tracker.tick().is_some() {
            ticks += 1;
            prop_assert!(ticks <= max_ticks);
        }
        prop_assert_eq!(tracker.phase(), MomentumPhase::Idle);
        if bounded {
            let v = tracker.value();
            prop_assert!((-200.0..=200.0).contains(&v.x), "x settled at {}", v.x);
            prop_assert!((-200.0..=200.0).contains(&v.y), "y settled at {}", v.y);
        }
    }
}
