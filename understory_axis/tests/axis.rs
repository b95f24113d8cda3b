// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_axis` crate.
//!
//! These cover the world/ratio mapping in both orientations and the
//! monotonic behavior of step selection as the zoom level changes.

use proptest::prelude::*;
use understory_axis::{Axis, AxisError, Orientation, format_label, nice_step};

const LADDER: [f64; 3] = [1.0, 2.0, 5.0];

#[test]
fn scenario_default_spacing_at_unit_zoom() {
    // 20px target spacing at 1 world unit per pixel.
    let axis = Axis::new(Orientation::X, 0.0, 800.0, 1.0);
    let step = nice_step(20.0 * axis.units_per_px(), &LADDER);
    assert_eq!(step, Some(20.0));
}

#[test]
fn degenerate_axis_reports_error() {
    let axis = Axis::new(Orientation::Y, 5.0, 0.0, 1.0);
    assert_eq!(
        axis.to_pixel_ratio(5.0),
        Err(AxisError::DegenerateAxis { range: 0.0 })
    );
}

#[test]
fn error_display_mentions_range() {
    let err = AxisError::DegenerateAxis { range: 0.0 };
    assert_eq!(err.to_string(), "axis range 0 is zero or not finite");
}

#[test]
fn labels_hide_float_noise() {
    assert_eq!(format_label(1.000_000_000_1, 1.0), "1");
    assert_eq!(format_label(3.0 * 0.1, 0.1), "0.3");
}

proptest! {
    #[test]
    fn ratio_round_trips(
        value in -1.0e6..1.0e6_f64,
        center in -1.0e4..1.0e4_f64,
        zoom in 0.01..20.0_f64,
        extent in 1.0..4000.0_f64,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical { Orientation::Y } else { Orientation::X };
        let axis = Axis::new(orientation, center, extent, 1.0 / zoom);
        let ratio = axis.to_pixel_ratio(value).unwrap();
        let back = axis.value_at_ratio(ratio).unwrap();
        let tolerance = 1e-9 * (value.abs() + axis.range().abs() + center.abs()).max(1.0);
        prop_assert!((back - value).abs() <= tolerance, "{value} -> {ratio} -> {back}");
    }

    #[test]
    fn step_never_shrinks_when_zooming_out(
        zoom in 0.001..1000.0_f64,
        factor in 1.0..50.0_f64,
    ) {
        let zoomed_in = nice_step(20.0 / zoom, &LADDER).unwrap();
        let zoomed_out = nice_step(20.0 / (zoom / factor), &LADDER).unwrap();
        prop_assert!(zoomed_out >= zoomed_in, "{zoomed_out} < {zoomed_in}");
    }

    #[test]
    fn step_is_at_least_target(target in 1.0e-6..1.0e9_f64) {
        let step = nice_step(target, &LADDER).unwrap();
        prop_assert!(step >= target);
        // Never more than one ladder rung (x2.5) above the target.
        prop_assert!(step <= target * 2.5 + f64::EPSILON * step);
    }
}
