// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;

/// Visual and stepping configuration for one grid axis.
///
/// The defaults produce a 20px target spacing on a `1, 2, 5` ladder, with
/// decade lines drawn light and next‑decade lines drawn heavy.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Ascending step ladder scaled by powers of ten, usually `[1, 2, 5]`.
    pub steps: Vec<f64>,
    /// Minimum on‑screen spacing between adjacent lines, in pixels.
    pub distance_px: f64,
    /// Base color; line, axis and label colors are derived from it.
    pub color: Color,
    /// Alpha applied to lines on multiples of the next decade.
    pub major_alpha: f32,
    /// Alpha applied to lines on multiples of the current decade.
    pub minor_alpha: f32,
    /// Alpha for the remaining step lines; `None` leaves them undrawn.
    pub step_alpha: Option<f32>,
    /// Alpha applied to the axis line.
    pub axis_alpha: f32,
    /// Axis stroke width in pixels; tick length is four times this.
    pub axis_width: f64,
    /// Grid line stroke width in pixels.
    pub line_width: f64,
    /// Fraction of each tick drawn before the axis line (`0.5` centers it).
    pub tick_align: f64,
    /// World value where the perpendicular axis crosses this one.
    pub axis_origin: f64,
    /// Label the origin line on the X axis.
    pub label_origin: bool,
    /// Labels display `value / label_divisor`.
    pub label_divisor: f64,
    /// Negate Y labels so they read in y‑down content space.
    pub flip_y_labels: bool,
    /// Upper bound on lines per axis; larger sets are treated as degenerate.
    pub max_lines: usize,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            steps: vec![1.0, 2.0, 5.0],
            distance_px: 20.0,
            color: Color::BLACK,
            major_alpha: 0.3,
            minor_alpha: 0.1,
            step_alpha: None,
            axis_alpha: 0.8,
            axis_width: 2.0,
            line_width: 1.0,
            tick_align: 0.5,
            axis_origin: 0.0,
            label_origin: false,
            label_divisor: 1.0,
            flip_y_labels: true,
            max_lines: 4096,
        }
    }
}

impl GridStyle {
    /// Tick length in pixels for tick‑aligned lines.
    #[must_use]
    pub fn tick_length(&self) -> f64 {
        self.axis_width * 4.0
    }
}
