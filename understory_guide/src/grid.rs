// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use understory_axis::{Axis, Orientation, format_label, is_multiple, nice_step};

use crate::style::GridStyle;

/// 2^53: above this, adjacent line indices are not representable.
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;

/// Visual weight class of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridLineKind {
    /// Multiple of the next power of ten above the step.
    Major,
    /// Multiple of the power of ten at or above the step.
    Minor,
    /// Any other multiple of the step.
    Step,
}

/// One visible grid line.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    /// Position in world units along the axis.
    pub world_value: f64,
    /// Normalized screen position in `0..1` (may fall slightly outside at the edges).
    pub screen_t: f64,
    /// Weight class.
    pub kind: GridLineKind,
    /// Stroke color, or `None` when the line is not drawn.
    pub color: Option<Color>,
    /// Tick length in pixels, if this line carries a tick.
    pub tick_length: Option<f64>,
    /// Label text, if this line is labeled.
    pub label: Option<String>,
}

/// Visible lines for one axis, valid for a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLineSet {
    orientation: Orientation,
    step: Option<f64>,
    tick_step: Option<f64>,
    axis_t: Option<f64>,
    lines: Vec<GridLine>,
}

impl GridLineSet {
    /// Creates an empty set, meaning "nothing to draw this frame".
    #[must_use]
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            step: None,
            tick_step: None,
            axis_t: None,
            lines: Vec::new(),
        }
    }

    /// Axis these lines belong to.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Spacing between adjacent lines in world units.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Spacing between ticks and labels in world units.
    #[must_use]
    pub fn tick_step(&self) -> Option<f64> {
        self.tick_step
    }

    /// Clamped ratio across the perpendicular axis where ticks and labels sit.
    #[must_use]
    pub fn axis_t(&self) -> Option<f64> {
        self.axis_t
    }

    /// Lines in ascending world order.
    #[must_use]
    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates lines that carry a label.
    pub fn labeled(&self) -> impl Iterator<Item = (&GridLine, &str)> + '_ {
        self.lines
            .iter()
            .filter_map(|line| line.label.as_deref().map(|label| (line, label)))
    }
}

/// Computes adaptive grid lines for an axis.
///
/// The calculator is stateless apart from the last chosen step and a flag
/// that keeps a degenerate axis from being logged every frame.
#[derive(Clone, Debug)]
pub struct GridCalculator {
    style: GridStyle,
    last_step: Option<f64>,
    degenerate_logged: bool,
}

impl GridCalculator {
    /// Creates a calculator with the given style.
    #[must_use]
    pub fn new(style: GridStyle) -> Self {
        Self {
            style,
            last_step: None,
            degenerate_logged: false,
        }
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Replaces the style.
    pub fn set_style(&mut self, style: GridStyle) {
        self.style = style;
    }

    /// Step chosen by the last successful [`GridCalculator::compute`].
    #[must_use]
    pub fn last_step(&self) -> Option<f64> {
        self.last_step
    }

    /// Computes the visible lines of `axis`.
    ///
    /// `opposite` is the perpendicular axis; it locates the axis line that
    /// ticks and labels hang from. Degenerate input yields an empty set.
    pub fn compute(&mut self, axis: &Axis, opposite: &Axis) -> GridLineSet {
        if let Some(set) = self.try_compute(axis, opposite) {
            self.degenerate_logged = false;
            self.last_step = set.step;
            return set;
        }
        if !self.degenerate_logged {
            tracing::warn!(
                orientation = ?axis.orientation(),
                range = axis.range(),
                units_per_px = axis.units_per_px(),
                "degenerate grid axis, skipping lines"
            );
            self.degenerate_logged = true;
        }
        self.last_step = None;
        GridLineSet::empty(axis.orientation())
    }

    fn try_compute(&self, axis: &Axis, opposite: &Axis) -> Option<GridLineSet> {
        if axis.is_degenerate() {
            return None;
        }
        let style = &self.style;
        let step = nice_step(style.distance_px * axis.units_per_px(), &style.steps)?;
        if !(step.is_finite() && step > 0.0) {
            return None;
        }

        let start = axis.offset();
        let end = start + axis.range();
        let first = libm::floor(start / step) - 1.0;
        let last = libm::ceil(end / step) + 1.0;
        // Past 2^53 consecutive indices collapse onto the same float.
        if libm::fabs(first) >= MAX_EXACT_INDEX || libm::fabs(last) >= MAX_EXACT_INDEX {
            return None;
        }
        let count = last - first + 1.0;
        if !count.is_finite() || count > style.max_lines as f64 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "count is a small positive integer bounded by max_lines"
        )]
        let count = count as u64;

        let tick_step = nice_step(step * 1.1, &style.steps)
            .and_then(|coarser| nice_step(coarser * 1.1, &style.steps));
        let power = libm::ceil(libm::log10(step) - 1e-9);
        let decade = libm::pow(10.0, power);
        let weight_eps = step / 10.0;

        let orientation = axis.orientation();
        let mut lines = Vec::new();
        for i in 0..count {
            let value = (first + i as f64) * step;
            let Ok(screen_t) = axis.to_pixel_ratio(value) else {
                continue;
            };

            let kind = if is_multiple(value, decade * 10.0, weight_eps) {
                GridLineKind::Major
            } else if is_multiple(value, decade, weight_eps) {
                GridLineKind::Minor
            } else {
                GridLineKind::Step
            };
            let color = match kind {
                GridLineKind::Major => Some(style.color.multiply_alpha(style.major_alpha)),
                GridLineKind::Minor => Some(style.color.multiply_alpha(style.minor_alpha)),
                GridLineKind::Step => style.step_alpha.map(|a| style.color.multiply_alpha(a)),
            };

            let (tick_length, label) = match tick_step {
                Some(ts) => (
                    self.tick_for(value, ts),
                    self.label_for(value, ts, kind, orientation),
                ),
                None => (None, None),
            };

            lines.push(GridLine {
                world_value: value,
                screen_t,
                kind,
                color,
                tick_length,
                label,
            });
        }

        let axis_t = opposite
            .to_pixel_ratio(style.axis_origin)
            .ok()
            .map(|t| t.clamp(0.0, 1.0));

        Some(GridLineSet {
            orientation,
            step: Some(step),
            tick_step,
            axis_t,
            lines,
        })
    }

    fn tick_for(&self, value: f64, tick_step: f64) -> Option<f64> {
        let eps = tick_step / 10.0;
        if !is_multiple(value, tick_step, eps) || (value - self.style.axis_origin).abs() < eps {
            return None;
        }
        Some(self.style.tick_length())
    }

    fn label_for(
        &self,
        value: f64,
        tick_step: f64,
        kind: GridLineKind,
        orientation: Orientation,
    ) -> Option<String> {
        let style = &self.style;
        let eps = tick_step / 100.0;
        if kind == GridLineKind::Step || !is_multiple(value, tick_step, eps) {
            return None;
        }
        if (value - style.axis_origin).abs() < eps
            && !(style.label_origin && orientation == Orientation::X)
        {
            return None;
        }
        let mut shown = value / style.label_divisor;
        if orientation == Orientation::Y && style.flip_y_labels {
            shown = -shown;
        }
        Some(format_label(shown, tick_step / style.label_divisor))
    }
}

impl Default for GridCalculator {
    fn default() -> Self {
        Self::new(GridStyle::default())
    }
}
