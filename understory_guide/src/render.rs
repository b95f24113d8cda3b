// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Line, Point, Rect, Size};
use peniko::Color;
use understory_axis::Orientation;

use crate::grid::GridLineSet;
use crate::style::GridStyle;

/// Gap in pixels between a tick end and its label anchor.
const LABEL_GAP: f64 = 4.0;

/// Where a grid is drawn: the surface size minus padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRenderContext {
    /// Surface size in pixels.
    pub size: Size,
    /// Padding between the surface edges and the drawable area.
    pub padding: Insets,
}

impl GridRenderContext {
    /// Creates a context with no padding.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Insets::ZERO,
        }
    }

    /// Drawable area after padding, never inverted.
    #[must_use]
    pub fn inner_rect(&self) -> Rect {
        let x0 = self.padding.x0;
        let y0 = self.padding.y0;
        let x1 = (self.size.width - self.padding.x1).max(x0);
        let y1 = (self.size.height - self.padding.y1).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

/// Receiver of grid drawing primitives.
///
/// Implement this over a real renderer; [`render_grid`] only decides geometry.
pub trait GridSink {
    /// Strokes a straight line.
    fn line(&mut self, line: Line, color: Color, width: f64);
    /// Places a label anchored at `anchor`.
    ///
    /// X labels hang below the anchor, centered; Y labels end at the anchor,
    /// vertically centered.
    fn label(&mut self, anchor: Point, text: &str, color: Color, orientation: Orientation);
}

/// Emits one axis worth of grid lines, axis line, ticks and labels.
pub fn render_grid(
    ctx: &GridRenderContext,
    style: &GridStyle,
    set: &GridLineSet,
    sink: &mut impl GridSink,
) {
    let inner = ctx.inner_rect();
    if set.is_empty() || inner.width() <= 0.0 || inner.height() <= 0.0 {
        return;
    }
    let orientation = set.orientation();

    for line in set.lines() {
        if !(0.0..=1.0).contains(&line.screen_t) {
            continue;
        }
        if let Some(color) = line.color {
            sink.line(grid_line(inner, orientation, line.screen_t), color, style.line_width);
        }
    }

    let Some(axis_t) = set.axis_t() else {
        return;
    };
    let axis_color = style.color.multiply_alpha(style.axis_alpha);
    sink.line(axis_line(inner, orientation, axis_t), axis_color, style.axis_width);

    let before = style.tick_align;
    let after = 1.0 - style.tick_align;
    for line in set.lines() {
        if !(0.0..=1.0).contains(&line.screen_t) {
            continue;
        }
        let tick_length = line.tick_length.unwrap_or(0.0);
        match orientation {
            Orientation::X => {
                let x = inner.x0 + line.screen_t * inner.width();
                let y = inner.y0 + axis_t * inner.height();
                if tick_length > 0.0 {
                    let tick = Line::new(
                        (x, y - tick_length * before),
                        (x, y + tick_length * after),
                    );
                    sink.line(tick, axis_color, style.axis_width);
                }
                if let Some(label) = &line.label {
                    let anchor = Point::new(x, y + tick_length * after + LABEL_GAP);
                    sink.label(anchor, label, axis_color, orientation);
                }
            }
            Orientation::Y => {
                let x = inner.x0 + axis_t * inner.width();
                let y = inner.y0 + line.screen_t * inner.height();
                if tick_length > 0.0 {
                    let tick = Line::new(
                        (x - tick_length * before, y),
                        (x + tick_length * after, y),
                    );
                    sink.line(tick, axis_color, style.axis_width);
                }
                if let Some(label) = &line.label {
                    let anchor = Point::new(x - tick_length * before - LABEL_GAP, y);
                    sink.label(anchor, label, axis_color, orientation);
                }
            }
        }
    }
}

fn grid_line(inner: Rect, orientation: Orientation, t: f64) -> Line {
    match orientation {
        Orientation::X => {
            let x = inner.x0 + t * inner.width();
            Line::new((x, inner.y0), (x, inner.y1))
        }
        Orientation::Y => {
            let y = inner.y0 + t * inner.height();
            Line::new((inner.x0, y), (inner.x1, y))
        }
    }
}

// The axis of an X line set is horizontal and vice versa.
fn axis_line(inner: Rect, orientation: Orientation, axis_t: f64) -> Line {
    match orientation {
        Orientation::X => {
            let y = inner.y0 + axis_t * inner.height();
            Line::new((inner.x0, y), (inner.x1, y))
        }
        Orientation::Y => {
            let x = inner.x0 + axis_t * inner.width();
            Line::new((x, inner.y0), (x, inner.y1))
        }
    }
}
