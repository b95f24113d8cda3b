// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_guide` grid computation and rendering.

use kurbo::{Insets, Line, Point, Size};
use peniko::Color;
use proptest::prelude::*;
use understory_axis::{Axis, Orientation};
use understory_guide::{
    GridCalculator, GridLineKind, GridRenderContext, GridSink, GridStyle, render_grid,
};

#[derive(Default)]
struct Recorder {
    lines: Vec<(Line, Color, f64)>,
    labels: Vec<(Point, String, Orientation)>,
}

impl GridSink for Recorder {
    fn line(&mut self, line: Line, color: Color, width: f64) {
        self.lines.push((line, color, width));
    }

    fn label(&mut self, anchor: Point, text: &str, _color: Color, orientation: Orientation) {
        self.labels.push((anchor, text.to_owned(), orientation));
    }
}

fn axes(zoom: f64) -> (Axis, Axis) {
    (
        Axis::new(Orientation::X, 0.0, 800.0, 1.0 / zoom),
        Axis::new(Orientation::Y, 0.0, 600.0, 1.0 / zoom),
    )
}

#[test]
fn unit_zoom_grid_draws_minor_and_major_lines() {
    let (x, y) = axes(1.0);
    let style = GridStyle::default();
    let mut grid = GridCalculator::new(style.clone());
    let set = grid.compute(&x, &y);

    let mut sink = Recorder::default();
    render_grid(&GridRenderContext::new(Size::new(800.0, 600.0)), &style, &set, &mut sink);

    // Visible multiples of 100 from -400 to 400, plus the axis line and the
    // ticks on +-100..400.
    let grid_lines = sink.lines.iter().filter(|(_, _, w)| *w == 1.0).count();
    assert_eq!(grid_lines, 9);
    let axis_and_ticks = sink.lines.iter().filter(|(_, _, w)| *w == 2.0).count();
    assert_eq!(axis_and_ticks, 1 + 8);

    let labels: Vec<&str> = sink.labels.iter().map(|(_, t, _)| t.as_str()).collect();
    assert_eq!(
        labels,
        ["-400", "-300", "-200", "-100", "100", "200", "300", "400"]
    );
}

#[test]
fn x_labels_sit_below_the_axis() {
    let (x, y) = axes(1.0);
    let style = GridStyle::default();
    let set = GridCalculator::new(style.clone()).compute(&x, &y);
    let mut sink = Recorder::default();
    render_grid(&GridRenderContext::new(Size::new(800.0, 600.0)), &style, &set, &mut sink);

    let (anchor, text, _) = &sink.labels[4];
    assert_eq!(text, "100");
    // x = 0 is centered; the axis is at y = 300; tick half length 4, gap 4.
    assert_eq!(*anchor, Point::new(500.0, 308.0));
}

#[test]
fn y_lines_are_horizontal_and_padded() {
    let (x, y) = axes(1.0);
    let style = GridStyle::default();
    let set = GridCalculator::new(style.clone()).compute(&y, &x);
    let ctx = GridRenderContext {
        size: Size::new(820.0, 620.0),
        padding: Insets::uniform(10.0),
    };
    let mut sink = Recorder::default();
    render_grid(&ctx, &style, &set, &mut sink);

    let (first, _, _) = sink.lines[0];
    assert_eq!(first.p0.y, first.p1.y);
    assert_eq!(first.p0.x, 10.0);
    assert_eq!(first.p1.x, 810.0);
    assert!(sink.labels.iter().all(|(_, _, o)| *o == Orientation::Y));
}

#[test]
fn empty_set_renders_nothing() {
    let flat = Axis::new(Orientation::X, 0.0, 0.0, 1.0);
    let (_, y) = axes(1.0);
    let style = GridStyle::default();
    let set = GridCalculator::new(style.clone()).compute(&flat, &y);
    let mut sink = Recorder::default();
    render_grid(&GridRenderContext::new(Size::new(800.0, 600.0)), &style, &set, &mut sink);
    assert!(sink.lines.is_empty());
    assert!(sink.labels.is_empty());
}

#[test]
fn step_alpha_draws_step_lines() {
    let (x, y) = axes(1.0);
    let style = GridStyle {
        step_alpha: Some(0.05),
        ..GridStyle::default()
    };
    let set = GridCalculator::new(style).compute(&x, &y);
    assert!(
        set.lines()
            .iter()
            .filter(|l| l.kind == GridLineKind::Step)
            .all(|l| l.color.is_some())
    );
}

#[test]
fn label_divisor_scales_text() {
    let (x, y) = axes(1.0);
    let style = GridStyle {
        label_divisor: 100.0,
        ..GridStyle::default()
    };
    let set = GridCalculator::new(style).compute(&x, &y);
    let labels: Vec<&str> = set.labeled().map(|(_, t)| t).collect();
    assert!(labels.contains(&"1"), "{labels:?}");
    assert!(labels.contains(&"-4"), "{labels:?}");
}

#[test]
fn far_offsets_beyond_float_precision_are_degenerate() {
    let y = Axis::new(Orientation::Y, 0.0, 600.0, 1.0);
    let mut grid = GridCalculator::default();

    let far = grid.compute(&Axis::new(Orientation::X, 1.0e18, 800.0, 1.0), &y);
    assert!(far.is_empty());
    assert_eq!(far.step(), None);

    // Max zoom (units_per_px 1/20) puts the step at 1, so 1e16 is already too far.
    let far = grid.compute(&Axis::new(Orientation::X, 1.0e16, 800.0, 1.0 / 20.0), &y);
    assert!(far.is_empty());

    // Recovers once the view comes back.
    let near = grid.compute(&Axis::new(Orientation::X, 1.0e12, 800.0, 1.0), &y);
    assert_eq!(near.step(), Some(20.0));
    assert_eq!(near.len(), 43);
    let values: Vec<f64> = near.lines().iter().map(|l| l.world_value).collect();
    assert!(values.windows(2).all(|w| w[1] - w[0] == 20.0));
}

proptest! {
    #[test]
    fn spacing_never_below_target(zoom in 0.001..1000.0_f64, center in -1.0e5..1.0e5_f64) {
        let x = Axis::new(Orientation::X, center, 800.0, 1.0 / zoom);
        let y = Axis::new(Orientation::Y, center, 600.0, 1.0 / zoom);
        let mut grid = GridCalculator::default();
        let set = grid.compute(&x, &y);
        let step = set.step().unwrap();
        prop_assert!(step * zoom >= 20.0 * (1.0 - 1e-9));

        let ts: Vec<f64> = set.lines().iter().map(|l| l.screen_t).collect();
        prop_assert!(ts.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ts.first().unwrap() <= &0.0);
        prop_assert!(ts.last().unwrap() >= &1.0);
    }
}
