// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for step selection and grid computation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use understory_axis::{Axis, Orientation, nice_step};
use understory_guide::{GridCalculator, GridStyle};
use understory_plane::{Plane, PlaneConfig};
use understory_view2d::Viewport;

fn bench_nice_step(c: &mut Criterion) {
    let steps = [1.0, 2.0, 5.0];
    c.bench_function("axis/nice_step", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut min = 1.0e-6;
            while min < 1.0e6 {
                acc += nice_step(black_box(min), &steps).unwrap_or(0.0);
                min *= 1.7;
            }
            acc
        });
    });
}

fn bench_grid_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("guide/compute");
    for zoom in [0.05, 1.0, 20.0] {
        let x = Axis::new(Orientation::X, 123.0, 1920.0, 1.0 / zoom);
        let y = Axis::new(Orientation::Y, -45.0, 1080.0, 1.0 / zoom);
        let mut grid = GridCalculator::new(GridStyle::default());
        group.bench_with_input(BenchmarkId::from_parameter(zoom), &zoom, |b, _| {
            b.iter(|| grid.compute(black_box(&x), black_box(&y)));
        });
    }
    group.finish();
}

fn bench_plane_frame(c: &mut Criterion) {
    let mut plane = Plane::new(Viewport::new(1920, 1080), PlaneConfig::default())
        .expect("default configuration is valid");
    let mut now = 0;
    c.bench_function("plane/frame", |b| {
        b.iter(|| {
            now += 16;
            plane.view_mut().pan_by_pixels(kurbo::Vec2::new(3.0, -2.0));
            black_box(plane.frame(now))
        });
    });
}

criterion_group!(benches, bench_nice_step, bench_grid_compute, bench_plane_frame);
criterion_main!(benches);
