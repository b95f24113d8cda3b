// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_guide --heading-base-level=0

//! Understory Guide: adaptive grid lines, ticks and labels for a 2D plane.
//!
//! Given an [`Axis`](understory_axis::Axis) snapshot per direction, a
//! [`GridCalculator`] picks a round step so that adjacent lines sit at least
//! [`GridStyle::distance_px`] apart, then classifies each visible line:
//! - [`GridLineKind::Major`] on multiples of the next power of ten,
//! - [`GridLineKind::Minor`] on multiples of the current power of ten,
//! - [`GridLineKind::Step`] for the rest (undrawn unless [`GridStyle::step_alpha`] is set).
//!
//! A coarser tick step decides which lines carry a tick and a label. The
//! origin is left unlabeled by default.
//!
//! Drawing is delegated: [`render_grid`] turns a [`GridLineSet`] into
//! lines and labels on any [`GridSink`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_axis::{Axis, Orientation};
//! use understory_guide::{GridCalculator, GridLineKind, GridStyle};
//!
//! let x = Axis::new(Orientation::X, 0.0, 800.0, 1.0);
//! let y = Axis::new(Orientation::Y, 0.0, 600.0, 1.0);
//!
//! let mut grid = GridCalculator::new(GridStyle::default());
//! let lines = grid.compute(&x, &y);
//! assert_eq!(lines.step(), Some(20.0));
//!
//! let hundred = lines.lines().iter().find(|l| l.world_value == 100.0).unwrap();
//! assert_eq!(hundred.kind, GridLineKind::Minor);
//! assert_eq!(hundred.label.as_deref(), Some("100"));
//! ```
//!
//! Degenerate axes produce an empty set and a single `tracing` warning until
//! the axis recovers.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod grid;
mod render;
mod style;

pub use grid::{GridCalculator, GridLine, GridLineKind, GridLineSet};
pub use render::{GridRenderContext, GridSink, render_grid};
pub use style::GridStyle;
