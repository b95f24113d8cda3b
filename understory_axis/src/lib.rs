// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_axis --heading-base-level=0

//! Understory Axis: headless 1D axis mapping and "nice" step selection.
//!
//! This crate models a single numeric axis of a pannable, zoomable plane. It
//! focuses on:
//! - Mapping world values to normalized `0..1` ratios across the viewport and back.
//! - Choosing round grid steps (multiples of 1, 2 and 5 times a power of ten).
//! - Formatting tick labels without floating point noise.
//!
//! An [`Axis`] is a pure snapshot derived from a view center, a viewport
//! extent in pixels and a world‑units‑per‑pixel factor. It is rebuilt whenever
//! the view changes and never mutated in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_axis::{Axis, Orientation, nice_step};
//!
//! // 800px wide viewport centered on x = 0 at 1 world unit per pixel.
//! let axis = Axis::new(Orientation::X, 0.0, 800.0, 1.0);
//! assert_eq!(axis.offset(), -400.0);
//! assert_eq!(axis.to_pixel_ratio(0.0).unwrap(), 0.5);
//!
//! // Y axes are inverted: screen y grows downward, world y grows upward.
//! let y = Axis::new(Orientation::Y, 0.0, 600.0, 1.0);
//! assert_eq!(y.to_pixel_ratio(300.0).unwrap(), 0.0);
//!
//! // 20px spacing at 1 unit/px picks a step of 20.
//! assert_eq!(nice_step(20.0, &[1.0, 2.0, 5.0]), Some(20.0));
//! ```
//!
//! Degenerate axes (zero or non‑finite range) report
//! [`AxisError::DegenerateAxis`] instead of dividing by zero.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod axis;
mod format;
mod scale;

pub use axis::{Axis, AxisError, Orientation};
pub use format::{format_label, label_decimals};
pub use scale::{is_multiple, nice_step};
