// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_plane --heading-base-level=0

//! Understory Plane: an infinitely pannable, zoomable 2D plane.
//!
//! [`Plane`] wires the Understory pieces into one frame loop:
//!
//! ```text
//! InputEvent ─▶ GestureNormalizer ─▶ ViewController ─▶ GridCalculator (X, Y)
//!                                         │
//!                                         └─▶ ViewEvent ─▶ debounced Moved
//! ```
//!
//! The host feeds input with [`Plane::handle_input`], calls
//! [`Plane::frame`] once per animation frame while [`Plane::needs_frame`]
//! holds, and draws the returned [`PlaneFrame`]: grid lines for both axes,
//! the world-to-screen transform and a scale per registered layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::{InputEvent, PointerInput};
//! use understory_plane::{Plane, PlaneConfig, PlaneEvent};
//! use understory_view2d::Viewport;
//!
//! let mut plane = Plane::new(Viewport::new(800, 600), PlaneConfig::default()).unwrap();
//!
//! let frame = plane.frame(0);
//! assert_eq!(frame.x_lines.step(), Some(20.0));
//!
//! plane.handle_input(&InputEvent::PointerDown(PointerInput::primary(1, Point::new(0.0, 0.0), 0)));
//! plane.handle_input(&InputEvent::PointerMove(PointerInput::primary(1, Point::new(40.0, 0.0), 16)));
//! let frame = plane.frame(16);
//! assert_eq!(frame.view.center_x, -40.0);
//! assert!(frame.events.contains(&PlaneEvent::View(understory_view2d::ViewEvent::Panning)));
//!
//! // Once the view has been still for the quiet period, `Moved` fires.
//! let frame = plane.frame(116);
//! assert!(matches!(frame.events.last(), Some(PlaneEvent::Moved(_))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod plane;

pub use error::PlaneError;
pub use plane::{LayerId, LayerTransform, Plane, PlaneConfig, PlaneEvent, PlaneFrame};
