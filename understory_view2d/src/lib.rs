// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view2d --heading-base-level=0

//! Understory View 2D: the view controller of a pannable, zoomable plane.
//!
//! This crate owns the authoritative view of an infinite 2D plane: a world
//! center and a zoom factor, mapped into a pixel viewport. It focuses on:
//! - Applying pan/zoom impulses ([`PanZoomDelta`]) with anchor‑invariant zoom.
//! - Coordinate conversion between world (y‑up) and screen (y‑down) space.
//! - Fitting content, resizing consistently and pinning the origin to a corner.
//! - Reporting changes as queued [`ViewEvent`]s.
//!
//! It does **not** read input devices, run timers or draw. Gesture
//! interpretation lives in `understory_gesture`; grid computation reads the
//! resulting [`ViewState`] without ever referring back into the controller.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_view2d::{PanZoomDelta, ViewController, ViewEvent, Viewport};
//!
//! let mut view = ViewController::new(Viewport::new(800, 600));
//!
//! // Drag 100px to the right: content follows, so the center moves left.
//! view.apply_delta(&PanZoomDelta::pan(100.0, 0.0));
//! assert_eq!(view.center(), Point::new(-100.0, 0.0));
//!
//! // Zoom in about the cursor; the world point under it stays put.
//! let cursor = Point::new(600.0, 150.0);
//! let before = view.screen_to_world_point(cursor);
//! view.apply_delta(&PanZoomDelta::zoom(-300.0, cursor));
//! let after = view.screen_to_world_point(cursor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! let events: Vec<ViewEvent> = view.drain_events().collect();
//! assert!(events.contains(&ViewEvent::Panning));
//! ```
//!
//! ## Conventions
//!
//! - `zoom` is pixels per world unit; `1 / zoom` is world units per pixel.
//! - `dz` is an exponential zoom impulse: the zoom is multiplied by
//!   `exp(-dz / viewport_height)`, so opposite impulses cancel and any
//!   magnitude clamps safely to `[min_zoom, max_zoom]`.
//! - A zero delta leaves the state bit‑identical and emits nothing.
//!
//! This crate is `no_std`.

#![no_std]

mod capabilities;
mod controller;
mod modes;
mod state;

pub use capabilities::{Pannable, Pinnable, Zoomable};
pub use controller::{ViewController, ViewDebugInfo};
pub use modes::{PinCorner, ResizeAnchor, ZoomAnchor};
pub use state::{PanZoomDelta, PinConfig, ViewConfig, ViewError, ViewEvent, ViewState, Viewport};
