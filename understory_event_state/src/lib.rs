// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: gesture state machines for pannable surfaces.
//!
//! This crate provides small, focused state machines that turn raw pointer,
//! touch and wheel input into motion. Each module handles one pattern:
//!
//! - [`drag`]: Track one pointer's movement deltas and total offset
//! - [`pinch`]: Track two touches and report finger distance changes
//! - [`momentum`]: Follow a drag, then coast with friction and elastic bounds
//! - [`wheel`]: Smooth discrete wheel notches into per-frame deltas
//!
//! None of them read a clock or schedule callbacks. Callers pass timestamps
//! in and call `tick` once per animation frame, which keeps them
//! deterministic and trivially cancellable.
//!
//! ## Momentum
//!
//! ```rust
//! # #[cfg(feature = "momentum")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::momentum::{MomentumConfig, MomentumEvent, MomentumTracker};
//!
//! let mut tracker = MomentumTracker::new(MomentumConfig::default()).unwrap();
//! tracker.on_down(1, Point::new(0.0, 0.0), 0);
//! let moved = tracker.on_move(1, Point::new(30.0, 0.0), 16).unwrap();
//! assert_eq!(moved.delta().x, 30.0);
//!
//! // A quick flick keeps moving after release.
//! tracker.on_up(1, 16);
//! assert!(matches!(tracker.tick(), Some(MomentumEvent::Moved { .. })));
//! # }
//! ```
//!
//! ## Pinch
//!
//! ```rust
//! # #[cfg(feature = "pinch")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::pinch::{PinchEvent, PinchState};
//!
//! let mut pinch = PinchState::default();
//! pinch.touch_start(1, Point::new(0.0, 0.0));
//! assert!(matches!(
//!     pinch.touch_start(2, Point::new(0.0, 80.0)),
//!     Some(PinchEvent::Start { .. })
//! ));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `pinch`: Enable pinch tracking (requires `kurbo` dependency)
//! - `momentum`: Enable the momentum tracker (implies `drag`)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "momentum")]
pub mod momentum;
#[cfg(feature = "pinch")]
pub mod pinch;
pub mod wheel;
