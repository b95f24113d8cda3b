// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: one pan/zoom stream from pointer, wheel and touch input.
//!
//! [`GestureNormalizer`] consumes raw [`InputEvent`]s and produces, once per
//! animation frame, a single coalesced [`PanZoomDelta`] for
//! `understory_view2d::ViewController::apply_delta`:
//!
//! - Drags move the view through a momentum tracker, so a flick keeps
//!   coasting after release. Secondary-button drags are tagged.
//! - Wheel input in pixels, lines or pages is normalized to notches and
//!   smoothed into a short zoom glide about the cursor.
//! - Two-finger pinches zoom about the finger midpoint. The drag tracker is
//!   paused for the duration of the pinch.
//!
//! Everything within one frame is folded together: pan and zoom sum, the
//! most recent anchor wins.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::{GestureConfig, GestureNormalizer, InputEvent, PointerInput};
//!
//! let mut gestures = GestureNormalizer::new(GestureConfig::default()).unwrap();
//! gestures.handle(&InputEvent::PointerDown(PointerInput::primary(1, Point::new(10.0, 10.0), 0)));
//! gestures.handle(&InputEvent::PointerMove(PointerInput::primary(1, Point::new(30.0, 10.0), 8)));
//! gestures.handle(&InputEvent::PointerMove(PointerInput::primary(1, Point::new(45.0, 10.0), 16)));
//!
//! // Both moves arrive as one delta.
//! let delta = gestures.on_frame().unwrap();
//! assert_eq!((delta.dx, delta.dy, delta.dz), (35.0, 0.0, 0.0));
//! assert!(gestures.on_frame().is_none());
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: [`from_ui_pointer_event`] converts
//!   `ui_events::pointer::PointerEvent` into [`InputEvent`].
//!
//! This crate is `no_std`.

#![no_std]

mod input;
mod normalizer;
#[cfg(feature = "ui_events_adapter")]
mod ui_events_adapter;

pub use input::{InputEvent, PointerButtons, PointerInput, TouchInput, WheelDelta, WheelInput};
pub use normalizer::{GestureConfig, GestureNormalizer};
#[cfg(feature = "ui_events_adapter")]
pub use ui_events_adapter::{ADAPTED_POINTER_ID, from_ui_pointer_event};

pub use understory_view2d::PanZoomDelta;
