// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from [`ui_events`] pointer events.
//!
//! Mouse and pen pointers map onto [`InputEvent`]'s pointer family under a
//! single pointer id. Touch pointers are left to the host, which should
//! report them as [`TouchInput`](crate::TouchInput) so fingers keep their
//! own ids for pinching.

use kurbo::{Point, Vec2};
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerButton, PointerEvent, PointerType, PointerUpdate};

use crate::input::{InputEvent, PointerButtons, PointerInput, WheelDelta, WheelInput};

/// Pointer id used for every converted mouse or pen event.
pub const ADAPTED_POINTER_ID: u64 = 1;

fn buttons_for(button: Option<PointerButton>) -> PointerButtons {
    match button {
        Some(PointerButton::Primary) => PointerButtons::PRIMARY,
        Some(PointerButton::Secondary) => PointerButtons::SECONDARY,
        Some(PointerButton::Auxiliary) => PointerButtons::AUXILIARY,
        _ => PointerButtons::empty(),
    }
}

/// Converts a `ui-events` pointer event, stamping it with `time_ms`.
///
/// Returns `None` for touch pointers and for events with no pan/zoom
/// meaning (enter, leave, platform gestures).
#[must_use]
pub fn from_ui_pointer_event(event: &PointerEvent, time_ms: i64) -> Option<InputEvent> {
    let input = |position, buttons| PointerInput {
        pointer_id: ADAPTED_POINTER_ID,
        position,
        buttons,
        time_ms,
    };
    match event {
        PointerEvent::Down(e) if e.pointer.pointer_type != PointerType::Touch => Some(
            InputEvent::PointerDown(input(e.state.logical_point(), buttons_for(e.button))),
        ),
        PointerEvent::Up(e) if e.pointer.pointer_type != PointerType::Touch => Some(
            InputEvent::PointerUp(input(e.state.logical_point(), buttons_for(e.button))),
        ),
        PointerEvent::Move(PointerUpdate {
            pointer, current, ..
        }) if pointer.pointer_type != PointerType::Touch => Some(InputEvent::PointerMove(
            input(current.logical_point(), PointerButtons::empty()),
        )),
        PointerEvent::Cancel(pointer) if pointer.pointer_type != PointerType::Touch => Some(
            InputEvent::PointerCancel(input(Point::ZERO, PointerButtons::empty())),
        ),
        PointerEvent::Scroll(e) => {
            let delta = match &e.delta {
                ScrollDelta::PixelDelta(pos) => {
                    let logical = pos.to_logical(e.state.scale_factor);
                    WheelDelta::Pixels(Vec2::new(logical.x, logical.y))
                }
                ScrollDelta::LineDelta(x, y) => {
                    WheelDelta::Lines(Vec2::new(f64::from(*x), f64::from(*y)))
                }
                ScrollDelta::PageDelta(x, y) => {
                    WheelDelta::Pages(Vec2::new(f64::from(*x), f64::from(*y)))
                }
            };
            Some(InputEvent::Wheel(WheelInput {
                position: e.state.logical_point(),
                delta,
                time_ms,
            }))
        }
        _ => None,
    }
}
