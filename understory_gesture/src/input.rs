// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input consumed by [`crate::GestureNormalizer`].
//!
//! Positions are logical pixels in the viewport's screen space (y-down) and
//! timestamps are milliseconds on any monotonic clock the host likes.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Pointer buttons held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Usually the left mouse button.
        const PRIMARY   = 0b0000_0001;
        /// Usually the right mouse button.
        const SECONDARY = 0b0000_0010;
        /// Usually the middle mouse button.
        const AUXILIARY = 0b0000_0100;
    }
}

/// A mouse or pen sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Identifies the pointer across down, move and up.
    pub pointer_id: u64,
    /// Position in screen pixels.
    pub position: Point,
    /// Buttons held (for a down, the pressed one).
    pub buttons: PointerButtons,
    /// Timestamp in milliseconds.
    pub time_ms: i64,
}

impl PointerInput {
    /// A primary-button sample.
    #[must_use]
    pub fn primary(pointer_id: u64, position: Point, time_ms: i64) -> Self {
        Self {
            pointer_id,
            position,
            buttons: PointerButtons::PRIMARY,
            time_ms,
        }
    }
}

/// Wheel delta in the unit the device reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Pixels.
    Pixels(Vec2),
    /// Text lines.
    Lines(Vec2),
    /// Whole pages (the viewport height).
    Pages(Vec2),
}

/// A wheel or trackpad scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Cursor position in screen pixels.
    pub position: Point,
    /// Scroll amount; positive y scrolls down.
    pub delta: WheelDelta,
    /// Timestamp in milliseconds.
    pub time_ms: i64,
}

/// A single touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchInput {
    /// Identifies the contact across start, move and end.
    pub touch_id: u64,
    /// Position in screen pixels.
    pub position: Point,
    /// Timestamp in milliseconds.
    pub time_ms: i64,
}

impl TouchInput {
    /// Creates a touch sample.
    #[must_use]
    pub fn new(touch_id: u64, position: Point, time_ms: i64) -> Self {
        Self {
            touch_id,
            position,
            time_ms,
        }
    }
}

/// Input events understood by the normalizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A button was pressed.
    PointerDown(PointerInput),
    /// The pointer moved.
    PointerMove(PointerInput),
    /// A button was released.
    PointerUp(PointerInput),
    /// The platform took the pointer away.
    PointerCancel(PointerInput),
    /// Wheel or trackpad scroll.
    Wheel(WheelInput),
    /// A finger touched down.
    TouchStart(TouchInput),
    /// A finger moved.
    TouchMove(TouchInput),
    /// A finger lifted.
    TouchEnd(TouchInput),
    /// The platform took the touch away.
    TouchCancel(TouchInput),
}
