// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! [`PinchState`] keeps up to two touch slots keyed by touch id. A pinch is
//! active while both slots are filled; each move then reports the current
//! and previous finger distance.
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pinch::{PinchEvent, PinchState};
//!
//! let mut pinch = PinchState::default();
//! assert_eq!(pinch.touch_start(1, Point::new(0.0, 0.0)), None);
//! assert_eq!(
//!     pinch.touch_start(2, Point::new(100.0, 0.0)),
//!     Some(PinchEvent::Start { distance: 100.0, midpoint: Point::new(50.0, 0.0) })
//! );
//! assert_eq!(
//!     pinch.touch_move(2, Point::new(150.0, 0.0)),
//!     Some(PinchEvent::Change { current: 150.0, previous: 100.0 })
//! );
//! assert_eq!(pinch.touch_end(1), Some(PinchEvent::End));
//! ```

use kurbo::Point;

/// Pinch transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// The second finger landed.
    Start {
        /// Distance between the fingers.
        distance: f64,
        /// Point halfway between the fingers.
        midpoint: Point,
    },
    /// A finger moved while pinching.
    Change {
        /// Distance after the move.
        current: f64,
        /// Distance before the move.
        previous: f64,
    },
    /// The pinch lost a finger.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Touch {
    id: u64,
    position: Point,
}

/// Tracks two touch points for pinch gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    slots: [Option<Touch>; 2],
}

impl PinchState {
    /// Records a new touch. Returns [`PinchEvent::Start`] when it is the second one.
    ///
    /// A third finger, or an id already being tracked, is ignored.
    pub fn touch_start(&mut self, id: u64, position: Point) -> Option<PinchEvent> {
        if self.slot_of(id).is_some() {
            return None;
        }
        let free = self.slots.iter().position(Option::is_none)?;
        self.slots[free] = Some(Touch { id, position });
        if !self.is_pinching() {
            return None;
        }
        let (a, b) = self.pair()?;
        tracing::debug!(distance = a.distance(b), "pinch started");
        Some(PinchEvent::Start {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
        })
    }

    /// Moves a tracked touch. Returns [`PinchEvent::Change`] while pinching.
    pub fn touch_move(&mut self, id: u64, position: Point) -> Option<PinchEvent> {
        let Some(slot) = self.slot_of(id) else {
            tracing::trace!(id, "move for untracked touch ignored");
            return None;
        };
        let previous = self.distance();
        if let Some(touch) = &mut self.slots[slot] {
            touch.position = position;
        }
        let previous = previous?;
        let current = self.distance()?;
        Some(PinchEvent::Change { current, previous })
    }

    /// Releases a touch. Returns [`PinchEvent::End`] if a pinch was active.
    pub fn touch_end(&mut self, id: u64) -> Option<PinchEvent> {
        let slot = self.slot_of(id)?;
        let was_pinching = self.is_pinching();
        self.slots[slot] = None;
        if was_pinching {
            tracing::debug!("pinch ended");
            Some(PinchEvent::End)
        } else {
            None
        }
    }

    /// Returns `true` while two fingers are down.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.active_count() == 2
    }

    /// Number of tracked touches.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Point halfway between the fingers while pinching.
    #[must_use]
    pub fn midpoint(&self) -> Option<Point> {
        self.pair().map(|(a, b)| a.midpoint(b))
    }

    /// Current distance between the fingers while pinching.
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.pair().map(|(a, b)| a.distance(b))
    }

    /// Forgets all touches without emitting events.
    pub fn reset(&mut self) {
        self.slots = [None, None];
    }

    fn slot_of(&self, id: u64) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|t| t.id == id))
    }

    fn pair(&self) -> Option<(Point, Point)> {
        match self.slots {
            [Some(a), Some(b)] => Some((a.position, b.position)),
            _ => None,
        }
    }
}
