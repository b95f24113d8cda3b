// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: per-pointer movement deltas and total offsets.
//!
//! A drag belongs to one pointer id. Moves from any other pointer are
//! ignored, which is how mouse drags coexist with stray touch input.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(7, Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! assert_eq!(drag.update(7, Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! // Another pointer does not move this drag.
//! assert_eq!(drag.update(8, Point::new(90.0, 90.0)), None);
//!
//! assert_eq!(drag.total_offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer's drag across move events.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    pointer_id: Option<u64>,
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragState {
    /// Starts tracking `pointer_id` from `pos`, replacing any previous drag.
    pub fn start(&mut self, pointer_id: u64, pos: Point) {
        self.pointer_id = Some(pointer_id);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position, returning the movement since the last one.
    ///
    /// Returns `None` when no drag is active or `pointer_id` is not the
    /// pointer that started it.
    pub fn update(&mut self, pointer_id: u64, pos: Point) -> Option<Vec2> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Offset of `current_pos` from where the drag started.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer_id.is_some()
    }

    /// Returns `true` if `pointer_id` owns the active drag.
    #[must_use]
    pub fn is_tracking(&self, pointer_id: u64) -> bool {
        self.pointer_id == Some(pointer_id)
    }

    /// Pointer that owns the active drag.
    #[must_use]
    pub fn pointer_id(&self) -> Option<u64> {
        self.pointer_id
    }

    /// Most recently recorded position.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.last_position(), None);
        assert_eq!(drag.total_offset(Point::ZERO), None);
    }

    #[test]
    fn updates_are_incremental() {
        let mut drag = DragState::default();
        drag.start(1, Point::ZERO);
        assert_eq!(drag.update(1, Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(1, Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(1, Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(drag.total_offset(Point::new(6.0, 7.0)), Some(Vec2::new(6.0, 7.0)));
    }

    #[test]
    fn foreign_pointer_is_ignored() {
        let mut drag = DragState::default();
        drag.start(1, Point::new(10.0, 10.0));
        assert_eq!(drag.update(2, Point::new(50.0, 50.0)), None);
        assert_eq!(drag.last_position(), Some(Point::new(10.0, 10.0)));
        assert!(drag.is_tracking(1));
        assert!(!drag.is_tracking(2));
    }

    #[test]
    fn update_without_drag_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(0, Point::new(1.0, 1.0)), None);
        assert_eq!(drag.last_position(), None);
    }

    #[test]
    fn restart_replaces_previous_drag() {
        let mut drag = DragState::default();
        drag.start(1, Point::ZERO);
        drag.update(1, Point::new(10.0, 10.0));
        drag.start(2, Point::new(50.0, 60.0));
        assert_eq!(drag.pointer_id(), Some(2));
        assert_eq!(drag.total_offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragState::default();
        drag.start(3, Point::new(1.0, 2.0));
        drag.end();
        assert_eq!(drag, DragState::default());
        // Ending twice is harmless.
        drag.end();
        assert!(!drag.is_dragging());
    }
}
