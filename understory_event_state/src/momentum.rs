// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial drag tracking with friction and elastic bounds.
//!
//! [`MomentumTracker`] owns a 2D value that follows a dragged pointer and
//! keeps moving after release, slowing by a friction factor on every
//! [`tick`](MomentumTracker::tick) until its speed falls below a stop
//! threshold. When bounds are configured, the value may overshoot them and
//! is pulled back elastically.
//!
//! Time is supplied by the caller in milliseconds, so the tracker is fully
//! deterministic.
//!
//! ## Phases
//!
//! `Idle → Tracking` on pointer down, `Tracking → Decelerating` on release
//! with enough speed (or out of bounds), `Decelerating → Idle` when motion
//! settles. A pointer down during deceleration cancels it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::momentum::{MomentumConfig, MomentumEvent, MomentumPhase, MomentumTracker};
//!
//! let mut tracker = MomentumTracker::new(MomentumConfig::default()).unwrap();
//! tracker.on_down(1, Point::new(0.0, 0.0), 0);
//! tracker.on_move(1, Point::new(100.0, 0.0), 50);
//! assert!(tracker.on_up(1, 50).is_none());
//! assert_eq!(tracker.phase(), MomentumPhase::Decelerating);
//!
//! let mut ticks = 0;
//! while let Some(event) = tracker.tick() {
//!     ticks += 1;
//!     if matches!(event, MomentumEvent::Stopped { .. }) {
//!         break;
//!     }
//! }
//! assert_eq!(tracker.phase(), MomentumPhase::Idle);
//! assert!(tracker.value().x > 100.0);
//! assert!(ticks < 100);
//! ```

use alloc::collections::VecDeque;
use core::fmt;
use core::ops::Range;

use kurbo::{Point, Vec2};

use crate::drag::DragState;

const STOP_THRESHOLD: f64 = 0.3;
const BOUNCE_DECELERATION: f64 = 0.04;
const BOUNCE_ACCELERATION: f64 = 0.11;
const REBOUND_ADJUST: f64 = 2.5;
/// Velocity samples are normalized to this many milliseconds per frame.
const FRAME_MS: f64 = 15.0;

/// Configuration for [`MomentumTracker`].
#[derive(Clone, Debug, PartialEq)]
pub struct MomentumConfig {
    /// Per-tick velocity retention, in `(0, 1)`.
    pub friction: f64,
    /// Scale applied to pointer movement.
    pub multiplier: f64,
    /// Rebound elastically from bounds instead of clamping.
    pub bounce: bool,
    /// Allowed range for x.
    pub bounds_x: Option<Range<f64>>,
    /// Allowed range for y.
    pub bounds_y: Option<Range<f64>>,
    /// Trailing window of samples used to estimate release velocity.
    pub sample_window_ms: i64,
    /// Release speed (per component) needed to start decelerating.
    pub release_threshold: f64,
    /// Deceleration ticks after which motion is forced to stop.
    pub max_decel_ticks: u32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction: 0.92,
            multiplier: 1.0,
            bounce: true,
            bounds_x: None,
            bounds_y: None,
            sample_window_ms: 100,
            release_threshold: 1.0,
            max_decel_ticks: 10_000,
        }
    }
}

/// Invalid momentum configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MomentumError {
    /// Friction must lie strictly between 0 and 1.
    InvalidFriction(f64),
    /// Multiplier must be finite and positive.
    InvalidMultiplier(f64),
}

impl fmt::Display for MomentumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFriction(v) => write!(f, "friction {v} is not in (0, 1)"),
            Self::InvalidMultiplier(v) => write!(f, "multiplier {v} is not finite and positive"),
        }
    }
}

impl core::error::Error for MomentumError {}

/// Where the tracker is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MomentumPhase {
    /// No pointer and no motion.
    Idle,
    /// Following a pressed pointer.
    Tracking,
    /// Coasting after release.
    Decelerating,
}

/// Value changes produced by the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MomentumEvent {
    /// The value moved by `delta`.
    Moved {
        /// Value after the move.
        value: Vec2,
        /// Change since the previous event.
        delta: Vec2,
    },
    /// Motion settled; `delta` is the final displacement.
    Stopped {
        /// Final value.
        value: Vec2,
        /// Change applied by the stopping step.
        delta: Vec2,
    },
}

impl MomentumEvent {
    /// Displacement carried by this event.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        match self {
            Self::Moved { delta, .. } | Self::Stopped { delta, .. } => *delta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    position: Point,
    time_ms: i64,
}

/// Velocity-tracking drag with frictional decay.
#[derive(Clone, Debug)]
pub struct MomentumTracker {
    config: MomentumConfig,
    stop_threshold: f64,
    drag: DragState,
    samples: VecDeque<Sample>,
    value: Vec2,
    velocity: Vec2,
    phase: MomentumPhase,
    paused: bool,
    decel_ticks: u32,
}

impl MomentumTracker {
    /// Creates a tracker, validating friction and multiplier.
    pub fn new(config: MomentumConfig) -> Result<Self, MomentumError> {
        validate_friction(config.friction)?;
        validate_multiplier(config.multiplier)?;
        Ok(Self {
            stop_threshold: STOP_THRESHOLD * config.multiplier,
            config,
            drag: DragState::default(),
            samples: VecDeque::new(),
            value: Vec2::ZERO,
            velocity: Vec2::ZERO,
            phase: MomentumPhase::Idle,
            paused: false,
            decel_ticks: 0,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MomentumPhase {
        self.phase
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> Vec2 {
        self.value
    }

    /// Current coasting velocity per tick.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Speed below which coasting stops.
    #[must_use]
    pub fn stop_threshold(&self) -> f64 {
        self.stop_threshold
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    /// Returns `true` while paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` while coasting.
    #[must_use]
    pub fn is_decelerating(&self) -> bool {
        self.phase == MomentumPhase::Decelerating
    }

    /// Returns `true` if `pointer_id` owns the drag being tracked.
    #[must_use]
    pub fn is_tracking(&self, pointer_id: u64) -> bool {
        self.phase == MomentumPhase::Tracking && self.drag.is_tracking(pointer_id)
    }

    /// Starts tracking `pointer_id` at `position`.
    ///
    /// Ignored while already tracking or paused. Cancels any coasting.
    pub fn on_down(&mut self, pointer_id: u64, position: Point, time_ms: i64) {
        if self.phase == MomentumPhase::Tracking || self.paused {
            tracing::trace!(pointer_id, paused = self.paused, "pointer down ignored");
            return;
        }
        self.velocity = Vec2::ZERO;
        self.decel_ticks = 0;
        self.samples.clear();
        self.drag.start(pointer_id, position);
        self.record(position, time_ms);
        self.phase = MomentumPhase::Tracking;
    }

    /// Follows the tracked pointer, returning the value change.
    pub fn on_move(&mut self, pointer_id: u64, position: Point, time_ms: i64) -> Option<MomentumEvent> {
        if self.phase != MomentumPhase::Tracking || !self.drag.is_tracking(pointer_id) {
            tracing::trace!(pointer_id, "move for untracked pointer ignored");
            return None;
        }
        let change = self.drag.update(pointer_id, position)?;
        self.record(position, time_ms);

        let before = self.value;
        let multiplier = self.config.multiplier;
        self.value += change * multiplier;
        if self.config.bounce {
            let diff = self.bounds_diff();
            if diff.x != 0.0 {
                self.value.x -= change.x * drag_damping(diff.x) * multiplier;
            }
            if diff.y != 0.0 {
                self.value.y -= change.y * drag_damping(diff.y) * multiplier;
            }
        } else {
            self.clamp_to_bounds();
        }
        Some(MomentumEvent::Moved {
            value: self.value,
            delta: self.value - before,
        })
    }

    /// Releases the tracked pointer.
    ///
    /// Starts coasting when the release is fast enough or the value sits out
    /// of bounds; otherwise returns [`MomentumEvent::Stopped`] right away.
    pub fn on_up(&mut self, pointer_id: u64, time_ms: i64) -> Option<MomentumEvent> {
        if self.phase != MomentumPhase::Tracking || !self.drag.is_tracking(pointer_id) {
            tracing::trace!(pointer_id, "release for untracked pointer ignored");
            return None;
        }
        if let Some(last) = self.drag.last_position() {
            self.record(last, time_ms);
        }
        self.drag.end();

        let first = self.samples.front().copied();
        let last = self.samples.back().copied();
        let (Some(first), Some(last)) = (first, last) else {
            return Some(self.stop(Vec2::ZERO));
        };
        if self.samples.len() < 2 {
            return Some(self.stop(Vec2::ZERO));
        }
        let elapsed = (last.time_ms - first.time_ms) as f64;
        let mut frames = elapsed / FRAME_MS / self.config.multiplier;
        if frames == 0.0 || !frames.is_finite() {
            frames = 1.0;
        }
        let velocity = (last.position - first.position) / frames;
        self.velocity = Vec2::new(finite_or_zero(velocity.x), finite_or_zero(velocity.y));

        let threshold = self.config.release_threshold;
        if self.velocity.x.abs() > threshold
            || self.velocity.y.abs() > threshold
            || !self.in_bounds()
        {
            self.phase = MomentumPhase::Decelerating;
            self.decel_ticks = 0;
            None
        } else {
            Some(self.stop(Vec2::ZERO))
        }
    }

    /// Advances coasting by one frame.
    ///
    /// Returns `None` when not decelerating.
    pub fn tick(&mut self) -> Option<MomentumEvent> {
        if self.phase != MomentumPhase::Decelerating {
            return None;
        }
        let before = self.value;
        self.velocity *= self.config.friction;
        self.value += self.velocity;
        self.decel_ticks += 1;

        let diff = self.bounds_diff();
        let moving = self.velocity.x.abs() > self.stop_threshold
            || self.velocity.y.abs() > self.stop_threshold;
        if !moving && diff == Vec2::ZERO {
            return Some(self.stop(self.value - before));
        }

        if self.decel_ticks >= self.config.max_decel_ticks {
            tracing::warn!(
                ticks = self.decel_ticks,
                "momentum did not settle, forcing stop"
            );
            self.clamp_to_bounds();
            return Some(self.stop(self.value - before));
        }

        if self.config.bounce {
            self.velocity.x = rebound(diff.x, self.velocity.x);
            self.velocity.y = rebound(diff.y, self.velocity.y);
        } else {
            if diff.x != 0.0 {
                self.velocity.x = 0.0;
            }
            if diff.y != 0.0 {
                self.velocity.y = 0.0;
            }
            self.clamp_to_bounds();
        }
        Some(MomentumEvent::Moved {
            value: self.value,
            delta: self.value - before,
        })
    }

    /// Ends tracking and ignores new pointer downs until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.drag.end();
        if self.phase == MomentumPhase::Tracking {
            self.phase = MomentumPhase::Idle;
        }
        self.paused = true;
    }

    /// Accepts pointer downs again.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Drops tracking and coasting without emitting events.
    pub fn cancel(&mut self) {
        self.drag.end();
        self.samples.clear();
        self.velocity = Vec2::ZERO;
        self.phase = MomentumPhase::Idle;
    }

    /// Overwrites the value.
    pub fn set_value(&mut self, value: Vec2) {
        self.value = value;
    }

    /// Changes the multiplier; the stop threshold scales with it.
    pub fn set_multiplier(&mut self, multiplier: f64) -> Result<(), MomentumError> {
        validate_multiplier(multiplier)?;
        self.config.multiplier = multiplier;
        self.stop_threshold = STOP_THRESHOLD * multiplier;
        Ok(())
    }

    /// Changes friction.
    pub fn set_friction(&mut self, friction: f64) -> Result<(), MomentumError> {
        validate_friction(friction)?;
        self.config.friction = friction;
        Ok(())
    }

    /// Sets or clears the x bounds.
    pub fn set_bounds_x(&mut self, bounds: Option<Range<f64>>) {
        self.config.bounds_x = bounds;
    }

    /// Sets or clears the y bounds.
    pub fn set_bounds_y(&mut self, bounds: Option<Range<f64>>) {
        self.config.bounds_y = bounds;
    }

    fn record(&mut self, position: Point, time_ms: i64) {
        let window = self.config.sample_window_ms;
        while self
            .samples
            .front()
            .is_some_and(|s| time_ms - s.time_ms > window)
        {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { position, time_ms });
    }

    fn stop(&mut self, delta: Vec2) -> MomentumEvent {
        self.phase = MomentumPhase::Idle;
        self.velocity = Vec2::ZERO;
        self.decel_ticks = 0;
        MomentumEvent::Stopped {
            value: self.value,
            delta,
        }
    }

    // Signed distance back into bounds per axis; zero when inside.
    fn bounds_diff(&self) -> Vec2 {
        Vec2::new(
            axis_diff(self.value.x, self.config.bounds_x.as_ref()),
            axis_diff(self.value.y, self.config.bounds_y.as_ref()),
        )
    }

    fn in_bounds(&self) -> bool {
        self.bounds_diff() == Vec2::ZERO
    }

    fn clamp_to_bounds(&mut self) {
        self.value.x = clamp_axis(self.value.x, self.config.bounds_x.as_ref());
        self.value.y = clamp_axis(self.value.y, self.config.bounds_y.as_ref());
    }
}

fn clamp_axis(value: f64, bounds: Option<&Range<f64>>) -> f64 {
    match bounds {
        Some(b) if value < b.start => b.start,
        Some(b) if value > b.end => b.end,
        _ => value,
    }
}

fn axis_diff(value: f64, bounds: Option<&Range<f64>>) -> f64 {
    match bounds {
        Some(b) if value < b.start => b.start - value,
        Some(b) if value > b.end => b.end - value,
        _ => 0.0,
    }
}

fn rebound(diff: f64, velocity: f64) -> f64 {
    if diff == 0.0 {
        velocity
    } else if diff * velocity <= 0.0 {
        velocity + diff * BOUNCE_DECELERATION
    } else {
        let adjust = if diff > 0.0 {
            REBOUND_ADJUST
        } else {
            -REBOUND_ADJUST
        };
        (diff + adjust) * BOUNCE_ACCELERATION
    }
}

// 0.55 at the edge, growing with distance past it, never above 1.
fn drag_damping(overshoot: f64) -> f64 {
    let d = overshoot.abs();
    (0.000_005 * d * d + 0.0001 * d + 0.55).min(1.0)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn validate_friction(friction: f64) -> Result<(), MomentumError> {
    if friction > 0.0 && friction < 1.0 {
        Ok(())
    } else {
        Err(MomentumError::InvalidFriction(friction))
    }
}

fn validate_multiplier(multiplier: f64) -> Result<(), MomentumError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(MomentumError::InvalidMultiplier(multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn tracker() -> MomentumTracker {
        MomentumTracker::new(MomentumConfig::default()).unwrap()
    }

    fn run_to_stop(tracker: &mut MomentumTracker) -> (u32, Vec2) {
        let mut ticks = 0;
        let mut total = Vec2::ZERO;
        while let Some(event) = tracker.tick() {
            ticks += 1;
            total += event.delta();
            if matches!(event, MomentumEvent::Stopped { .. }) {
                break;
            }
        }
        (ticks, total)
    }

    #[test]
    fn rejects_bad_config() {
        let bad = MomentumConfig {
            friction: 1.0,
            ..MomentumConfig::default()
        };
        assert_eq!(
            MomentumTracker::new(bad).unwrap_err(),
            MomentumError::InvalidFriction(1.0)
        );
        let bad = MomentumConfig {
            multiplier: 0.0,
            ..MomentumConfig::default()
        };
        assert_eq!(
            MomentumTracker::new(bad).unwrap_err(),
            MomentumError::InvalidMultiplier(0.0)
        );
        assert_eq!(
            MomentumError::InvalidFriction(2.0).to_string(),
            "friction 2 is not in (0, 1)"
        );
    }

    #[test]
    fn drag_moves_value_by_pointer_delta() {
        let mut t = tracker();
        t.on_down(1, Point::new(10.0, 10.0), 0);
        assert_eq!(t.phase(), MomentumPhase::Tracking);
        let event = t.on_move(1, Point::new(15.0, 7.0), 16).unwrap();
        assert_eq!(event.delta(), Vec2::new(5.0, -3.0));
        assert_eq!(t.value(), Vec2::new(5.0, -3.0));
    }

    #[test]
    fn tracking_is_per_pointer() {
        let mut t = tracker();
        assert!(!t.is_tracking(1));
        t.on_down(1, Point::ZERO, 0);
        assert!(t.is_tracking(1));
        assert!(!t.is_tracking(2));
        t.on_move(1, Point::new(100.0, 0.0), 50);
        assert_eq!(t.on_up(1, 50), None);
        assert!(t.is_decelerating());
        assert!(!t.is_tracking(1));
    }

    #[test]
    fn fast_release_decelerates_then_stops() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        t.on_move(1, Point::new(100.0, 0.0), 50);
        assert_eq!(t.on_up(1, 50), None);
        // 100px over 50ms is 30 per 15ms frame.
        assert!((t.velocity().x - 30.0).abs() < 1e-9);

        let (ticks, total) = run_to_stop(&mut t);
        // 30 * 0.92^n drops to 0.3 after 56 ticks.
        assert_eq!(ticks, 56);
        assert!(total.x > 0.0);
        assert_eq!(t.phase(), MomentumPhase::Idle);
        assert!((t.value().x - (100.0 + total.x)).abs() < 1e-9);
    }

    #[test]
    fn slow_release_stops_immediately() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        t.on_move(1, Point::new(1.0, 0.0), 90);
        let event = t.on_up(1, 100).unwrap();
        assert!(matches!(event, MomentumEvent::Stopped { .. }));
        assert_eq!(t.phase(), MomentumPhase::Idle);
    }

    #[test]
    fn release_without_moves_stops() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        // The down sample ages out before the release sample is recorded.
        let event = t.on_up(1, 500).unwrap();
        assert_eq!(
            event,
            MomentumEvent::Stopped {
                value: Vec2::ZERO,
                delta: Vec2::ZERO
            }
        );
    }

    #[test]
    fn stale_samples_fall_out_of_window() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        t.on_move(1, Point::new(200.0, 0.0), 10);
        // Held still for a long time before release.
        t.on_move(1, Point::new(200.0, 0.0), 1000);
        let event = t.on_up(1, 1000);
        assert!(matches!(event, Some(MomentumEvent::Stopped { .. })));
    }

    #[test]
    fn down_cancels_deceleration() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        t.on_move(1, Point::new(100.0, 0.0), 50);
        t.on_up(1, 50);
        t.tick();
        t.on_down(2, Point::new(5.0, 5.0), 70);
        assert_eq!(t.phase(), MomentumPhase::Tracking);
        assert_eq!(t.velocity(), Vec2::ZERO);
        assert_eq!(t.tick(), None);
    }

    #[test]
    fn foreign_pointer_is_ignored() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        assert_eq!(t.on_move(2, Point::new(50.0, 0.0), 10), None);
        assert_eq!(t.on_up(2, 10), None);
        assert_eq!(t.phase(), MomentumPhase::Tracking);
    }

    #[test]
    fn paused_tracker_ignores_downs() {
        let mut t = tracker();
        t.on_down(1, Point::ZERO, 0);
        t.pause();
        assert_eq!(t.phase(), MomentumPhase::Idle);
        t.on_down(2, Point::ZERO, 5);
        assert_eq!(t.phase(), MomentumPhase::Idle);
        t.resume();
        t.on_down(2, Point::ZERO, 10);
        assert_eq!(t.phase(), MomentumPhase::Tracking);
    }

    #[test]
    fn drag_past_bounds_is_damped() {
        let config = MomentumConfig {
            bounds_x: Some(0.0..50.0),
            ..MomentumConfig::default()
        };
        let mut t = MomentumTracker::new(config).unwrap();
        t.on_down(1, Point::ZERO, 0);
        t.on_move(1, Point::new(50.0, 0.0), 10);
        assert_eq!(t.value().x, 50.0);
        t.on_move(1, Point::new(70.0, 0.0), 20);
        // 20px of movement, a bit under half of it applied past the edge.
        assert!(t.value().x > 50.0 && t.value().x < 60.0, "{}", t.value().x);
    }

    #[test]
    fn drag_without_bounce_clamps() {
        let config = MomentumConfig {
            bounds_x: Some(0.0..50.0),
            bounce: false,
            ..MomentumConfig::default()
        };
        let mut t = MomentumTracker::new(config).unwrap();
        t.on_down(1, Point::ZERO, 0);
        t.on_move(1, Point::new(80.0, 0.0), 10);
        assert_eq!(t.value().x, 50.0);
    }

    #[test]
    fn out_of_bounds_release_rebounds_inside() {
        let config = MomentumConfig {
            bounds_x: Some(0.0..50.0),
            ..MomentumConfig::default()
        };
        let mut t = MomentumTracker::new(config).unwrap();
        t.set_value(Vec2::new(80.0, 0.0));
        t.on_down(1, Point::ZERO, 0);
        // Release in place, out of bounds: coasting begins to pull back.
        assert_eq!(t.on_up(1, 0), None);
        assert!(t.is_decelerating());
        let (ticks, _) = run_to_stop(&mut t);
        assert!(ticks < 10_000);
        let x = t.value().x;
        assert!((0.0..=50.0).contains(&x), "{x}");
    }

    #[test]
    fn tick_cap_forces_stop_in_bounds() {
        let config = MomentumConfig {
            bounds_x: Some(0.0..50.0),
            max_decel_ticks: 3,
            ..MomentumConfig::default()
        };
        let mut t = MomentumTracker::new(config).unwrap();
        t.set_value(Vec2::new(500.0, 0.0));
        t.on_down(1, Point::ZERO, 0);
        t.on_up(1, 0);
        let (ticks, _) = run_to_stop(&mut t);
        assert_eq!(ticks, 3);
        assert_eq!(t.value().x, 50.0);
    }

    #[test]
    fn multiplier_scales_threshold() {
        let mut t = tracker();
        t.set_multiplier(2.0).unwrap();
        assert!((t.stop_threshold() - 0.6).abs() < 1e-12);
        assert!(t.set_multiplier(f64::NAN).is_err());
        assert!(t.set_friction(0.0).is_err());
        assert_eq!(t.config().multiplier, 2.0);
    }
}
