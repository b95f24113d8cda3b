// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponential smoothing for wheel input.
//!
//! Wheel notches move a target; [`WheelSmoother::tick`] then closes a fixed
//! fraction of the remaining distance each frame, so discrete clicks turn
//! into a short glide.
//!
//! ```
//! use understory_event_state::wheel::{WheelConfig, WheelSmoother};
//!
//! let mut wheel = WheelSmoother::new(WheelConfig::default());
//! wheel.push(1.0);
//! let mut total = 0.0;
//! while let Some(step) = wheel.tick() {
//!     total += step;
//! }
//! assert!(total > 60.0 && total <= 80.0);
//! assert!(!wheel.is_moving());
//! ```

/// Configuration for [`WheelSmoother`] and wheel unit conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Target distance added per notch.
    pub speed: f64,
    /// Fraction divisor; each tick moves `remaining / smooth`.
    pub smooth: f64,
    /// Pixel delta that counts as one notch.
    pub pixels_per_notch: f64,
    /// Pixels per line for line-based deltas.
    pub line_height: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            speed: 80.0,
            smooth: 12.0,
            pixels_per_notch: 100.0,
            line_height: 20.0,
        }
    }
}

/// Smooths wheel notches into per-frame deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSmoother {
    config: WheelConfig,
    target: f64,
    current: f64,
    moving: bool,
}

impl WheelSmoother {
    /// Creates an idle smoother.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            target: 0.0,
            current: 0.0,
            moving: false,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Adds `notches` worth of motion. Non-finite input is dropped.
    pub fn push(&mut self, notches: f64) {
        if !notches.is_finite() {
            tracing::debug!(notches, "non-finite wheel input dropped");
            return;
        }
        if notches == 0.0 {
            return;
        }
        self.target += notches * self.config.speed;
        self.moving = true;
    }

    /// Returns this frame's delta, or `None` once settled.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.moving {
            return None;
        }
        let delta = (self.target - self.current) / self.config.smooth;
        if delta.abs() <= 1.0 || !delta.is_finite() {
            self.target -= self.current;
            self.current = 0.0;
            self.moving = false;
            return None;
        }
        self.current += delta;
        Some(delta)
    }

    /// Returns `true` while motion is pending.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Drops any pending motion.
    pub fn cancel(&mut self) {
        self.target = 0.0;
        self.current = 0.0;
        self.moving = false;
    }
}

impl Default for WheelSmoother {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn idle_smoother_emits_nothing() {
        let mut wheel = WheelSmoother::default();
        assert_eq!(wheel.tick(), None);
        wheel.push(0.0);
        wheel.push(f64::NAN);
        assert!(!wheel.is_moving());
    }

    #[test]
    fn first_step_is_a_fraction_of_the_target() {
        let mut wheel = WheelSmoother::default();
        wheel.push(-1.5);
        assert_eq!(wheel.tick(), Some(-10.0));
    }

    #[test]
    fn steps_shrink_geometrically() {
        let mut wheel = WheelSmoother::default();
        wheel.push(3.0);
        let steps: Vec<f64> = core::iter::from_fn(|| wheel.tick()).collect();
        assert!(steps.windows(2).all(|w| w[1] < w[0]));
        assert!(steps.iter().all(|s| *s > 1.0));
    }

    #[test]
    fn rebases_after_settling() {
        let mut wheel = WheelSmoother::default();
        wheel.push(1.0);
        while wheel.tick().is_some() {}
        let leftover = wheel.target;
        assert_eq!(wheel.current, 0.0);
        assert!(leftover.abs() <= 12.0, "{leftover}");
    }

    #[test]
    fn cancel_drops_motion() {
        let mut wheel = WheelSmoother::default();
        wheel.push(5.0);
        wheel.tick();
        wheel.cancel();
        assert_eq!(wheel.tick(), None);
        assert_eq!(wheel.target, 0.0);
    }
}
