// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits for things that can be panned, zoomed and pinned.
//!
//! Hosts that only need one capability can accept `impl Zoomable` (say)
//! rather than a concrete controller.

use kurbo::{Point, Vec2};

use crate::controller::ViewController;
use crate::modes::PinCorner;
use crate::state::PinConfig;

/// A view whose center can move.
pub trait Pannable {
    /// World-space center.
    fn center(&self) -> Point;
    /// Moves the center to a world-space point.
    fn set_center(&mut self, center: Point);
    /// Pans by a screen-space distance.
    fn pan_by_pixels(&mut self, delta: Vec2);
}

/// A view with a clamped zoom factor.
pub trait Zoomable {
    /// Current zoom.
    fn zoom(&self) -> f64;
    /// Sets the zoom, clamped into [`Zoomable::zoom_limits`].
    fn set_zoom(&mut self, zoom: f64);
    /// Multiplies the zoom by `factor` keeping the screen point `anchor` fixed.
    fn zoom_about(&mut self, anchor: Point, factor: f64);
    /// `(min, max)` zoom.
    fn zoom_limits(&self) -> (f64, f64);
}

/// A view whose origin can be pinned to a corner.
pub trait Pinnable {
    /// Current pin configuration.
    fn pin(&self) -> PinConfig;
    /// Pins the origin to `corner`.
    fn set_pin_corner(&mut self, corner: PinCorner);
    /// Sets the distance of the pinned origin from its corner.
    fn set_pin_margin(&mut self, margin_px: f64);
}

impl Pannable for ViewController {
    fn center(&self) -> Point {
        Self::center(self)
    }

    fn set_center(&mut self, center: Point) {
        Self::set_center(self, center);
    }

    fn pan_by_pixels(&mut self, delta: Vec2) {
        Self::pan_by_pixels(self, delta);
    }
}

impl Zoomable for ViewController {
    fn zoom(&self) -> f64 {
        Self::zoom(self)
    }

    fn set_zoom(&mut self, zoom: f64) {
        Self::set_zoom(self, zoom);
    }

    fn zoom_about(&mut self, anchor: Point, factor: f64) {
        Self::zoom_about(self, anchor, factor);
    }

    fn zoom_limits(&self) -> (f64, f64) {
        Self::zoom_limits(self)
    }
}

impl Pinnable for ViewController {
    fn pin(&self) -> PinConfig {
        Self::pin(self)
    }

    fn set_pin_corner(&mut self, corner: PinCorner) {
        Self::set_pin_corner(self, corner);
    }

    fn set_pin_margin(&mut self, margin_px: f64) {
        Self::set_pin_margin(self, margin_px);
    }
}
