// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};

use crate::modes::{PinCorner, ResizeAnchor, ZoomAnchor};

/// World-space center and zoom of the plane.
///
/// `zoom` is pixels per world unit; `1 / zoom` is world units per pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// World x at the viewport center.
    pub center_x: f64,
    /// World y at the viewport center (y grows upward).
    pub center_y: f64,
    /// Pixels per world unit.
    pub zoom: f64,
}

impl ViewState {
    /// Creates a view state.
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom,
        }
    }

    /// World-space center as a point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// World units per pixel.
    #[must_use]
    pub fn units_per_px(&self) -> f64 {
        1.0 / self.zoom
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Viewport size in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as floating point.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Same viewport with each dimension raised to at least one pixel.
    #[must_use]
    pub fn at_least_one_px(self) -> Self {
        Self::new(self.width.max(1), self.height.max(1))
    }
}

/// Origin pinning configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinConfig {
    /// Corner the origin is pinned to.
    pub corner: PinCorner,
    /// Distance of the origin from that corner, in pixels.
    pub margin_px: f64,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            corner: PinCorner::None,
            margin_px: 10.0,
        }
    }
}

/// Configuration for [`crate::ViewController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Smallest allowed zoom.
    pub min_zoom: f64,
    /// Largest allowed zoom.
    pub max_zoom: f64,
    /// Origin pinning.
    pub pin: PinConfig,
    /// Fixed point while zooming.
    pub zoom_anchor: ZoomAnchor,
    /// Fixed point while resizing.
    pub resize_anchor: ResizeAnchor,
    /// Primary-button drags pan. Secondary-button drags always pan.
    pub pan_enabled: bool,
    /// Zoom impulses are applied.
    pub zoom_enabled: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.05,
            max_zoom: 20.0,
            pin: PinConfig::default(),
            zoom_anchor: ZoomAnchor::Pointer,
            resize_anchor: ResizeAnchor::TopLeft,
            pan_enabled: true,
            zoom_enabled: true,
        }
    }
}

/// Invalid view configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewError {
    /// Zoom bounds must be finite, positive and ordered.
    InvalidZoomBounds {
        /// Rejected minimum.
        min: f64,
        /// Rejected maximum.
        max: f64,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomBounds { min, max } => {
                write!(f, "invalid zoom bounds: min {min}, max {max}")
            }
        }
    }
}

impl core::error::Error for ViewError {}

pub(crate) fn validate_zoom_bounds(min: f64, max: f64) -> Result<(), ViewError> {
    if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
        Ok(())
    } else {
        Err(ViewError::InvalidZoomBounds { min, max })
    }
}

/// A pan and zoom impulse in screen space.
///
/// `dx`/`dy` are pixels of pointer travel. `dz` is a zoom impulse in pixels:
/// positive zooms out, negative zooms in. The anchor is the screen point
/// the zoom is centered on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanZoomDelta {
    /// Horizontal travel in pixels.
    pub dx: f64,
    /// Vertical travel in pixels (screen y grows downward).
    pub dy: f64,
    /// Zoom impulse.
    pub dz: f64,
    /// Anchor x in screen pixels.
    pub anchor_x: f64,
    /// Anchor y in screen pixels.
    pub anchor_y: f64,
    /// The drag came from the secondary button.
    pub is_secondary_button: bool,
}

impl PanZoomDelta {
    /// A pure pan.
    #[must_use]
    pub fn pan(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::default()
        }
    }

    /// A pure zoom impulse about `anchor`.
    #[must_use]
    pub fn zoom(dz: f64, anchor: Point) -> Self {
        Self {
            dz,
            anchor_x: anchor.x,
            anchor_y: anchor.y,
            ..Self::default()
        }
    }

    /// Anchor as a point.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.anchor_x, self.anchor_y)
    }

    /// Returns `true` when every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite()
            && self.dy.is_finite()
            && self.dz.is_finite()
            && self.anchor_x.is_finite()
            && self.anchor_y.is_finite()
    }

    /// Returns `true` when the delta neither pans nor zooms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.dz == 0.0
    }

    /// Folds `later` into `self`: motion sums, the later anchor wins and the
    /// secondary flag is sticky.
    pub fn merge(&mut self, later: &Self) {
        self.dx += later.dx;
        self.dy += later.dy;
        self.dz += later.dz;
        self.anchor_x = later.anchor_x;
        self.anchor_y = later.anchor_y;
        self.is_secondary_button |= later.is_secondary_button;
    }
}

/// Notifications queued by [`crate::ViewController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// The view state changed.
    Updated(ViewState),
    /// A delta panned the view. Not emitted while a corner is pinned.
    Panning,
    /// The pinned corner changed.
    OriginPinChanged(PinCorner),
    /// The pin margin changed.
    PinMarginChanged(f64),
    /// The zoom anchor mode changed.
    ZoomAnchorChanged(ZoomAnchor),
}
