// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Viewport corner that the world origin can be pinned to.
///
/// While a corner is set, [`crate::ViewController`] recomputes the center on
/// every update so the origin stays [`crate::PinConfig::margin_px`] pixels
/// in from that corner, regardless of zoom or pan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PinCorner {
    /// The origin moves freely.
    #[default]
    None,
    /// Origin near the top-left corner.
    TopLeft,
    /// Origin near the top-right corner.
    TopRight,
    /// Origin near the bottom-left corner.
    BottomLeft,
    /// Origin near the bottom-right corner.
    BottomRight,
}

impl PinCorner {
    /// Returns `true` for the two left corners.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Returns `true` for the two top corners.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Which screen point stays fixed while zooming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ZoomAnchor {
    /// The delta's anchor, usually the cursor or pinch midpoint.
    #[default]
    Pointer,
    /// The viewport center.
    Center,
}

/// Which screen point keeps its world position when the viewport is resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ResizeAnchor {
    /// The top-left corner; content does not shift as the window grows.
    #[default]
    TopLeft,
    /// The viewport center.
    Center,
}
