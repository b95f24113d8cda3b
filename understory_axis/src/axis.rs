// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

/// Which screen direction an [`Axis`] runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal axis; ratios grow left to right.
    X,
    /// Vertical axis; world values grow upward while ratios grow downward.
    Y,
}

/// Error returned by [`Axis`] mappings when the axis cannot be evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisError {
    /// The visible range is zero or not finite.
    DegenerateAxis {
        /// The offending range value.
        range: f64,
    },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAxis { range } => {
                write!(f, "axis range {range} is zero or not finite")
            }
        }
    }
}

impl core::error::Error for AxisError {}

/// Snapshot of one axis of the view: visible world span and its mapping to `0..1`.
///
/// `range` is `extent_px * units_per_px` and `offset` is the world value at
/// the start of the range, so the view center sits at `offset + range / 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    orientation: Orientation,
    offset: f64,
    range: f64,
    units_per_px: f64,
}

impl Axis {
    /// Creates an axis centered on `center` spanning `extent_px` pixels.
    ///
    /// `units_per_px` is the world size of one pixel, i.e. the reciprocal of
    /// the view zoom.
    #[must_use]
    pub fn new(orientation: Orientation, center: f64, extent_px: f64, units_per_px: f64) -> Self {
        let range = extent_px * units_per_px;
        Self {
            orientation,
            offset: center - range * 0.5,
            range,
            units_per_px,
        }
    }

    /// Returns the axis orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the world value at ratio `0` for X (or ratio `1` for Y).
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the visible world span.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Returns the world size of one pixel.
    #[must_use]
    pub fn units_per_px(&self) -> f64 {
        self.units_per_px
    }

    /// Returns `true` if the range is zero, negative or not finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.range.is_finite() && self.range > 0.0 && self.offset.is_finite())
    }

    /// Returns the visible world values as `offset..offset + range`.
    #[must_use]
    pub fn visible_range(&self) -> Range<f64> {
        self.offset..self.offset + self.range
    }

    /// Maps a world value to a normalized ratio across the viewport.
    ///
    /// X: `(v - offset) / range`. Y: `1 - (v - offset) / range`.
    pub fn to_pixel_ratio(&self, value: f64) -> Result<f64, AxisError> {
        self.check()?;
        let t = (value - self.offset) / self.range;
        Ok(match self.orientation {
            Orientation::X => t,
            Orientation::Y => 1.0 - t,
        })
    }

    /// Maps a normalized ratio back to a world value.
    pub fn value_at_ratio(&self, ratio: f64) -> Result<f64, AxisError> {
        self.check()?;
        let t = match self.orientation {
            Orientation::X => ratio,
            Orientation::Y => 1.0 - ratio,
        };
        Ok(self.offset + t * self.range)
    }

    /// Maps a world value to a pixel position along an extent of `extent_px`.
    pub fn to_pixel(&self, value: f64, extent_px: f64) -> Result<f64, AxisError> {
        Ok(self.to_pixel_ratio(value)? * extent_px)
    }

    /// Produces normalized line endpoints for each value.
    ///
    /// Each value yields four numbers `x0, y0, x1, y1`. An X axis produces
    /// vertical lines `[t, 0, t, 1]`; a Y axis produces horizontal lines
    /// `[0, t, 1, t]`.
    pub fn to_coords(&self, values: &[f64]) -> Result<Vec<f64>, AxisError> {
        let mut coords = Vec::with_capacity(values.len() * 4);
        for &value in values {
            let t = self.to_pixel_ratio(value)?;
            match self.orientation {
                Orientation::X => coords.extend_from_slice(&[t, 0.0, t, 1.0]),
                Orientation::Y => coords.extend_from_slice(&[0.0, t, 1.0, t]),
            }
        }
        Ok(coords)
    }

    fn check(&self) -> Result<(), AxisError> {
        if self.is_degenerate() {
            Err(AxisError::DegenerateAxis { range: self.range })
        } else {
            Ok(())
        }
    }
}
