// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_event_state::momentum::MomentumError;
use understory_view2d::ViewError;

/// Invalid [`crate::PlaneConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaneError {
    /// The view configuration was rejected.
    View(ViewError),
    /// The drag momentum configuration was rejected.
    Momentum(MomentumError),
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "view configuration: {err}"),
            Self::Momentum(err) => write!(f, "gesture configuration: {err}"),
        }
    }
}

impl core::error::Error for PlaneError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Momentum(err) => Some(err),
        }
    }
}

impl From<ViewError> for PlaneError {
    fn from(err: ViewError) -> Self {
        Self::View(err)
    }
}

impl From<MomentumError> for PlaneError {
    fn from(err: MomentumError) -> Self {
        Self::Momentum(err)
    }
}
