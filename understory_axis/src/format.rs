// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

const MAX_DECIMALS: usize = 12;

/// Number of decimals needed to print multiples of `step` exactly.
///
/// Returns `0` for whole steps and for non‑finite or zero input.
#[must_use]
pub fn label_decimals(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let mut scale = 1.0_f64;
    for decimals in 0..=MAX_DECIMALS {
        let scaled = step * scale;
        if (scaled - libm::round(scaled)).abs() <= 1e-9 * scaled.max(1.0) {
            return decimals;
        }
        scale *= 10.0;
    }
    MAX_DECIMALS
}

/// Formats a tick value using the precision implied by `step`.
///
/// Trailing zeros are trimmed and negative zero prints as `"0"`, so values
/// carrying floating point noise print as the round number they stand for.
///
/// ```
/// use understory_axis::format_label;
///
/// assert_eq!(format_label(1.000_000_000_1, 1.0), "1");
/// assert_eq!(format_label(0.1 + 0.2, 0.1), "0.3");
/// assert_eq!(format_label(-0.000_001, 0.5), "0");
/// assert_eq!(format_label(250.0, 50.0), "250");
/// ```
#[must_use]
pub fn format_label(value: f64, step: f64) -> String {
    let decimals = label_decimals(step);
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
