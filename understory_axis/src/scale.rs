// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Picks the smallest "nice" step that is at least `min_step`.
///
/// Candidates are `steps` scaled by `10^k` and then by `10^(k+1)`, where
/// `k = floor(log10(min_step))`, scanned in that order. With the usual ladder
/// `[1, 2, 5]` this yields `…, 0.5, 1, 2, 5, 10, 20, 50, …`.
///
/// `steps` must be non‑empty, strictly positive and ascending, and should lie
/// in `[1, 10)`. Returns `None` for invalid input or when no candidate is
/// large enough.
///
/// ```
/// use understory_axis::nice_step;
///
/// let ladder = [1.0, 2.0, 5.0];
/// assert_eq!(nice_step(20.0, &ladder), Some(20.0));
/// assert_eq!(nice_step(21.0, &ladder), Some(50.0));
/// assert_eq!(nice_step(0.3, &ladder), Some(0.5));
/// assert_eq!(nice_step(0.0, &ladder), None);
/// ```
#[must_use]
pub fn nice_step(min_step: f64, steps: &[f64]) -> Option<f64> {
    if !(min_step.is_finite() && min_step > 0.0) {
        return None;
    }
    if steps.is_empty() || !steps.is_sorted() || steps.iter().any(|s| !(s.is_finite() && *s > 0.0))
    {
        return None;
    }

    let power = libm::floor(libm::log10(min_step));
    for p in [power, power + 1.0] {
        for &s in steps {
            let candidate = scale_by_power_of_ten(s, p);
            if candidate >= min_step {
                return Some(candidate);
            }
        }
    }
    None
}

/// Returns `true` if `value` lies within `eps` of a multiple of `step`.
///
/// `step` must be positive.
#[must_use]
pub fn is_multiple(value: f64, step: f64, eps: f64) -> bool {
    let rem = libm::fmod(value, step).abs();
    rem < eps || step - rem < eps
}

// Dividing for negative powers keeps results like `0.2` at the nearest double.
fn scale_by_power_of_ten(value: f64, power: f64) -> f64 {
    if power >= 0.0 {
        value * libm::pow(10.0, power)
    } else {
        value / libm::pow(10.0, -power)
    }
}
