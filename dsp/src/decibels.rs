//! Conversion between linear gain and decibels.
//!
//! Both directions are floored at [`MINUS_INFINITY_DB`], so silence never
//! produces non-finite values that would leak into smoothing filters.

use libm::{log10f, powf};

/// Level treated as silence.
pub const MINUS_INFINITY_DB: f32 = -100.0;

/// Convert linear gain to decibels.
///
/// Gain of zero, negative gain and NaN all map to [`MINUS_INFINITY_DB`].
#[must_use]
pub fn from_gain(gain: f32) -> f32 {
    if gain > 0.0 {
        f32::max(MINUS_INFINITY_DB, 20.0 * log10f(gain))
    } else {
        MINUS_INFINITY_DB
    }
}

/// Convert decibels to linear gain.
///
/// Anything at or below [`MINUS_INFINITY_DB`] is silenced completely.
#[must_use]
pub fn to_gain(decibels: f32) -> f32 {
    if decibels > MINUS_INFINITY_DB {
        powf(10.0, decibels * 0.05)
    } else {
        0.0
    }
}
