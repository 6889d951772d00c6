//! Decimal rounding.
//!
//! Ties round away from zero (`f64::round`). One helper serves every caller;
//! values are widened to `f64` before rounding.

/// Round `value` to `decimals` places: `round(value * 10^decimals) / 10^decimals`.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round to 3 decimals (direction components).
#[inline]
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// Round to 4 decimals (angles).
#[inline]
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}
