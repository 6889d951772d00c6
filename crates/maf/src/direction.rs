//! Unit directions and the angles they point at.
//!
//! Screen space: +Y is down, so 90° is `(0, 1)` and 270° is `(0, -1)`.
//! Direction components are rounded to 3 decimals, angles to 4.

use crate::angle::{degrees_to_radians, radians_to_degrees};
use crate::round::{round3, round4};
use crate::Vec2;

/// Unit direction for an angle in radians.
#[inline]
pub fn direction_from_radians(angle: f64) -> Vec2 {
    Vec2::new(round3(angle.cos()), round3(angle.sin()))
}

/// Unit direction for an angle in degrees. The angle is first converted with
/// `degrees_to_radians`, so it carries that rounding.
#[inline]
pub fn direction_from_degrees(degrees: f64) -> Vec2 {
    direction_from_radians(degrees_to_radians(degrees))
}

/// Angle of `v` in radians, in `(-π, π]`.
#[inline]
pub fn angle_from_direction(v: Vec2) -> f64 {
    round4(v.y.atan2(v.x))
}

/// Angle of `v` in degrees, in `(-180, 180]`.
#[inline]
pub fn vector_to_degrees(v: Vec2) -> f64 {
    round4(radians_to_degrees(v.y.atan2(v.x)))
}

/// Angle of the difference vector `from - to`, in radians.
///
/// Note: this is the heading pointing from `to` toward `from`, not the angle
/// enclosed by the two vectors.
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f64 {
    angle_from_direction(from - to)
}

/// Same body as [`angle_between`] with the parameters declared `(to, from)`.
///
/// Positionally `angle_between_reversed(a, b) == angle_between(b, a)`.
/// Kept as is for existing callers; swapping the labels does not swap the
/// difference order inside.
#[inline]
pub fn angle_between_reversed(to: Vec2, from: Vec2) -> f64 {
    angle_from_direction(from - to)
}
