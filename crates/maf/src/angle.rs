//! Radian/degree conversion, wrapping and clerp.
//!
//! - `wrap_*` normalize an angle into one full turn centered on zero.
//! - `clerp_*` move a current angle a fixed fraction of the way toward a
//!   target along the shortest rotation. Call once per tick to animate.

use std::f64::consts::{PI, TAU};

use crate::round::round4;

/// Fraction of the remaining angular distance covered by one clerp step.
pub const SMOOTHNESS: f64 = 0.20;

/// Radians to degrees, rounded to 4 decimals.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    round4(radians * (180.0 / PI))
}

/// Degrees to radians, rounded to 4 decimals.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    round4(degrees * (PI / 180.0))
}

/// Reduce `angle` into `[-half, half]` by whole turns of `2 * half`.
///
/// Matches repeated subtraction/addition of a full turn: values already in
/// range come back untouched, values above land in `(-half, half]`, values
/// below land in `[-half, half)`. Uses the exact float remainder so it
/// terminates for any magnitude.
fn wrap_symmetric(angle: f64, half: f64, turn: f64) -> f64 {
    if angle > half {
        half - (half - angle).rem_euclid(turn)
    } else if angle < -half {
        -half + (angle + half).rem_euclid(turn)
    } else {
        angle
    }
}

/// Wrap radians into `[-π, π]`.
#[inline]
pub fn wrap_radians(angle: f64) -> f64 {
    wrap_symmetric(angle, PI, TAU)
}

/// Wrap degrees into `[-180, 180]`.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    wrap_symmetric(angle, 180.0, 360.0)
}

/// Clerp step configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClerpCfg {
    /// Fraction of the wrapped delta applied per step.
    pub smoothness: f64,
}

impl Default for ClerpCfg {
    fn default() -> Self {
        Self {
            smoothness: SMOOTHNESS,
        }
    }
}

impl ClerpCfg {
    /// One smoothing step in radians: `from + wrap(to - from) * smoothness`.
    #[inline]
    pub fn step_radians(&self, from: f64, to: f64) -> f64 {
        from + wrap_radians(to - from) * self.smoothness
    }

    /// One smoothing step in degrees.
    #[inline]
    pub fn step_degrees(&self, from: f64, to: f64) -> f64 {
        from + wrap_degrees(to - from) * self.smoothness
    }
}

/// Clerp in radians with the default smoothness.
#[inline]
pub fn clerp_angle(from: f64, to: f64) -> f64 {
    ClerpCfg::default().step_radians(from, to)
}

/// Clerp in degrees with the default smoothness.
#[inline]
pub fn clerp_degrees(from: f64, to: f64) -> f64 {
    ClerpCfg::default().step_degrees(from, to)
}
