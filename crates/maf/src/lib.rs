//! Angle, direction and rectangle helpers for screen-space 2D games.
//!
//! Conventions
//! - 0 rad / 0° points along +X; positive angles turn toward +Y, which is
//!   "down" on screen.
//! - Conversions round their results (radians/degrees to 4 decimals, direction
//!   components to 3) so that cardinal directions compare exactly.
//! - Everything is a pure function over `Copy` values.
//!
//! Layout
//! - `round`: decimal rounding.
//! - `angle`: radian/degree conversion, wrapping, clerp.
//! - `direction`: unit directions ⇄ angles.
//! - `rect`: integer half-open rectangles and position+size rectangles.
//! - `random`: uniform integers and element picking.

pub mod angle;
pub mod api;
pub mod direction;
pub mod random;
pub mod rect;
pub mod round;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2;

/// 2D direction or displacement in screen space.
pub type Vec2 = Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{
        clerp_angle, clerp_degrees, degrees_to_radians, radians_to_degrees, wrap_degrees,
        wrap_radians, ClerpCfg, SMOOTHNESS,
    };
    pub use crate::direction::{
        angle_between, angle_between_reversed, angle_from_direction, direction_from_degrees,
        direction_from_radians, vector_to_degrees,
    };
    pub use crate::random::{
        pick_random, random_below, random_from_1_inclusive, random_in_range_inclusive,
        RandomError,
    };
    pub use crate::rect::{origin_from_rect, Point, PosSizeRect, Rect};
    pub use crate::Vec2;
}

#[cfg(test)]
mod tests;
