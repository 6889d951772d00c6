//! Flat re-export surface for callers that want every helper from one path.
//!
//! Prefer `maf::prelude` for day-to-day imports; this module also carries the
//! seeded `*_with` random variants and the rounding helpers.

// Angles
pub use crate::angle::{
    clerp_angle, clerp_degrees, degrees_to_radians, radians_to_degrees, wrap_degrees,
    wrap_radians, ClerpCfg, SMOOTHNESS,
};
// Directions
pub use crate::direction::{
    angle_between, angle_between_reversed, angle_from_direction, direction_from_degrees,
    direction_from_radians, vector_to_degrees,
};
// Rectangles
pub use crate::rect::{origin_from_rect, Point, PosSizeRect, Rect};
// Random draws
pub use crate::random::{
    pick_random, pick_random_with, random_below, random_below_with, random_from_1_inclusive,
    random_from_1_inclusive_with, random_in_range_inclusive, random_in_range_inclusive_with,
    RandomError,
};
// Rounding
pub use crate::round::{round3, round4, round_to};
pub use crate::Vec2;
