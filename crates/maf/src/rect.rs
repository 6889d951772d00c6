//! Integer half-open rectangles and position+size rectangles.
//!
//! `Rect` holds the points with `min.x <= x < max.x` and `min.y <= y < max.y`.
//! It is well-formed when `min <= max` on both axes; `from_corners` always
//! builds a well-formed one.

use std::fmt;

use crate::Vec2;

/// Pixel-grid coordinate. Axes increase right and down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned half-open integer rectangle `[min, max)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Rectangle spanning two corners, swapped as needed so `min <= max`.
    pub fn from_corners(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Width. Saturates at `i64::MAX` for corners at the coordinate limits.
    #[inline]
    pub fn dx(&self) -> i64 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Height. Saturates like [`Rect::dx`].
    #[inline]
    pub fn dy(&self) -> i64 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Width and height as a point.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.dx(), self.dy())
    }

    /// True if the rectangle contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// True if both rectangles are non-empty and share at least one point.
    /// Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Offset from `min` to the visual center, `(dx/2, dy/2)`. Used as the
    /// pivot when rotating an image about its own center.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.dx() as f64 / 2.0, self.dy() as f64 / 2.0)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Free-function form of [`Rect::origin`].
#[inline]
pub fn origin_from_rect(rect: &Rect) -> Vec2 {
    rect.origin()
}

/// Rectangle as a float origin plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PosSizeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PosSizeRect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Integer rectangle by truncating both corners toward zero.
    pub fn to_rect(&self) -> Rect {
        // `as` truncates toward zero and saturates out-of-range values.
        Rect {
            min: Point::new(self.x as i64, self.y as i64),
            max: Point::new(
                (self.x + self.width) as i64,
                (self.y + self.height) as i64,
            ),
        }
    }
}

impl From<PosSizeRect> for Rect {
    fn from(r: PosSizeRect) -> Self {
        r.to_rect()
    }
}
