//! Geometry module - grid cells, rotation pivots and the 90° transform
//!
//! Two coordinate kinds are used:
//! - [`Point`]: an integer grid cell `(x: column, y: row)`, rows growing downward.
//! - [`Pivot`]: a continuous point a piece rotates about; it may sit on a
//!   half-integer position (between cells) for the I and O shapes.
//!
//! Both are immutable values. Shifting returns a new value.

use crate::types::Direction;

/// An integer grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn shift(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Offset by an arbitrary amount.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A rotation centre, possibly between cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

impl Pivot {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn shift(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + f64::from(dx), self.y + f64::from(dy))
    }

    /// Rotate this pivot about another pivot, without snapping to the grid.
    pub fn rotate90(self, about: Pivot, reverse: bool) -> Self {
        let (x, y) = rotate_relative(self.x - about.x, self.y - about.y, reverse);
        Self::new(x + about.x, y + about.y)
    }
}

impl From<Point> for Pivot {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Rotate `point` through 90° about `pivot`.
///
/// With rows growing downward, `reverse = false` turns clockwise on screen and
/// `reverse = true` is its exact inverse. The result is snapped to the nearest
/// cell; a point that maps onto itself comes back unchanged.
///
/// ```
/// use term_tetris_core::geometry::{rotate90, Pivot, Point};
///
/// let centre = Pivot::new(5.0, 5.0);
/// let right = Point::new(6, 5);
/// let below = rotate90(right, centre, false);
/// assert_eq!(below, Point::new(5, 6));
/// assert_eq!(rotate90(below, centre, true), right);
/// ```
pub fn rotate90(point: Point, pivot: Pivot, reverse: bool) -> Point {
    let (x, y) = rotate_relative(
        f64::from(point.x) - pivot.x,
        f64::from(point.y) - pivot.y,
        reverse,
    );
    let rotated = Point::new((x + pivot.x).round() as i32, (y + pivot.y).round() as i32);
    if rotated == point {
        return point;
    }
    rotated
}

/// Apply the matrix `[[0, -s], [s, 0]]` with `s = 1` (or `-1` when reversed).
#[inline]
fn rotate_relative(x: f64, y: f64, reverse: bool) -> (f64, f64) {
    let sin = if reverse { -1.0 } else { 1.0 };
    // cos(90°) = 0
    (-y * sin, x * sin)
}
