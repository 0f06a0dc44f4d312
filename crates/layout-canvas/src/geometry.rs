//! Canvas-space geometry in layout units.

use serde::{Deserialize, Serialize};
use std::ops::Add;
use tree_composer::Position;

/// A point in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Shorthand constructor for a [`Point`].
pub const fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

impl Point {
    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        point(position.x, position.y)
    }
}

impl From<Point> for Position {
    fn from(point: Point) -> Self {
        Position::new(point.x, point.y)
    }
}

/// A width and height in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Shorthand constructor for a [`Size`].
pub const fn size(width: f64, height: f64) -> Size {
    Size { width, height }
}

/// An axis-aligned rectangle: top-left origin plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rectangle of the given size centred on `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            point(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }

    pub fn center(&self) -> Point {
        point(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// The bottom-right corner.
    pub fn max(&self) -> Point {
        point(
            self.origin.x + self.size.width,
            self.origin.y + self.size.height,
        )
    }

    /// Check whether a point lies inside (edges included on the top-left).
    pub fn contains(&self, p: &Point) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x < max.x && p.y >= self.origin.y && p.y < max.y
    }

    /// Check whether two rectangles overlap.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let (a, b) = (self.max(), other.max());
        self.origin.x < b.x && other.origin.x < a.x && self.origin.y < b.y && other.origin.y < a.y
    }

    /// The smallest rectangle containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let (a, b) = (self.max(), other.max());
        let origin = point(self.origin.x.min(other.origin.x), self.origin.y.min(other.origin.y));
        let max = point(a.x.max(b.x), a.y.max(b.y));
        Bounds::new(origin, size(max.x - origin.x, max.y - origin.y))
    }
}
