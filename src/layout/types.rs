//! Core geometric types and point utilities

use std::ops::{Add, Sub};

/// A 2D point in the drawing plane (y grows downward, as in SVG)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The global origin
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Shift a point in both the x and y directions
pub fn shift(p: Point, dx: f64, dy: f64) -> Point {
    Point::new(p.x + dx, p.y + dy)
}

/// Shift a point in the x direction
pub fn shift_x(p: Point, dx: f64) -> Point {
    Point::new(p.x + dx, p.y)
}

/// Shift a point in the y direction
pub fn shift_y(p: Point, dy: f64) -> Point {
    Point::new(p.x, p.y + dy)
}

/// Replace the x coordinate of `p`
pub fn with_x(p: Point, x: f64) -> Point {
    Point::new(x, p.y)
}

/// Replace the y coordinate of `p`
pub fn with_y(p: Point, y: f64) -> Point {
    Point::new(p.x, y)
}

/// Replace the x coordinate of `p` with the x coordinate of `source`
pub fn with_x_of(p: Point, source: Point) -> Point {
    Point::new(source.x, p.y)
}

/// Replace the y coordinate of `p` with the y coordinate of `source`
pub fn with_y_of(p: Point, source: Point) -> Point {
    Point::new(p.x, source.y)
}

/// Replace the x coordinate of `p` with the smallest x among `others`.
///
/// An empty slice leaves `p` unchanged.
pub fn with_min_x(p: Point, others: &[Point]) -> Point {
    others
        .iter()
        .map(|o| o.x)
        .reduce(f64::min)
        .map_or(p, |x| with_x(p, x))
}

/// Replace the x coordinate of `p` with the largest x among `others`.
pub fn with_max_x(p: Point, others: &[Point]) -> Point {
    others
        .iter()
        .map(|o| o.x)
        .reduce(f64::max)
        .map_or(p, |x| with_x(p, x))
}

/// Replace the y coordinate of `p` with the smallest y among `others`.
pub fn with_min_y(p: Point, others: &[Point]) -> Point {
    others
        .iter()
        .map(|o| o.y)
        .reduce(f64::min)
        .map_or(p, |y| with_y(p, y))
}

/// Replace the y coordinate of `p` with the largest y among `others`.
pub fn with_max_y(p: Point, others: &[Point]) -> Point {
    others
        .iter()
        .map(|o| o.y)
        .reduce(f64::max)
        .map_or(p, |y| with_y(p, y))
}

/// The point midway between two points
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

/// Average the x coordinates, keep the y of `p1`
pub fn midpoint_x(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, p1.y)
}

/// Average the y coordinates, keep the x of `p1`
pub fn midpoint_y(p1: Point, p2: Point) -> Point {
    Point::new(p1.x, (p1.y + p2.y) / 2.0)
}

/// Axis-aligned box in drawing coordinates, `y` growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box of the given size centered on `center`
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Create a zero-sized box at a point
    pub fn at_point(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest box covering both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Grow each side by its own margin
    pub fn pad(&self, left: f64, top: f64, right: f64, bottom: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - left,
            self.y - top,
            self.width + left + right,
            self.height + top + bottom,
        )
    }
}
