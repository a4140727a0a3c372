//! Placed symbols and their anchors

use std::ops::Index;

use crate::error::SchematicError;
use crate::layout::{Anchors, Orientation, Point};

/// A symbol after placement.
///
/// Every anchor is in drawing coordinates and fixed for the life of the
/// tile, so tiles can be freely copied around as placement targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    kind: &'static str,
    center: Point,
    size: (f64, f64),
    orientation: Orientation,
    anchors: Anchors,
}

impl Tile {
    pub(crate) fn new(
        kind: &'static str,
        center: Point,
        size: (f64, f64),
        orientation: Orientation,
        anchors: Anchors,
    ) -> Self {
        Self {
            kind,
            center,
            size,
            orientation,
            anchors,
        }
    }

    /// The symbol kind, e.g. `"Resistor"`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Width and height as drawn
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.anchors.get(name)
    }

    /// Look up an anchor, failing with the list of valid names
    pub fn pin(&self, name: &str) -> Result<Point, SchematicError> {
        self.anchors
            .get(name)
            .ok_or_else(|| SchematicError::unknown_anchor(self.kind, name, self.anchors.names()))
    }

    fn compass(&self, name: &str) -> Point {
        self.anchors.get(name).unwrap_or(self.center)
    }

    pub fn c(&self) -> Point {
        self.center
    }

    pub fn north(&self) -> Point {
        self.compass("N")
    }

    pub fn north_east(&self) -> Point {
        self.compass("NE")
    }

    pub fn east(&self) -> Point {
        self.compass("E")
    }

    pub fn south_east(&self) -> Point {
        self.compass("SE")
    }

    pub fn south(&self) -> Point {
        self.compass("S")
    }

    pub fn south_west(&self) -> Point {
        self.compass("SW")
    }

    pub fn west(&self) -> Point {
        self.compass("W")
    }

    pub fn north_west(&self) -> Point {
        self.compass("NW")
    }
}

impl Index<&str> for Tile {
    type Output = Point;

    fn index(&self, name: &str) -> &Point {
        &self.anchors[name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        let mut anchors = Anchors::default();
        anchors.insert("C", Point::new(10.0, 10.0));
        anchors.insert("N", Point::new(10.0, 0.0));
        anchors.insert("p", Point::new(20.0, 10.0));
        Tile::new(
            "Resistor",
            Point::new(10.0, 10.0),
            (20.0, 20.0),
            Orientation::horizontal(),
            anchors,
        )
    }

    #[test]
    fn test_lookup() {
        let t = tile();
        assert_eq!(t.get("p"), Some(Point::new(20.0, 10.0)));
        assert_eq!(t["N"], Point::new(10.0, 0.0));
        assert_eq!(t.north(), Point::new(10.0, 0.0));
        assert_eq!(t.c(), t.center());
    }

    #[test]
    fn test_unknown_pin() {
        let err = tile().pin("q").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Resistor: no anchor named 'q' (valid anchors: C, N, p)"
        );
    }
}
