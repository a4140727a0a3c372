//! Path data for curved symbol outlines
//!
//! Builds the SVG path `d` attribute from a sequence of segments.

use crate::layout::Point;

/// A segment in a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Cubic Bezier curve in absolute coordinates
    CubicTo { c1: Point, c2: Point, end: Point },
    /// Cubic Bezier curve relative to the current point (SVG `c`)
    RelCubicTo { c1: Point, c2: Point, end: Point },
    /// Close path back to start
    Close,
}

/// A path ready for SVG rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: impl Into<Point>) -> Self {
        self.segments.push(PathSegment::MoveTo(p.into()));
        self
    }

    pub fn line_to(mut self, p: impl Into<Point>) -> Self {
        self.segments.push(PathSegment::LineTo(p.into()));
        self
    }

    pub fn cubic_to(
        mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        self.segments.push(PathSegment::CubicTo {
            c1: c1.into(),
            c2: c2.into(),
            end: end.into(),
        });
        self
    }

    /// Append a relative cubic; control points are measured from the
    /// current point, not from each other.
    pub fn rel_cubic_to(
        mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        self.segments.push(PathSegment::RelCubicTo {
            c1: c1.into(),
            c2: c2.into(),
            end: end.into(),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut parts = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            parts.push(match seg {
                PathSegment::MoveTo(p) => format!("M{} {}", p.x, p.y),
                PathSegment::LineTo(p) => format!("L{} {}", p.x, p.y),
                PathSegment::CubicTo { c1, c2, end } => format!(
                    "C{} {} {} {} {} {}",
                    c1.x, c1.y, c2.x, c2.y, end.x, end.y
                ),
                PathSegment::RelCubicTo { c1, c2, end } => format!(
                    "c{} {} {} {} {} {}",
                    c1.x, c1.y, c2.x, c2.y, end.x, end.y
                ),
                PathSegment::Close => "Z".to_string(),
            });
        }
        parts.join(" ")
    }
}

/// Convert a list of points to an SVG `points` attribute
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        assert_eq!(PathData::new().to_svg_d(), "");
        assert!(PathData::new().is_empty());
    }

    #[test]
    fn test_line_path() {
        let d = PathData::new()
            .move_to((0.0, 0.0))
            .line_to((100.0, 0.0))
            .line_to((100.0, 100.0))
            .close()
            .to_svg_d();
        assert_eq!(d, "M0 0 L100 0 L100 100 Z");
    }

    #[test]
    fn test_cubic_segments() {
        let d = PathData::new()
            .move_to((-10.0, 5.0))
            .cubic_to((-5.0, 0.0), (5.0, 0.0), (10.0, 5.0))
            .rel_cubic_to((0.0, -15.0), (20.0, -15.0), (20.0, 0.0))
            .to_svg_d();
        assert_eq!(d, "M-10 5 C-5 0 5 0 10 5 c0 -15 20 -15 20 0");
    }

    #[test]
    fn test_points_attr() {
        let pts = [Point::new(0.0, 1.5), Point::new(-2.0, 3.0)];
        assert_eq!(points_attr(&pts), "0,1.5 -2,3");
    }
}
