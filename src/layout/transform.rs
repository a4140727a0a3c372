//! Orientation of symbols and the transformation it implies.
//!
//! ## Orientation Strings
//!
//! An orientation is written as a short string of independent flags:
//! - `h` / `v`: lay the symbol out horizontally or vertically
//! - `|`: mirror about the vertical centerline (x is negated)
//! - `-`: mirror about the horizontal centerline (y is negated)
//!
//! Flag order does not matter and repeating a flag has no effect.
//!
//! ## Transformation Order
//!
//! Each symbol is authored along one axis. Naming the other axis rotates
//! the local geometry by -90° (`(x, y) -> (y, -x)` with y pointing down).
//! Rotation always happens before mirroring, so the mirror flags describe
//! the picture as it appears after rotation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::layout::types::Point;

/// Layout axis of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    fn flag(self) -> char {
        match self {
            Axis::Horizontal => 'h',
            Axis::Vertical => 'v',
        }
    }
}

/// Orientation flags of a single component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    /// Requested axis, `None` keeps the symbol as authored
    pub axis: Option<Axis>,
    /// Mirror about the vertical centerline (`|`)
    pub flip_x: bool,
    /// Mirror about the horizontal centerline (`-`)
    pub flip_y: bool,
}

impl Orientation {
    pub fn horizontal() -> Self {
        Self {
            axis: Some(Axis::Horizontal),
            ..Self::default()
        }
    }

    pub fn vertical() -> Self {
        Self {
            axis: Some(Axis::Vertical),
            ..Self::default()
        }
    }

    /// Add the `|` flag
    pub fn flipped_x(mut self) -> Self {
        self.flip_x = true;
        self
    }

    /// Add the `-` flag
    pub fn flipped_y(mut self) -> Self {
        self.flip_y = true;
        self
    }

    /// Parse an orientation string such as `"v|-"`.
    ///
    /// Unrecognized characters are ignored. If both axes are named the last
    /// one wins.
    pub fn parse(s: &str) -> Self {
        let mut orientation = Self::default();
        for c in s.chars() {
            match c {
                'h' | 'H' => orientation.set_axis(Axis::Horizontal, s),
                'v' | 'V' => orientation.set_axis(Axis::Vertical, s),
                '|' => orientation.flip_x = true,
                '-' => orientation.flip_y = true,
                ' ' => {}
                other => log::debug!("ignoring '{other}' in orientation '{s}'"),
            }
        }
        orientation
    }

    fn set_axis(&mut self, axis: Axis, source: &str) {
        if self.axis.is_some_and(|a| a != axis) {
            log::warn!("orientation '{source}' names both axes, using '{}'", axis.flag());
        }
        self.axis = Some(axis);
    }

    pub fn is_horizontal(&self) -> bool {
        self.axis == Some(Axis::Horizontal)
    }

    pub fn is_vertical(&self) -> bool {
        self.axis == Some(Axis::Vertical)
    }
}

impl FromStr for Orientation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Orientation {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(axis) = self.axis {
            write!(f, "{}", axis.flag())?;
        }
        if self.flip_x {
            write!(f, "|")?;
        }
        if self.flip_y {
            write!(f, "-")?;
        }
        Ok(())
    }
}

/// Maps local (authored) coordinates to oriented coordinates.
///
/// The result is still relative to the symbol center; translation into the
/// drawing happens separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrientTransform {
    rotate: bool,
    flip_x: bool,
    flip_y: bool,
}

impl OrientTransform {
    /// Build the transform for a symbol that must be rotated when the
    /// orientation names `rotate_on`.
    pub fn new(orientation: Orientation, rotate_on: Axis) -> Self {
        Self {
            rotate: orientation.axis == Some(rotate_on),
            flip_x: orientation.flip_x,
            flip_y: orientation.flip_y,
        }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        !self.rotate && !self.flip_x && !self.flip_y
    }

    /// Whether the -90° rotation is applied
    pub fn rotates(&self) -> bool {
        self.rotate
    }

    /// Apply rotation, then the x mirror, then the y mirror.
    pub fn apply(&self, point: Point) -> Point {
        let Point { mut x, mut y } = point;
        if self.rotate {
            (x, y) = (y, -x);
        }
        if self.flip_x {
            x = -x;
        }
        if self.flip_y {
            y = -y;
        }
        Point::new(x, y)
    }

    /// Width and height of a `width` x `height` symbol after orientation
    pub fn extent(&self, width: f64, height: f64) -> (f64, f64) {
        if self.rotate {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// The SVG `transform` attribute placing a locally drawn symbol at
    /// `center`.
    ///
    /// SVG applies the listed operations right to left, so the rotation is
    /// applied first, matching [`OrientTransform::apply`].
    pub fn svg_transform(&self, center: Point) -> String {
        let mut ops = vec![format!("translate({},{})", center.x, center.y)];
        if self.flip_x {
            ops.push("scale(-1,1)".to_string());
        }
        if self.flip_y {
            ops.push("scale(1,-1)".to_string());
        }
        if self.rotate {
            ops.push("rotate(-90)".to_string());
        }
        ops.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let o = Orientation::parse("v|-");
        assert_eq!(o.axis, Some(Axis::Vertical));
        assert!(o.flip_x);
        assert!(o.flip_y);

        let o = Orientation::parse("|");
        assert_eq!(o.axis, None);
        assert!(o.flip_x);
        assert!(!o.flip_y);
    }

    #[test]
    fn test_parse_is_order_insensitive_and_idempotent() {
        assert_eq!(Orientation::parse("-|v"), Orientation::parse("v|-"));
        assert_eq!(Orientation::parse("||"), Orientation::parse("|"));
        assert_eq!(Orientation::parse("h--"), Orientation::parse("h-"));
    }

    #[test]
    fn test_parse_last_axis_wins() {
        assert_eq!(Orientation::parse("hv").axis, Some(Axis::Vertical));
        assert_eq!(Orientation::parse("vh").axis, Some(Axis::Horizontal));
    }

    #[test]
    fn test_display_round_trip() {
        let o = Orientation::vertical().flipped_x().flipped_y();
        assert_eq!(o.to_string(), "v|-");
        assert_eq!(Orientation::parse(&o.to_string()), o);
    }

    #[test]
    fn test_identity_transform() {
        let t = OrientTransform::new(Orientation::horizontal(), Axis::Vertical);
        assert!(t.is_identity());
        assert_eq!(t.apply(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_rotation_only_on_trigger_axis() {
        let p = Point::new(50.0, 0.0);
        let rotated = OrientTransform::new(Orientation::vertical(), Axis::Vertical);
        assert_eq!(rotated.apply(p), Point::new(0.0, -50.0));

        let untouched = OrientTransform::new(Orientation::vertical(), Axis::Horizontal);
        assert_eq!(untouched.apply(p), p);
    }

    #[test]
    fn test_flips() {
        let p = Point::new(3.0, 4.0);
        let fx = OrientTransform::new(Orientation::parse("|"), Axis::Vertical);
        assert_eq!(fx.apply(p), Point::new(-3.0, 4.0));
        let fy = OrientTransform::new(Orientation::parse("-"), Axis::Vertical);
        assert_eq!(fy.apply(p), Point::new(3.0, -4.0));
    }

    #[test]
    fn test_rotation_precedes_reflection() {
        let all = OrientTransform::new(Orientation::parse("-|v"), Axis::Vertical);
        let rotate = OrientTransform::new(Orientation::vertical(), Axis::Vertical);
        for p in [
            Point::new(1.0, 2.0),
            Point::new(-7.5, 0.25),
            Point::new(0.0, -3.0),
        ] {
            let r = rotate.apply(p);
            assert_eq!(all.apply(p), Point::new(-r.x, -r.y));
        }
    }

    #[test]
    fn test_extent_swaps_when_rotated() {
        let t = OrientTransform::new(Orientation::vertical(), Axis::Vertical);
        assert_eq!(t.extent(100.0, 75.0), (75.0, 100.0));
        assert_eq!(OrientTransform::identity().extent(100.0, 75.0), (100.0, 75.0));
    }

    #[test]
    fn test_svg_transform() {
        let t = OrientTransform::new(Orientation::parse("v|"), Axis::Vertical);
        assert_eq!(
            t.svg_transform(Point::new(150.0, 200.0)),
            "translate(150,200) scale(-1,1) rotate(-90)"
        );
        assert_eq!(
            OrientTransform::identity().svg_transform(Point::new(0.5, 0.0)),
            "translate(0.5,0)"
        );
    }
}
