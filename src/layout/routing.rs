//! Wire routing between waypoints

use std::fmt;
use std::str::FromStr;

use crate::error::SchematicError;

use super::types::{midpoint, Point};

/// Corner convention used between consecutive waypoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireKind {
    /// Straight segments, no corners inserted
    #[default]
    Plain,
    /// `|-`: vertical first, then horizontal
    VerticalHorizontal,
    /// `-|`: horizontal first, then vertical
    HorizontalVertical,
    /// `|-|`: vertical, horizontal at the mid height, vertical
    VerticalHorizontalVertical,
    /// `-|-`: horizontal, vertical at the mid width, horizontal
    HorizontalVerticalHorizontal,
}

impl WireKind {
    pub const ALL: [WireKind; 5] = [
        WireKind::Plain,
        WireKind::VerticalHorizontal,
        WireKind::HorizontalVertical,
        WireKind::VerticalHorizontalVertical,
        WireKind::HorizontalVerticalHorizontal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WireKind::Plain => "plain",
            WireKind::VerticalHorizontal => "|-",
            WireKind::HorizontalVertical => "-|",
            WireKind::VerticalHorizontalVertical => "|-|",
            WireKind::HorizontalVerticalHorizontal => "-|-",
        }
    }

    /// Corners to insert between `prev` and `next`.
    ///
    /// Segments that already share an x or y coordinate get none.
    pub fn corners(&self, prev: Point, next: Point) -> Vec<Point> {
        if *self == WireKind::Plain || prev.x == next.x || prev.y == next.y {
            return vec![];
        }
        match self {
            WireKind::Plain => vec![],
            WireKind::VerticalHorizontal => vec![Point::new(prev.x, next.y)],
            WireKind::HorizontalVertical => vec![Point::new(next.x, prev.y)],
            WireKind::VerticalHorizontalVertical => {
                let ymid = (prev.y + next.y) / 2.0;
                vec![Point::new(prev.x, ymid), Point::new(next.x, ymid)]
            }
            WireKind::HorizontalVerticalHorizontal => {
                let xmid = (prev.x + next.x) / 2.0;
                vec![Point::new(xmid, prev.y), Point::new(xmid, next.y)]
            }
        }
    }
}

impl FromStr for WireKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let expected: Vec<&str> = WireKind::ALL.iter().map(|k| k.as_str()).collect();
                SchematicError::unknown_kind("Wire", s, &expected)
            })
    }
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route a wire through `waypoints`, inserting corners per `kind`.
///
/// Returns the full list of polyline vertices, which always starts and ends
/// with the first and last waypoint.
pub fn route(waypoints: &[Point], kind: WireKind) -> Result<Vec<Point>, SchematicError> {
    let (first, rest) = match waypoints.split_first() {
        Some(split) if waypoints.len() >= 2 => split,
        _ => {
            return Err(SchematicError::TooFewWaypoints {
                count: waypoints.len(),
            })
        }
    };

    let mut path = vec![*first];
    let mut prev = *first;
    for &next in rest {
        path.extend(kind.corners(prev, next));
        path.push(next);
        prev = next;
    }
    Ok(path)
}

/// Summary points of a routed wire
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    /// First waypoint
    pub begin: Point,
    /// Last waypoint
    pub end: Point,
    /// Midpoint of `begin` and `end`
    pub mid: Point,
    /// Polyline vertices after corner insertion
    pub path: Vec<Point>,
}

impl Wire {
    pub fn new(waypoints: &[Point], kind: WireKind) -> Result<Self, SchematicError> {
        let path = route(waypoints, kind)?;
        let begin = waypoints[0];
        let end = waypoints[waypoints.len() - 1];
        Ok(Self {
            begin,
            end,
            mid: midpoint(begin, end),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_horizontal_then_vertical() {
        let path = route(&[p(0.0, 0.0), p(100.0, 50.0)], WireKind::HorizontalVertical).unwrap();
        assert_eq!(path, vec![p(0.0, 0.0), p(100.0, 0.0), p(100.0, 50.0)]);
    }

    #[test]
    fn test_vertical_then_horizontal() {
        let path = route(&[p(0.0, 0.0), p(100.0, 50.0)], WireKind::VerticalHorizontal).unwrap();
        assert_eq!(path, vec![p(0.0, 0.0), p(0.0, 50.0), p(100.0, 50.0)]);
    }

    #[test]
    fn test_vertical_horizontal_vertical() {
        let path = route(
            &[p(0.0, 0.0), p(100.0, 50.0)],
            WireKind::VerticalHorizontalVertical,
        )
        .unwrap();
        insta::assert_debug_snapshot!(path, @r"
        [
            Point {
                x: 0.0,
                y: 0.0,
            },
            Point {
                x: 0.0,
                y: 25.0,
            },
            Point {
                x: 100.0,
                y: 25.0,
            },
            Point {
                x: 100.0,
                y: 50.0,
            },
        ]
        ");
    }

    #[test]
    fn test_horizontal_vertical_horizontal() {
        let path = route(
            &[p(0.0, 0.0), p(100.0, 50.0)],
            WireKind::HorizontalVerticalHorizontal,
        )
        .unwrap();
        assert_eq!(
            path,
            vec![p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0), p(100.0, 50.0)]
        );
    }

    #[test]
    fn test_corner_counts() {
        let pair = [p(10.0, 20.0), p(-30.0, 70.0)];
        let counts: Vec<(WireKind, usize)> = WireKind::ALL
            .into_iter()
            .map(|kind| (kind, route(&pair, kind).unwrap().len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (WireKind::Plain, 2),
                (WireKind::VerticalHorizontal, 3),
                (WireKind::HorizontalVertical, 3),
                (WireKind::VerticalHorizontalVertical, 4),
                (WireKind::HorizontalVerticalHorizontal, 4),
            ]
        );
    }

    #[test]
    fn test_aligned_segments_untouched() {
        for pair in [[p(0.0, 0.0), p(0.0, 80.0)], [p(5.0, 7.0), p(-40.0, 7.0)]] {
            for kind in WireKind::ALL {
                assert_eq!(route(&pair, kind).unwrap(), pair.to_vec(), "kind {kind}");
            }
        }
    }

    #[test]
    fn test_corners_per_segment() {
        let path = route(
            &[p(0.0, 0.0), p(50.0, 50.0), p(50.0, 100.0), p(0.0, 150.0)],
            WireKind::HorizontalVertical,
        )
        .unwrap();
        assert_eq!(
            path,
            vec![
                p(0.0, 0.0),
                p(50.0, 0.0),
                p(50.0, 50.0),
                p(50.0, 100.0),
                p(0.0, 100.0),
                p(0.0, 150.0),
            ]
        );
    }

    #[test]
    fn test_too_few_waypoints() {
        for points in [vec![], vec![p(1.0, 1.0)]] {
            let err = route(&points, WireKind::Plain).unwrap_err();
            assert!(matches!(err, SchematicError::TooFewWaypoints { count } if count == points.len()));
        }
    }

    #[test]
    fn test_wire_kind_parse() {
        for kind in WireKind::ALL {
            assert_eq!(kind.to_string().parse::<WireKind>().unwrap(), kind);
        }
        let err = "|--".parse::<WireKind>().unwrap_err();
        assert!(err.to_string().contains("unknown kind '|--'"));
    }

    #[test]
    fn test_wire_summary_points() {
        let wire = Wire::new(
            &[p(0.0, 0.0), p(40.0, 10.0), p(100.0, 50.0)],
            WireKind::Plain,
        )
        .unwrap();
        assert_eq!(wire.begin, p(0.0, 0.0));
        assert_eq!(wire.end, p(100.0, 50.0));
        assert_eq!(wire.mid, p(50.0, 25.0));
        assert_eq!(wire.path.len(), 3);
    }
}
