//! Independent and controlled sources, and ground

use std::str::FromStr;

use crate::error::SchematicError;
use crate::layout::{Axis, CompassStyle, PinSet, Point};
use crate::renderer::PathData;

use super::{parse_kind, Annotator, Canvas, Symbol, TileOptions};

const SIGN_SIZE: f64 = 14.0;
const ARROW_WIDTH: f64 = 5.0;

/// Normalized noise trace, x from -1 to 1
const NOISE: [(f64, f64); 51] = [
    (-1.0, -0.76),
    (-0.96, -0.29),
    (-0.92, 0.19),
    (-0.88, 0.62),
    (-0.84, -0.8),
    (-0.8, -0.71),
    (-0.76, 0.35),
    (-0.72, 0.54),
    (-0.68, 0.87),
    (-0.64, 0.02),
    (-0.6, -0.42),
    (-0.56, 0.59),
    (-0.52, 0.08),
    (-0.48, -0.87),
    (-0.44, 0.34),
    (-0.4, 0.0),
    (-0.36, -0.55),
    (-0.32, 0.77),
    (-0.28, -0.41),
    (-0.24, 0.66),
    (-0.2, -0.42),
    (-0.16, -0.1),
    (-0.12, 0.25),
    (-0.08, -0.95),
    (-0.04, 0.52),
    (0.0, 0.9),
    (0.04, 0.98),
    (0.08, -0.79),
    (0.12, 0.43),
    (0.16, -0.4),
    (0.2, -0.92),
    (0.24, 0.82),
    (0.28, -0.42),
    (0.32, 0.1),
    (0.36, 0.52),
    (0.4, 0.85),
    (0.44, -0.97),
    (0.48, 0.48),
    (0.52, 0.18),
    (0.56, 0.94),
    (0.6, 0.91),
    (0.64, 0.19),
    (0.68, -0.26),
    (0.72, -0.47),
    (0.76, 1.0),
    (0.8, 0.7),
    (0.84, -0.67),
    (0.88, 0.1),
    (0.92, -0.84),
    (0.96, 0.78),
    (1.0, -0.95),
];

/// What a source produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Plain circle
    #[default]
    Empty,
    /// DC voltage
    Vdc,
    /// DC current
    Idc,
    Sine,
    Noise,
    /// Summing junction, no leads
    Sum,
    /// Multiplier, no leads
    Mult,
    /// Controlled voltage
    Cv,
    /// Controlled current
    Ci,
}

impl SourceKind {
    fn is_controlled(self) -> bool {
        matches!(self, SourceKind::Cv | SourceKind::Ci)
    }

    fn has_leads(self) -> bool {
        !matches!(self, SourceKind::Sum | SourceKind::Mult)
    }
}

impl FromStr for SourceKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Source::KIND,
            s,
            &[
                ("empty", SourceKind::Empty),
                ("vdc", SourceKind::Vdc),
                ("idc", SourceKind::Idc),
                ("sine", SourceKind::Sine),
                ("noise", SourceKind::Noise),
                ("sum", SourceKind::Sum),
                ("mult", SourceKind::Mult),
                ("cv", SourceKind::Cv),
                ("ci", SourceKind::Ci),
            ],
        )
    }
}

/// Source, drawn vertically with `p` on top.
///
/// Anchors: `p`, `n` plus compass points on the body circle.
#[derive(Debug, Clone, Default)]
pub struct Source {
    kind: SourceKind,
    options: TileOptions,
    color: Option<String>,
}

impl Source {
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            options: TileOptions::default(),
            color: None,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn color_or_black(&self) -> &str {
        self.color.as_deref().unwrap_or("black")
    }
}

impl Symbol for Source {
    const KIND: &'static str = "Source";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Vertical
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[("p", 0.0, -0.5), ("n", 0.0, 0.5)])
    }

    fn compass(&self) -> CompassStyle {
        CompassStyle::Round
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        // drawn inside a circle, so a non-square tile uses its smaller side
        let size = canvas.width().min(canvas.height());
        let r = size / 4.0;
        let diamond = 5.0 * size / 16.0;
        let elong = size / 16.0;
        let color = self.color_or_black();
        let style = canvas.stroke().with_stroke(color);
        let body = canvas.outline().with_stroke(color);

        let (top, bottom) = if self.kind.is_controlled() {
            canvas.polygon(
                &[
                    Point::new(0.0, -diamond - elong),
                    Point::new(diamond - elong, 0.0),
                    Point::new(0.0, diamond + elong),
                    Point::new(-diamond + elong, 0.0),
                ],
                &body,
            );
            (-diamond - elong, diamond + elong)
        } else {
            canvas.circle(Point::ORIGIN, r, &body);
            (-r, r)
        };

        if self.kind.has_leads() {
            canvas.line((0.0, top), (0.0, -size / 2.0), &style);
            canvas.line((0.0, bottom), (0.0, size / 2.0), &style);
        }

        let half = SIGN_SIZE / 2.0;
        match self.kind {
            SourceKind::Vdc | SourceKind::Cv => {
                canvas.line((-half, r / 2.0), (half, r / 2.0), &style);
                canvas.line((-half, -r / 2.0), (half, -r / 2.0), &style);
                canvas.line((0.0, -r / 2.0 + half), (0.0, -r / 2.0 - half), &style);
            }
            SourceKind::Idc | SourceKind::Ci => {
                let arrow = style.clone().with_fill(color);
                canvas.polygon(
                    &[
                        Point::new(0.0, -3.0 * r / 4.0),
                        Point::new(0.0, r / 4.0),
                        Point::new(ARROW_WIDTH, r / 4.0),
                        Point::new(0.0, 3.0 * r / 4.0),
                        Point::new(-ARROW_WIDTH, r / 4.0),
                        Point::new(0.0, r / 4.0),
                    ],
                    &arrow,
                );
            }
            SourceKind::Sine => {
                let wave = PathData::new()
                    .move_to((-12.0 * r / 16.0, 0.0))
                    .cubic_to((-9.0 * r / 16.0, -r / 2.0), (-3.0 * r / 16.0, -r / 2.0), (0.0, 0.0))
                    .cubic_to((3.0 * r / 16.0, r / 2.0), (9.0 * r / 16.0, r / 2.0), (12.0 * r / 16.0, 0.0));
                canvas.path(&wave, &style);
            }
            SourceKind::Noise => {
                let trace: Vec<Point> = NOISE
                    .iter()
                    .map(|&(x, y)| Point::new(3.0 * r * x / 4.0, r * y / 3.0))
                    .collect();
                canvas.polyline(&trace, &style);
            }
            SourceKind::Sum => {
                canvas.line((-r / 2.0, 0.0), (r / 2.0, 0.0), &style);
                canvas.line((0.0, -r / 2.0), (0.0, r / 2.0), &style);
            }
            SourceKind::Mult => {
                let d = 0.71 * r / 2.0;
                canvas.line((-d, -d), (d, d), &style);
                canvas.line((d, -d), (-d, d), &style);
            }
            SourceKind::Empty => {}
        }
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        let r = text.width().min(text.height()) / 4.0;
        if text.rotated() {
            text.put_name(r + nudge, -nudge, "ll");
            text.put_value(r + nudge, nudge, "ul");
        } else {
            text.put_name(nudge, -r - nudge, "ll");
            text.put_value(nudge, r + nudge, "ul");
        }
    }
}

/// Ground, a small downward triangle hanging from `t`.
#[derive(Debug, Clone, Default)]
pub struct Ground {
    options: TileOptions,
}

impl Ground {
    const SCALE: f64 = 0.4;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Symbol for Ground {
    const KIND: &'static str = "Ground";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Vertical
    }

    fn default_size(&self) -> (f64, f64) {
        (1.0, 1.0)
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[("t", 0.0, 0.0)])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let (w, h) = (canvas.width(), canvas.height());
        let s = Self::SCALE;
        let outline = canvas.outline();
        canvas.polyline(
            &[
                Point::ORIGIN,
                Point::new(s * w, 0.0),
                Point::new(0.0, s * h),
                Point::new(-s * w, 0.0),
                Point::ORIGIN,
            ],
            &outline,
        );
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        if text.rotated() {
            if text.flip_x() {
                text.put_name(-nudge, 0.0, "mr");
            } else {
                text.put_name(nudge, 0.0, "ml");
            }
        } else if text.flip_y() {
            text.put_name(0.0, -nudge, "lm");
        } else {
            text.put_name(0.0, nudge, "um");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("sine".parse::<SourceKind>().unwrap(), SourceKind::Sine);
        assert_eq!("CV".parse::<SourceKind>().unwrap(), SourceKind::Cv);
        assert!("ac".parse::<SourceKind>().is_err());
    }

    #[test]
    fn test_summer_has_no_leads() {
        assert!(!SourceKind::Sum.has_leads());
        assert!(!SourceKind::Mult.has_leads());
        assert!(SourceKind::Vdc.has_leads());
    }

    #[test]
    fn test_noise_trace_spans_unit_interval() {
        assert_eq!(NOISE.first().map(|p| p.0), Some(-1.0));
        assert_eq!(NOISE.last().map(|p| p.0), Some(1.0));
        assert!(NOISE.iter().all(|&(_, y)| y.abs() <= 1.0));
    }

    #[test]
    fn test_source_pins_on_vertical_axis() {
        let pins = Source::new(SourceKind::Vdc).pins();
        assert_eq!(pins.get("p"), Some(Point::new(0.0, -0.5)));
        assert_eq!(pins.get("n"), Some(Point::new(0.0, 0.5)));
    }
}
