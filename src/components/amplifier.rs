//! Amplifiers, converters and logic gates

use std::str::FromStr;

use crate::error::SchematicError;
use crate::layout::{Axis, PinSet, Point};

use super::{parse_kind, Annotator, Canvas, Symbol, TileOptions};

const SIGN_SIZE: f64 = 14.0;
const SIGN_INSET: f64 = 5.0;

/// Flavor of amplifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmpKind {
    /// Single-ended
    #[default]
    SingleEnded,
    /// Operational amplifier, marked inputs
    OpAmp,
    /// Differential amplifier, marked inputs and outputs
    DiffAmp,
    /// Comparator, marked inputs and a hysteresis glyph
    Comparator,
}

impl FromStr for AmpKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Amp::KIND,
            s,
            &[
                ("se", AmpKind::SingleEnded),
                ("oa", AmpKind::OpAmp),
                ("da", AmpKind::DiffAmp),
                ("comp", AmpKind::Comparator),
            ],
        )
    }
}

fn amp_pins() -> PinSet {
    PinSet::new(&[
        ("i", -0.5, 0.0),
        ("pi", -0.5, -0.25),
        ("ni", -0.5, 0.25),
        ("o", 0.5, 0.0),
        ("po", 0.5, 0.25),
        ("no", 0.5, -0.25),
    ])
}

/// A plus sign centered at `(x, y)`
fn plus(canvas: &mut Canvas<'_>, x: f64, y: f64) {
    let style = canvas.stroke();
    let half = SIGN_SIZE / 2.0;
    canvas.line((x - half, y), (x + half, y), &style);
    canvas.line((x, y - half), (x, y + half), &style);
}

/// A minus sign centered at `(x, y)`
fn minus(canvas: &mut Canvas<'_>, x: f64, y: f64) {
    let style = canvas.stroke();
    let half = SIGN_SIZE / 2.0;
    canvas.line((x - half, y), (x + half, y), &style);
}

fn draw_amp(kind: AmpKind, converter: bool, canvas: &mut Canvas<'_>) {
    let (w, h) = (canvas.width(), canvas.height());
    let outline = canvas.outline();
    let out_x = if converter {
        canvas.polygon(
            &[
                Point::new(w / 2.0, 0.0),
                Point::new(0.0, -h / 2.0),
                Point::new(-w / 2.0, -h / 2.0),
                Point::new(-w / 2.0, h / 2.0),
                Point::new(0.0, h / 2.0),
            ],
            &outline,
        );
        w / 4.0
    } else {
        canvas.polygon(
            &[
                Point::new(w / 2.0, 0.0),
                Point::new(-w / 2.0, -h / 2.0),
                Point::new(-w / 2.0, h / 2.0),
            ],
            &outline,
        );
        0.0
    };

    if kind != AmpKind::SingleEnded {
        let sign_x = -w / 2.0 + SIGN_INSET + SIGN_SIZE / 2.0;
        minus(canvas, sign_x, h / 4.0);
        plus(canvas, sign_x, -h / 4.0);
    }

    let style = canvas.stroke();
    match kind {
        AmpKind::DiffAmp => {
            let sign_x = out_x - 3.0 * SIGN_SIZE / 2.0 + SIGN_INSET;
            minus(canvas, sign_x, -h / 4.0);
            plus(canvas, sign_x, h / 4.0);
            canvas.line((out_x, h / 4.0), (w / 2.0, h / 4.0), &style);
            canvas.line((out_x, -h / 4.0), (w / 2.0, -h / 4.0), &style);
        }
        AmpKind::Comparator => {
            let x = -w / 2.0 + w / 8.0;
            canvas.polyline(
                &[
                    Point::new(x - SIGN_INSET, h / 8.0),
                    Point::new(x, h / 8.0),
                    Point::new(x, -h / 8.0),
                    Point::new(x + SIGN_INSET, -h / 8.0),
                ],
                &style,
            );
        }
        AmpKind::SingleEnded | AmpKind::OpAmp => {}
    }
}

/// The name sits inside the body, pulled toward its wide end
fn annotate_amp(kind: AmpKind, text: &mut Annotator<'_>) {
    let mut nudge = text.nudge_or(0.0);
    if kind == AmpKind::Comparator {
        nudge += 10.0;
    }
    if text.rotated() {
        let dy = if text.flip_y() {
            -text.height() / 8.0
        } else {
            text.height() / 8.0
        };
        text.put_name(0.0, dy, "mm");
    } else {
        let dx = if text.flip_x() {
            text.width() / 8.0 - nudge
        } else {
            -text.width() / 8.0 + nudge
        };
        text.put_name(dx, 0.0, "mm");
    }
}

/// Amplifier, drawn horizontally as a triangle pointing right.
///
/// Anchors: `i`, `pi`, `ni` (inputs), `o`, `po`, `no` (outputs) plus the
/// compass points.
#[derive(Debug, Clone, Default)]
pub struct Amp {
    kind: AmpKind,
    options: TileOptions,
}

impl Amp {
    pub fn new(kind: AmpKind) -> Self {
        Self {
            kind,
            options: TileOptions::default(),
        }
    }
}

impl Symbol for Amp {
    const KIND: &'static str = "Amp";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn pins(&self) -> PinSet {
        amp_pins()
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        draw_amp(self.kind, false, canvas);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        annotate_amp(self.kind, text);
    }
}

/// Converter (ADC, DAC, ...), an amplifier with a blunt pentagon body.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    kind: AmpKind,
    options: TileOptions,
}

impl Converter {
    pub fn new(kind: AmpKind) -> Self {
        Self {
            kind,
            options: TileOptions::default(),
        }
    }
}

impl Symbol for Converter {
    const KIND: &'static str = "Converter";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn pins(&self) -> PinSet {
        amp_pins()
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        draw_amp(self.kind, true, canvas);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        annotate_amp(self.kind, text);
    }
}

/// Logic function of a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateKind {
    #[default]
    Inverter,
}

impl FromStr for GateKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(Gate::KIND, s, &[("inv", GateKind::Inverter)])
    }
}

/// Logic gate, drawn horizontally.
///
/// Anchors: `i`, `o` plus the compass points.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    kind: GateKind,
    options: TileOptions,
}

impl Gate {
    const BUBBLE_RADIUS: f64 = 8.0;
    const BODY_WIDTH: f64 = 55.0;
    const BODY_HEIGHT: f64 = 70.0;

    pub fn new(kind: GateKind) -> Self {
        Self {
            kind,
            options: TileOptions::default(),
        }
    }

    pub fn inverter() -> Self {
        Self::new(GateKind::Inverter)
    }
}

impl Symbol for Gate {
    const KIND: &'static str = "Gate";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[("i", -0.5, 0.0), ("o", 0.5, 0.0)])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let w = canvas.width();
        let (r, bw, bh) = (Self::BUBBLE_RADIUS, Self::BODY_WIDTH, Self::BODY_HEIGHT);
        let outline = canvas.outline();
        let style = canvas.stroke();

        match self.kind {
            GateKind::Inverter => {
                canvas.polygon(
                    &[
                        Point::new(bw / 2.0 - r, 0.0),
                        Point::new(-bw / 2.0 - r, -bh / 2.0),
                        Point::new(-bw / 2.0 - r, bh / 2.0),
                    ],
                    &outline,
                );
                canvas.circle((bw / 2.0, 0.0), r, &outline);
                canvas.line((-w / 2.0, 0.0), (-bw / 2.0 - r, 0.0), &style);
                canvas.line((w / 2.0, 0.0), (bw / 2.0 + r, 0.0), &style);
            }
        }
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        if text.rotated() {
            let dy = if text.flip_y() {
                -text.height() / 8.0
            } else {
                text.height() / 8.0
            };
            text.put_name(0.0, dy, "mm");
        } else {
            let dx = if text.flip_x() {
                text.width() / 8.0
            } else {
                -text.width() / 8.0
            };
            text.put_name(dx, 0.0, "mm");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("oa".parse::<AmpKind>().unwrap(), AmpKind::OpAmp);
        assert_eq!("comp".parse::<AmpKind>().unwrap(), AmpKind::Comparator);
        assert_eq!("inv".parse::<GateKind>().unwrap(), GateKind::Inverter);

        let err = "nand".parse::<GateKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Gate: unknown kind 'nand' (expected one of: inv)"
        );
    }

    #[test]
    fn test_output_pins_mirror_inputs() {
        let pins = amp_pins();
        assert_eq!(pins.get("pi").unwrap().y, -pins.get("po").unwrap().y);
        assert_eq!(pins.get("ni").unwrap().y, -pins.get("no").unwrap().y);
    }
}
