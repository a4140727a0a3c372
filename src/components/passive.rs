//! Two-terminal passive symbols

use crate::layout::{Axis, Orientation, PinSet, Point};
use crate::renderer::PathData;

use super::{Annotator, Canvas, Symbol, TileOptions};

/// Resistor, drawn horizontally as a zig-zag.
///
/// Anchors: `p`, `n` plus the compass points.
#[derive(Debug, Clone, Default)]
pub struct Resistor {
    options: TileOptions,
}

impl Resistor {
    const UNDULATION_DX: f64 = 5.0;
    const UNDULATION_DY: f64 = 10.0;
    const UNDULATIONS: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Symbol for Resistor {
    const KIND: &'static str = "Resistor";

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
        PinSet::new(&[("p", 0.5, 0.0), ("n", -0.5, 0.0)])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let w = canvas.width();
        let lw = canvas.line_width();
        let dr = canvas.pin_clearance();
        let (dx, dy) = (Self::UNDULATION_DX, Self::UNDULATION_DY);

        canvas.conceal(-w / 2.0 + dr, -2.0 * lw, w - 2.0 * dr, 4.0 * lw);

        let mut squiggle = vec![canvas.pin("n")];
        let mut x = -dx * Self::UNDULATIONS as f64;
        for i in 0..Self::UNDULATIONS {
            squiggle.push(Point::new(x, 0.0));
            squiggle.push(Point::new(x + dx, if i % 2 == 1 { dy } else { -dy }));
            x += 2.0 * dx;
            squiggle.push(Point::new(x, 0.0));
        }
        squiggle.push(canvas.pin("p"));
        let style = canvas.stroke();
        canvas.polyline(&squiggle, &style);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        let dy = Self::UNDULATION_DY;
        if text.rotated() {
            text.put_name(1.5 * dy, -nudge, "ll");
            text.put_value(1.5 * dy, nudge, "ul");
        } else {
            text.put_name(0.0, -2.0 * dy, "lm");
            text.put_value(0.0, 2.0 * dy, "um");
        }
    }
}

/// Capacitor, drawn vertically with a flat top plate and a curved bottom plate.
///
/// Anchors: `p` (top), `n` (bottom) plus the compass points.
#[derive(Debug, Clone, Default)]
pub struct Capacitor {
    options: TileOptions,
}

impl Capacitor {
    const GAP: f64 = 15.0;
    const PLATE_BOW: f64 = 5.0;
    const PLATE_WIDTH: f64 = 40.0;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Symbol for Capacitor {
    const KIND: &'static str = "Capacitor";

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

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let h = canvas.height();
        let lw = canvas.line_width();
        let dr = canvas.pin_clearance();
        let (gap, bow, plate) = (Self::GAP, Self::PLATE_BOW, Self::PLATE_WIDTH);

        canvas.conceal(-2.0 * lw, -h / 2.0 + dr, 4.0 * lw, h - 2.0 * dr);

        let style = canvas.stroke();
        let (p, n) = (canvas.pin("p"), canvas.pin("n"));
        canvas.line(p, (0.0, -gap / 2.0), &style);
        canvas.line((0.0, gap / 2.0 - bow), n, &style);
        canvas.line((-plate / 2.0, -gap / 2.0), (plate / 2.0, -gap / 2.0), &style);

        let bottom_plate = PathData::new().move_to((-plate / 2.0, gap / 2.0)).rel_cubic_to(
            (plate / 4.0, -1.5 * bow),
            (3.0 * plate / 4.0, -1.5 * bow),
            (plate, 0.0),
        );
        canvas.path(&bottom_plate, &style);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        let gap = Self::GAP;
        if text.rotated() {
            text.put_name(gap, -nudge, "ll");
            text.put_value(gap, nudge, "ul");
        } else {
            text.put_name(nudge, -gap, "ll");
            text.put_value(nudge, gap, "ul");
        }
    }
}

/// Inductor, drawn horizontally as a coil.
///
/// Anchors: `p`, `n` plus the compass points.
#[derive(Debug, Clone, Default)]
pub struct Inductor {
    options: TileOptions,
}

impl Inductor {
    const X_ADVANCE: f64 = 20.0;
    const X_RETREAT: f64 = -5.0;
    const PEAK: f64 = 15.0;
    const TROUGH: f64 = -10.0;
    const TEXT_GAP: f64 = 5.0;
    const UNDULATIONS: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    fn coil(p: Point, n: Point) -> PathData {
        let (inc, dec) = (Self::X_ADVANCE, Self::X_RETREAT);
        let (peak, trough) = (Self::PEAK, Self::TROUGH);
        let mut x = -inc * (Self::UNDULATIONS as f64 / 2.0 - 0.5);
        let mut path = PathData::new().move_to(n).line_to((x, 0.0));
        for i in 0..Self::UNDULATIONS {
            path = path.cubic_to((x, -peak), (x + inc, -peak), (x + inc, 0.0));
            // the final loop ends on the upswing
            if i + 1 < Self::UNDULATIONS {
                path = path.cubic_to(
                    (x + inc, -trough),
                    (x + inc + dec, -trough),
                    (x + inc + dec, 0.0),
                );
            }
            x += inc + dec;
        }
        path.line_to(p)
    }
}

impl Symbol for Inductor {
    const KIND: &'static str = "Inductor";

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
        PinSet::new(&[("p", 0.5, 0.0), ("n", -0.5, 0.0)])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let w = canvas.width();
        let lw = canvas.line_width();
        let dr = canvas.pin_clearance();

        canvas.conceal(-w / 2.0 + dr, -2.0 * lw, w - 2.0 * dr, 4.0 * lw);

        let style = canvas.stroke();
        let coil = Self::coil(canvas.pin("p"), canvas.pin("n"));
        canvas.path(&coil, &style);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        if text.rotated() {
            let (just, x_nudge) = if text.flip_x() {
                ('r', Self::TROUGH - nudge)
            } else {
                ('l', -Self::TROUGH + nudge)
            };
            text.put_name(x_nudge, -nudge, &format!("l{just}"));
            text.put_value(x_nudge, nudge, &format!("u{just}"));
        } else {
            let dy = Self::PEAK + Self::TEXT_GAP;
            text.put_name(0.0, -dy, "lm");
            text.put_value(0.0, dy, "um");
        }
    }
}

/// Diode, drawn vertically with the anode on top; placed horizontally
/// unless told otherwise.
///
/// Anchors: `a`, `c` plus the compass points.
#[derive(Debug, Clone, Default)]
pub struct Diode {
    options: TileOptions,
    color: Option<String>,
}

impl Diode {
    const BODY_HEIGHT: f64 = 35.0;
    const BODY_WIDTH: f64 = 40.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Symbol for Diode {
    const KIND: &'static str = "Diode";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Vertical
    }

    fn default_orientation(&self) -> Orientation {
        Orientation::horizontal()
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[("a", 0.0, -0.5), ("c", 0.0, 0.5)])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let h = canvas.height();
        let lw = canvas.line_width();
        let dr = canvas.pin_clearance();
        let (dh, dw) = (Self::BODY_HEIGHT, Self::BODY_WIDTH);

        canvas.conceal(-2.0 * lw, -h / 2.0 + dr, 4.0 * lw, h - 2.0 * dr);

        let mut style = canvas.stroke();
        if let Some(color) = &self.color {
            style = style.with_stroke(color.as_str());
        }
        let (a, c) = (canvas.pin("a"), canvas.pin("c"));
        canvas.line(a, (0.0, -dh / 2.0), &style);
        canvas.line((0.0, dh / 2.0), c, &style);
        canvas.line((-dw / 2.0, dh / 2.0), (dw / 2.0, dh / 2.0), &style);
        canvas.polygon(
            &[
                Point::new(0.0, dh / 2.0),
                Point::new(-dw / 2.0, -dh / 2.0),
                Point::new(dw / 2.0, -dh / 2.0),
            ],
            &style,
        );
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        let dh = Self::BODY_HEIGHT;
        if text.rotated() {
            text.put_name(dh / 2.0 + nudge, -nudge, "ll");
            text.put_value(dh / 2.0 + nudge, nudge, "ul");
        } else {
            text.put_name(nudge / 2.0, -dh / 2.0 - nudge, "ll");
            text.put_value(nudge / 2.0, dh / 2.0 + nudge, "ul");
        }
    }
}
