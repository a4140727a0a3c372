//! Three-terminal transistor symbols

use std::str::FromStr;

use crate::error::SchematicError;
use crate::layout::{Axis, PinSet, Point};
use crate::renderer::Style;

use super::{parse_kind, Annotator, Canvas, Symbol, TileOptions};

const ARROW_HEIGHT: f64 = 12.0;
const ARROW_WIDTH: f64 = 30.0;

/// Polarity of a bipolar transistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BjtKind {
    #[default]
    Npn,
    Pnp,
    /// npn pinout without the emitter arrow
    Unmarked,
}

impl FromStr for BjtKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Bjt::KIND,
            s,
            &[
                ("npn", BjtKind::Npn),
                ("n", BjtKind::Npn),
                ("pnp", BjtKind::Pnp),
                ("p", BjtKind::Pnp),
                ("", BjtKind::Unmarked),
            ],
        )
    }
}

/// Polarity of a MOS transistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MosKind {
    #[default]
    N,
    P,
    /// n-channel pinout without the arrow
    Unmarked,
}

impl FromStr for MosKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Mos::KIND,
            s,
            &[
                ("n", MosKind::N),
                ("nmos", MosKind::N),
                ("p", MosKind::P),
                ("pmos", MosKind::P),
                ("", MosKind::Unmarked),
            ],
        )
    }
}

/// The filled arrow on the emitter or source lead
fn lead_arrow(w: f64, h: f64, points_in: bool) -> (Vec<Point>, f64) {
    let x0 = w / 4.0;
    let (y0, left, right) = if points_in {
        (-h / 4.0, x0 + ARROW_WIDTH / 2.0, x0 - ARROW_WIDTH / 2.0)
    } else {
        (h / 4.0, x0 - ARROW_WIDTH / 2.0, x0 + ARROW_WIDTH / 2.0)
    };
    let points = vec![
        Point::new(left, y0 - ARROW_HEIGHT / 2.0),
        Point::new(right, y0),
        Point::new(left, y0 + ARROW_HEIGHT / 2.0),
    ];
    (points, y0)
}

/// Text placement shared by both transistor kinds
fn annotate_transistor(text: &mut Annotator<'_>) {
    let nudge = text.nudge();
    if text.rotated() {
        let (name_just, value_just, offset, dy) = if text.flip_y() {
            ("um", "lm", text.height() / 2.0, nudge)
        } else {
            ("lm", "um", -text.height() / 2.0, -nudge)
        };
        text.put_name(0.0, dy, name_just);
        text.put_value(0.0, offset - dy, value_just);
    } else {
        let (xjust, dx) = if text.flip_x() {
            ('r', -nudge)
        } else {
            ('l', nudge)
        };
        if text.value().is_some() {
            text.put_name(dx, -nudge, &format!("l{xjust}"));
            text.put_value(dx, nudge, &format!("u{xjust}"));
        } else {
            text.put_name(dx, 0.0, &format!("m{xjust}"));
        }
    }
}

/// Bipolar junction transistor, drawn vertically with the base on the left.
///
/// Anchors: `c`, `b`, `e` plus the compass points. For pnp devices the
/// collector is at the bottom.
#[derive(Debug, Clone, Default)]
pub struct Bjt {
    kind: BjtKind,
    options: TileOptions,
}

impl Bjt {
    pub fn new(kind: BjtKind) -> Self {
        Self {
            kind,
            options: TileOptions::default(),
        }
    }

    pub fn npn() -> Self {
        Self::new(BjtKind::Npn)
    }

    pub fn pnp() -> Self {
        Self::new(BjtKind::Pnp)
    }
}

impl Symbol for Bjt {
    const KIND: &'static str = "Bjt";

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
        match self.kind {
            BjtKind::Pnp => PinSet::new(&[("c", 0.5, 0.5), ("b", -0.5, 0.0), ("e", 0.5, -0.5)]),
            _ => PinSet::new(&[("c", 0.5, -0.5), ("b", -0.5, 0.0), ("e", 0.5, 0.5)]),
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let (w, h) = (canvas.width(), canvas.height());
        let lw = canvas.line_width();
        let dr = canvas.pin_clearance();
        let is_pnp = self.kind == BjtKind::Pnp;
        // channel runs top to bottom whatever the polarity
        let (top, bottom) = if is_pnp {
            (canvas.pin("e"), canvas.pin("c"))
        } else {
            (canvas.pin("c"), canvas.pin("e"))
        };

        canvas.conceal(w / 2.0 - 2.0 * lw, -h / 2.0 + dr, 4.0 * lw, h - 2.0 * dr);

        let style = canvas.stroke();
        canvas.polyline(
            &[
                top,
                Point::new(w / 2.0, -3.0 * h / 8.0),
                Point::new(0.0, -h / 4.0),
                Point::new(0.0, h / 4.0),
                Point::new(w / 2.0, 3.0 * h / 8.0),
                bottom,
            ],
            &style,
        );
        let base = Style::stroked(3.0 * lw).with_linecap("square");
        canvas.line((0.0, -3.0 * h / 8.0), (0.0, 3.0 * h / 8.0), &base);
        canvas.line(canvas.pin("b"), Point::ORIGIN, &style);

        if self.kind != BjtKind::Unmarked {
            let (points, y0) = lead_arrow(w, h, is_pnp);
            let mut angle = (1.0f64 / 8.0).atan2(0.5).to_degrees();
            if is_pnp {
                angle = -angle;
            }
            let arrow = Style::filled("black").with_attr("transform", format!("rotate({angle},0,{y0})"));
            canvas.polygon(&points, &arrow);
        }
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        annotate_transistor(text);
    }
}

/// MOS transistor, drawn vertically with the gate on the left.
///
/// Anchors: `d`, `g`, `s` plus the compass points. For p-channel devices the
/// drain is at the bottom.
#[derive(Debug, Clone, Default)]
pub struct Mos {
    kind: MosKind,
    options: TileOptions,
}

impl Mos {
    pub fn new(kind: MosKind) -> Self {
        Self {
            kind,
            options: TileOptions::default(),
        }
    }

    pub fn nmos() -> Self {
        Self::new(MosKind::N)
    }

    pub fn pmos() -> Self {
        Self::new(MosKind::P)
    }
}

impl Symbol for Mos {
    const KIND: &'static str = "Mos";

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
        match self.kind {
            MosKind::P => PinSet::new(&[("d", 0.5, 0.5), ("g", -0.5, 0.0), ("s", 0.5, -0.5)]),
            _ => PinSet::new(&[("d", 0.5, -0.5), ("g", -0.5, 0.0), ("s", 0.5, 0.5)]),
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let (w, h) = (canvas.width(), canvas.height());
        let lw = canvas.line_width();
        let dr = canvas.pin_clearance();
        let is_pmos = self.kind == MosKind::P;
        let (top, bottom) = if is_pmos {
            (canvas.pin("s"), canvas.pin("d"))
        } else {
            (canvas.pin("d"), canvas.pin("s"))
        };

        canvas.conceal(w / 2.0 - 2.0 * lw, -h / 2.0 + dr, 4.0 * lw, h - 2.0 * dr);

        let style = canvas.stroke();
        canvas.polyline(
            &[
                top,
                Point::new(w / 2.0, -h / 4.0),
                Point::new(0.0, -h / 4.0),
                Point::new(0.0, h / 4.0),
                Point::new(w / 2.0, h / 4.0),
                bottom,
            ],
            &style,
        );
        let oxide = Style::stroked(2.0 * lw).with_linecap("square");
        canvas.line((0.0, -3.0 * h / 8.0), (0.0, 3.0 * h / 8.0), &oxide);
        let gate = Style::stroked(lw).with_linecap("square");
        canvas.line((-w / 8.0, -h / 4.0), (-w / 8.0, h / 4.0), &gate);
        canvas.line(canvas.pin("g"), (-w / 8.0, 0.0), &style);

        if self.kind != MosKind::Unmarked {
            let (points, _) = lead_arrow(w, h, is_pmos);
            canvas.polygon(&points, &Style::filled("black"));
        }
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        annotate_transistor(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("npn".parse::<BjtKind>().unwrap(), BjtKind::Npn);
        assert_eq!("P".parse::<BjtKind>().unwrap(), BjtKind::Pnp);
        assert_eq!("".parse::<BjtKind>().unwrap(), BjtKind::Unmarked);
        assert_eq!("pmos".parse::<MosKind>().unwrap(), MosKind::P);
        assert!("jfet".parse::<MosKind>().is_err());
    }

    #[test]
    fn test_pnp_swaps_collector_and_emitter() {
        let npn = Bjt::npn().pins();
        let pnp = Bjt::pnp().pins();
        assert_eq!(npn.get("c"), pnp.get("e"));
        assert_eq!(npn.get("e"), pnp.get("c"));
        assert_eq!(npn.get("b"), pnp.get("b"));
    }
}
