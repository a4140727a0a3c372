//! Boxes, switches and wire crossings

use std::str::FromStr;

use crate::error::SchematicError;
use crate::layout::{AttrPolicy, Axis, PinSet, Point};
use crate::renderer::Style;

use super::{parse_kind, Annotator, Canvas, Symbol, TileOptions};

/// Generic block, a rectangle with amplifier-style pins.
///
/// Any extra placement attribute is copied onto the rectangle, e.g.
/// `.attr("stroke_dasharray", "4 2")`.
#[derive(Debug, Clone, Default)]
pub struct Block {
    options: TileOptions,
    line_width: Option<f64>,
    background: Option<String>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline width, defaults to the schematic line width
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Interior color, defaults to the schematic background
    pub fn background(mut self, fill: impl Into<String>) -> Self {
        self.background = Some(fill.into());
        self
    }
}

impl Symbol for Block {
    const KIND: &'static str = "Block";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn default_size(&self) -> (f64, f64) {
        (2.0, 1.5)
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[
            ("i", -0.5, 0.0),
            ("pi", -0.5, -0.25),
            ("ni", -0.5, 0.25),
            ("o", 0.5, 0.0),
            ("po", 0.5, -0.25),
            ("no", 0.5, 0.25),
        ])
    }

    fn attr_policy(&self) -> AttrPolicy {
        AttrPolicy::Any
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let (w, h) = (canvas.width(), canvas.height());
        let fill = self
            .background
            .clone()
            .unwrap_or_else(|| canvas.background().to_string());
        let mut style = Style::stroked(self.line_width.unwrap_or(canvas.line_width())).with_fill(fill);
        for (key, value) in canvas.attrs() {
            style = style.with_attr(key.as_str(), value.as_str());
        }
        canvas.rect(-w / 2.0, -h / 2.0, w, h, &style);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        if text.value().is_some() {
            text.put_name(0.0, -nudge, "lm");
            text.put_value(0.0, nudge, "um");
        } else {
            text.put_name(0.0, 0.0, "mm");
        }
    }
}

/// Switch throw configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchKind {
    /// Single pole, single throw
    #[default]
    Spst,
    /// Single pole, double throw
    Spdt,
}

impl FromStr for SwitchKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Switch::KIND,
            s,
            &[("spst", SwitchKind::Spst), ("spdt", SwitchKind::Spdt)],
        )
    }
}

/// Switch, drawn horizontally with the blade hinged on the left.
///
/// Anchors: `i`, `o`, `ot`, `ob` plus the compass points. `o` is only drawn
/// for single-throw switches, `ot` and `ob` only for double-throw.
#[derive(Debug, Clone, Default)]
pub struct Switch {
    kind: SwitchKind,
    dots: bool,
    options: TileOptions,
}

impl Switch {
    const POLE_RADIUS: f64 = 3.0;

    pub fn new(kind: SwitchKind) -> Self {
        Self {
            kind,
            dots: false,
            options: TileOptions::default(),
        }
    }

    /// Draw a dot on each pole
    pub fn dots(mut self, dots: bool) -> Self {
        self.dots = dots;
        self
    }
}

impl Symbol for Switch {
    const KIND: &'static str = "Switch";

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
        PinSet::new(&[
            ("i", -0.5, 0.0),
            ("o", 0.5, 0.0),
            ("ot", 0.5, -0.25),
            ("ob", 0.5, 0.25),
        ])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let (w, h) = (canvas.width(), canvas.height());
        let lw = canvas.line_width();
        let (sep, gap) = (h / 2.0, w / 2.0);

        canvas.conceal(-gap / 2.0, -sep / 2.0 - 2.0 * lw, gap, sep + 4.0 * lw);

        let style = Style::stroked(lw);
        let pole = Style::stroked(lw).with_fill("black");
        let hinge = Point::new(-gap / 2.0, 0.0);
        canvas.line(hinge, (gap / 2.0, -sep / 2.0), &style);
        let i = canvas.pin("i");
        canvas.line(i, hinge, &style);

        let mut poles = vec![hinge];
        match self.kind {
            SwitchKind::Spdt => {
                let top = Point::new(gap / 2.0, -sep / 2.0);
                let bottom = Point::new(gap / 2.0, sep / 2.0);
                let (ot, ob) = (canvas.pin("ot"), canvas.pin("ob"));
                canvas.line(ot, top, &style);
                canvas.line(ob, bottom, &style);
                poles.extend([top, bottom]);
            }
            SwitchKind::Spst => {
                let throw = Point::new(gap / 2.0, 0.0);
                let o = canvas.pin("o");
                canvas.line(o, throw, &style);
                poles.push(throw);
            }
        }

        if self.dots {
            for p in poles {
                canvas.circle(p, Self::POLE_RADIUS, &pole);
            }
        }
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let gap = text.width() / 2.0;
        let r = Self::POLE_RADIUS;
        let nudge = text.nudge();
        if text.rotated() {
            let (hjust, nudge) = if text.flip_x() {
                ('r', -nudge)
            } else {
                ('l', nudge)
            };
            let offset = if text.flip_y() {
                gap / 2.0 + r
            } else {
                -gap / 2.0 - r
            };
            if text.value().is_some() {
                let dy = offset + nudge;
                text.put_value(nudge, -dy, &format!("u{hjust}"));
                text.put_name(nudge, -dy, &format!("l{hjust}"));
            } else {
                text.put_name(nudge, 0.0, &format!("m{hjust}"));
            }
        } else {
            let (vjust, nudge) = if text.flip_y() {
                ('l', -nudge)
            } else {
                ('u', nudge)
            };
            if text.value().is_some() {
                let dx = gap / 2.0 + r + nudge;
                text.put_value(dx, nudge, &format!("{vjust}l"));
                text.put_name(-dx, nudge, &format!("{vjust}r"));
            } else {
                text.put_name(0.0, nudge, &format!("{vjust}m"));
            }
        }
    }
}

/// Two wires crossing without connecting.
///
/// Anchors: `pi`, `ni` on the left, `po`, `no` on the right, plus the
/// compass points. The wire from `ni` passes under the one from `pi`.
#[derive(Debug, Clone, Default)]
pub struct Crossing {
    options: TileOptions,
    pass_under: Option<String>,
}

impl Crossing {
    const GAP_RADIUS: f64 = 3.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Color of the gap cut into the lower wire; `"none"` draws no gap.
    /// Needed when the schematic has no background.
    pub fn pass_under(mut self, color: impl Into<String>) -> Self {
        self.pass_under = Some(color.into());
        self
    }
}

impl Symbol for Crossing {
    const KIND: &'static str = "Crossing";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn default_size(&self) -> (f64, f64) {
        (1.0, 1.0)
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[
            ("pi", -0.5, -0.5),
            ("ni", -0.5, 0.5),
            ("po", 0.5, 0.5),
            ("no", 0.5, -0.5),
        ])
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let (w, h) = (canvas.width(), canvas.height());
        let lw = canvas.line_width();
        let background = canvas.background().to_string();
        let concealer = Style::filled(background.as_str())
            .with_stroke(background.as_str())
            .with_stroke_width(2.0 * lw);
        canvas.rect(-w / 2.0, -h / 2.0, w, h, &concealer);

        let wire = Style::stroked(lw);
        canvas.line((-w / 2.0, h / 2.0), (w / 2.0, -h / 2.0), &wire);
        let gap = Style::filled(self.pass_under.clone().unwrap_or(background));
        canvas.circle(Point::ORIGIN, Self::GAP_RADIUS, &gap);
        canvas.line((-w / 2.0, -h / 2.0), (w / 2.0, h / 2.0), &wire);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch_kind() {
        assert_eq!("SPDT".parse::<SwitchKind>().unwrap(), SwitchKind::Spdt);
        let err = "dpdt".parse::<SwitchKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Switch: unknown kind 'dpdt' (expected one of: spst, spdt)"
        );
    }

    #[test]
    fn test_block_accepts_any_attribute() {
        assert!(Block::new().attr_policy().accepts("stroke_dasharray"));
        assert!(!Switch::default().attr_policy().accepts("fill"));
    }

    #[test]
    fn test_crossing_ni_wire_passes_under() {
        let mut sch = crate::schematic::Schematic::default();
        sch.add(Crossing::new().pass_under("red")).unwrap();
        let svg = sch.finish().unwrap();

        let lower = svg.find(r#"<line x1="-25" y1="25" x2="25" y2="-25""#).unwrap();
        let gap = svg.find(r#"<circle cx="0" cy="0" r="3" fill="red""#).unwrap();
        let upper = svg.find(r#"<line x1="-25" y1="-25" x2="25" y2="25""#).unwrap();
        assert!(lower < gap && gap < upper);
    }

    #[test]
    fn test_crossing_pins_are_corners() {
        let pins = Crossing::new().pins();
        for (_, p) in pins.iter() {
            assert_eq!(p.x.abs(), 0.5);
            assert_eq!(p.y.abs(), 0.5);
        }
    }
}
