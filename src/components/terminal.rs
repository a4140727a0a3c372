//! Pins, junction dots and labels

use std::str::FromStr;

use crate::error::SchematicError;
use crate::layout::{Axis, OrientTransform, Orientation, PinSet, Point};
use crate::renderer::Style;

use super::{parse_kind, Annotator, Canvas, Symbol, TileOptions};

/// Marker drawn for a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinKind {
    /// Solid dot, name and value beside it
    Dot,
    /// Hollow dot, name on the left
    In,
    /// Hollow dot, name on the right
    #[default]
    Out,
    /// No marker, only text
    None,
}

impl FromStr for PinKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Pin::KIND,
            s,
            &[
                ("dot", PinKind::Dot),
                ("in", PinKind::In),
                ("out", PinKind::Out),
                ("none", PinKind::None),
            ],
        )
    }
}

fn draw_pin(kind: PinKind, color: &str, canvas: &mut Canvas<'_>) {
    let r = canvas.dot_radius();
    let cx = match kind {
        PinKind::None => return,
        PinKind::In => -r,
        PinKind::Out => r,
        PinKind::Dot => 0.0,
    };
    let fill = if kind == PinKind::Dot {
        color.to_string()
    } else {
        canvas.background().to_string()
    };
    let style = Style::stroked(canvas.line_width())
        .with_stroke(color)
        .with_fill(fill);
    canvas.circle((cx, 0.0), r, &style);
}

fn annotate_pin(kind: PinKind, text: &mut Annotator<'_>) {
    let nudge = text.nudge();
    let r = text.dot_radius();
    match kind {
        PinKind::Out if text.name().is_some() => text.put_name(2.0 * r + nudge, 0.0, "ml"),
        PinKind::In if text.name().is_some() => text.put_name(-(2.0 * r + nudge), 0.0, "mr"),
        _ => {
            let (dx, just) = if text.flip_x() {
                (-(r + nudge), 'r')
            } else {
                (r + nudge, 'l')
            };
            text.put_name(dx, -nudge, &format!("l{just}"));
            text.put_value(dx, nudge, &format!("u{just}"));
        }
    }
}

/// Terminal of a circuit.
///
/// The marker is never rotated or mirrored; orientation only moves the text.
/// Anchors: `t` plus the compass points.
#[derive(Debug, Clone, Default)]
pub struct Pin {
    kind: PinKind,
    options: TileOptions,
    color: Option<String>,
}

impl Pin {
    pub fn new(kind: PinKind) -> Self {
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
}

impl Symbol for Pin {
    const KIND: &'static str = "Pin";

    fn options(&self) -> &TileOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        &mut self.options
    }

    fn authored_axis(&self) -> Axis {
        Axis::Horizontal
    }

    fn default_orientation(&self) -> Orientation {
        Orientation::vertical()
    }

    fn default_size(&self) -> (f64, f64) {
        (1.0, 1.0)
    }

    fn pins(&self) -> PinSet {
        PinSet::new(&[("t", 0.0, 0.0)])
    }

    fn drawing_transform(&self, _anchors: OrientTransform) -> OrientTransform {
        OrientTransform::identity()
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        draw_pin(self.kind, self.color.as_deref().unwrap_or("black"), canvas);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        annotate_pin(self.kind, text);
    }
}

/// Junction dot, a [`Pin`] with a solid marker.
#[derive(Debug, Clone)]
pub struct Dot {
    pin: Pin,
}

impl Dot {
    pub fn new() -> Self {
        Self {
            pin: Pin::new(PinKind::Dot),
        }
    }

    pub fn kind(mut self, kind: PinKind) -> Self {
        self.pin.kind = kind;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.pin.color = Some(color.into());
        self
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbol for Dot {
    const KIND: &'static str = "Dot";

    fn options(&self) -> &TileOptions {
        self.pin.options()
    }

    fn options_mut(&mut self) -> &mut TileOptions {
        self.pin.options_mut()
    }

    fn authored_axis(&self) -> Axis {
        self.pin.authored_axis()
    }

    fn default_orientation(&self) -> Orientation {
        self.pin.default_orientation()
    }

    fn default_size(&self) -> (f64, f64) {
        self.pin.default_size()
    }

    fn pins(&self) -> PinSet {
        self.pin.pins()
    }

    fn drawing_transform(&self, anchors: OrientTransform) -> OrientTransform {
        self.pin.drawing_transform(anchors)
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        self.pin.draw(canvas);
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        self.pin.annotate(text);
    }
}

/// Marker drawn under a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelKind {
    #[default]
    Plain,
    /// Arrow centered on the tile
    Arrow,
    /// Arrow with its tip on the center
    ArrowTip,
    /// Slash across a bus
    Slash,
    Dot,
}

impl FromStr for LabelKind {
    type Err = SchematicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kind(
            Label::KIND,
            s,
            &[
                ("plain", LabelKind::Plain),
                ("arrow", LabelKind::Arrow),
                ("arrow|", LabelKind::ArrowTip),
                ("slash", LabelKind::Slash),
                ("dot", LabelKind::Dot),
            ],
        )
    }
}

/// Free-standing text with an optional marker.
///
/// `loc` places the text relative to the center using compass letters, e.g.
/// `"ne"` puts it above and to the right. Labels have no pins.
#[derive(Debug, Clone)]
pub struct Label {
    kind: LabelKind,
    loc: String,
    options: TileOptions,
    color: Option<String>,
}

impl Label {
    const ARROW_HEIGHT: f64 = 12.0;
    const ARROW_WIDTH: f64 = 30.0;
    const SLASH_LENGTH: f64 = 12.0;

    pub fn new(kind: LabelKind) -> Self {
        Self {
            kind,
            loc: "c".to_string(),
            options: TileOptions::default(),
            color: None,
        }
    }

    pub fn loc(mut self, loc: impl Into<String>) -> Self {
        self.loc = loc.into().to_lowercase();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Extra clearance the marker needs, horizontally and vertically
    fn marker_clearance(&self, dot_radius: f64) -> (f64, f64) {
        match self.kind {
            LabelKind::Plain => (0.0, 0.0),
            LabelKind::Arrow | LabelKind::ArrowTip => (0.0, Self::ARROW_HEIGHT / 2.0),
            LabelKind::Slash => (0.0, Self::SLASH_LENGTH / 2.0),
            LabelKind::Dot => (dot_radius, dot_radius),
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new(LabelKind::Plain)
    }
}

impl Symbol for Label {
    const KIND: &'static str = "Label";

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
        PinSet::empty()
    }

    fn draw(&self, canvas: &mut Canvas<'_>) {
        let color = self.color.as_deref().unwrap_or("black");
        let (aw, ah) = (Self::ARROW_WIDTH, Self::ARROW_HEIGHT);
        match self.kind {
            LabelKind::Plain => {}
            LabelKind::Arrow => canvas.polygon(
                &[
                    Point::new(aw / 2.0, 0.0),
                    Point::new(-aw / 2.0, ah / 2.0),
                    Point::new(-aw / 2.0, -ah / 2.0),
                ],
                &Style::filled(color),
            ),
            LabelKind::ArrowTip => canvas.polygon(
                &[
                    Point::ORIGIN,
                    Point::new(-aw, ah / 2.0),
                    Point::new(-aw, -ah / 2.0),
                ],
                &Style::filled(color),
            ),
            LabelKind::Slash => {
                let half = Self::SLASH_LENGTH / 2.0;
                let style = Style::stroked(canvas.line_width()).with_stroke(color);
                canvas.line((-half, half), (half, -half), &style);
            }
            LabelKind::Dot => {
                let style = Style::stroked(canvas.line_width())
                    .with_stroke(color)
                    .with_fill(color);
                let r = canvas.dot_radius();
                canvas.circle(Point::ORIGIN, r, &style);
            }
        }
    }

    fn annotate(&self, text: &mut Annotator<'_>) {
        let nudge = text.nudge();
        let (mx, my) = self.marker_clearance(text.dot_radius());
        let (x_nudge, y_nudge) = (nudge + mx, nudge + my);

        let (mut dx, mut dy) = (0.0, 0.0);
        let (mut vjust, mut hjust) = ('m', 'm');
        if self.loc.contains('n') {
            dy = -y_nudge;
            vjust = 'l';
        }
        if self.loc.contains('s') {
            dy = y_nudge;
            vjust = 'u';
        }
        if self.loc.contains('e') {
            dx = x_nudge;
            hjust = 'l';
        }
        if self.loc.contains('w') {
            dx = -x_nudge;
            hjust = 'r';
        }
        text.put_name(dx, dy, &format!("{vjust}{hjust}"));
    }
}
