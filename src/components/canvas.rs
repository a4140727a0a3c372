//! Drawing contexts handed to symbols

use crate::layout::{shift, Anchors, Orientation, Point};
use crate::renderer::{Justify, PathData, Style, SvgBuilder};

/// Local drawing surface of one symbol.
///
/// Coordinates are relative to the symbol center, before orientation. The
/// enclosing group applies the orientation and translation.
pub struct Canvas<'a> {
    svg: &'a mut SvgBuilder,
    pins: Anchors,
    width: f64,
    height: f64,
    line_width: f64,
    dot_radius: f64,
    background: &'a str,
    attrs: &'a [(String, String)],
}

impl<'a> Canvas<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        svg: &'a mut SvgBuilder,
        pins: Anchors,
        (width, height): (f64, f64),
        line_width: f64,
        dot_radius: f64,
        background: &'a str,
        attrs: &'a [(String, String)],
    ) -> Self {
        Self {
            svg,
            pins,
            width,
            height,
            line_width,
            dot_radius,
            background,
            attrs,
        }
    }

    /// Authored width in drawing units
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Authored height in drawing units
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// Schematic background color, used to hide wires passing under a symbol
    pub fn background(&self) -> &str {
        self.background
    }

    /// Rendering-only attributes from the placement
    pub fn attrs(&self) -> &[(String, String)] {
        self.attrs
    }

    /// Space left uncovered next to each pin by concealers
    pub fn pin_clearance(&self) -> f64 {
        (2.0 * self.line_width).max(self.dot_radius)
    }

    /// Local position of a pin, scaled to the symbol size
    pub fn pin(&self, name: &str) -> Point {
        self.pins.get(name).unwrap_or_else(|| {
            log::debug!("symbol drew missing pin '{name}' at its center");
            Point::ORIGIN
        })
    }

    /// Round-capped black stroke of the schematic line width
    pub fn stroke(&self) -> Style {
        Style::stroked(self.line_width).with_linecap("round")
    }

    /// Black outline filled with the background color
    pub fn outline(&self) -> Style {
        Style::stroked(self.line_width)
            .with_fill(self.background)
            .with_linecap("round")
    }

    /// Cover wires that run under the symbol
    pub fn conceal(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let style = Style::filled(self.background);
        self.svg.add_rect(x, y, w, h, &style);
    }

    pub fn line(&mut self, from: impl Into<Point>, to: impl Into<Point>, style: &Style) {
        self.svg.add_line(from.into(), to.into(), style);
    }

    pub fn polyline(&mut self, points: &[Point], style: &Style) {
        self.svg.add_polyline(points, style);
    }

    pub fn polygon(&mut self, points: &[Point], style: &Style) {
        self.svg.add_polygon(points, style);
    }

    pub fn circle(&mut self, center: impl Into<Point>, r: f64, style: &Style) {
        self.svg.add_circle(center.into(), r, style);
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.svg.add_rect(x, y, w, h, style);
    }

    pub fn path(&mut self, path: &PathData, style: &Style) {
        self.svg.add_path(path, style);
    }
}

/// Writes name and value text around a placed symbol.
///
/// Text is positioned in drawing coordinates so it stays upright however the
/// symbol is oriented.
pub struct Annotator<'a> {
    svg: &'a mut SvgBuilder,
    center: Point,
    size: (f64, f64),
    orientation: Orientation,
    rotated: bool,
    nudge: Option<f64>,
    default_nudge: f64,
    dot_radius: f64,
    name: Option<&'a str>,
    value: Option<&'a str>,
}

impl<'a> Annotator<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        svg: &'a mut SvgBuilder,
        center: Point,
        size: (f64, f64),
        orientation: Orientation,
        rotated: bool,
        (nudge, default_nudge): (Option<f64>, f64),
        dot_radius: f64,
        (name, value): (Option<&'a str>, Option<&'a str>),
    ) -> Self {
        Self {
            svg,
            center,
            size,
            orientation,
            rotated,
            nudge,
            default_nudge,
            dot_radius,
            name,
            value,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Authored width in drawing units
    pub fn width(&self) -> f64 {
        self.size.0
    }

    /// Authored height in drawing units
    pub fn height(&self) -> f64 {
        self.size.1
    }

    /// Whether the symbol is drawn across its authored axis
    pub fn rotated(&self) -> bool {
        self.rotated
    }

    /// `|` was requested
    pub fn flip_x(&self) -> bool {
        self.orientation.flip_x
    }

    /// `-` was requested
    pub fn flip_y(&self) -> bool {
        self.orientation.flip_y
    }

    /// The caller's nudge, or the schematic default
    pub fn nudge(&self) -> f64 {
        self.nudge.unwrap_or(self.default_nudge)
    }

    /// The caller's nudge, or `default` for symbols that keep text tight
    pub fn nudge_or(&self, default: f64) -> f64 {
        self.nudge.unwrap_or(default)
    }

    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Write `text` at `(dx, dy)` from the symbol center
    pub fn text(&mut self, text: &str, dx: f64, dy: f64, justify: &str) {
        let position = shift(self.center, dx, dy);
        self.svg.add_text(text, position, Justify::from_code(justify));
    }

    /// Write the name, if any, at `(dx, dy)` from the center
    pub fn put_name(&mut self, dx: f64, dy: f64, justify: &str) {
        if let Some(name) = self.name {
            self.text(name, dx, dy, justify);
        }
    }

    /// Write the value, if any, at `(dx, dy)` from the center
    pub fn put_value(&mut self, dx: f64, dy: f64, justify: &str) {
        if let Some(value) = self.value {
            self.text(value, dx, dy, justify);
        }
    }
}
