//! SVG document assembly
//!
//! The builder keeps three layers that are emitted back to front:
//! background, symbol bodies and wires, then text. Text is kept on its own
//! layer so it is never covered by later geometry and never inherits a
//! symbol's rotation.

use crate::layout::{BoundingBox, Point};

use super::path::{points_attr, PathData};
use super::SvgConfig;

const BASE_INDENT: usize = 2;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Vertical text placement relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Text hangs below the point
    Upper,
    /// Text is centered on the point
    Middle,
    /// Text sits on the point
    #[default]
    Lower,
}

impl VerticalAlign {
    /// Baseline shift in multiples of the font size
    pub fn baseline_shift(&self) -> f64 {
        match self {
            VerticalAlign::Upper => 0.8,
            VerticalAlign::Middle => 0.4,
            VerticalAlign::Lower => 0.0,
        }
    }
}

/// Text justification, written as a two letter code such as `"lm"`.
///
/// The first letter is vertical (`u`pper, `m`iddle, `l`ower), the second
/// horizontal (`l`eft, `m`iddle, `r`ight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Justify {
    pub vertical: VerticalAlign,
    pub horizontal: TextAnchor,
}

impl Justify {
    pub fn new(vertical: VerticalAlign, horizontal: TextAnchor) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn from_code(code: &str) -> Self {
        let mut chars = code.chars();
        let vertical = match chars.next() {
            Some('u') => VerticalAlign::Upper,
            Some('m') => VerticalAlign::Middle,
            _ => VerticalAlign::Lower,
        };
        let horizontal = match chars.next() {
            Some('m') => TextAnchor::Middle,
            Some('r') => TextAnchor::End,
            _ => TextAnchor::Start,
        };
        Self::new(vertical, horizontal)
    }
}

impl From<&str> for Justify {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

/// Presentation attributes of a drawn element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub linecap: Option<String>,
    /// Additional attributes, `_` in names is written as `-`
    pub extra: Vec<(String, String)>,
}

impl Style {
    /// Black outline of the given width, no fill
    pub fn stroked(width: f64) -> Self {
        Self {
            fill: Some("none".to_string()),
            stroke: Some("black".to_string()),
            stroke_width: Some(width),
            ..Self::default()
        }
    }

    /// Solid fill, no outline
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            stroke: Some("none".to_string()),
            ..Self::default()
        }
    }

    /// Invisible element, used for the bounding rectangle of a symbol
    pub fn hidden() -> Self {
        Self {
            fill: Some("none".to_string()),
            stroke: Some("none".to_string()),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_linecap(mut self, linecap: impl Into<String>) -> Self {
        self.linecap = Some(linecap.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Format as SVG attributes, each preceded by a space
    pub fn to_attrs(&self) -> String {
        let mut parts = vec![];
        if let Some(fill) = &self.fill {
            parts.push(format!(r#" fill="{}""#, escape_xml(fill)));
        }
        if let Some(stroke) = &self.stroke {
            parts.push(format!(r#" stroke="{}""#, escape_xml(stroke)));
        }
        if let Some(sw) = self.stroke_width {
            parts.push(format!(r#" stroke-width="{}""#, sw));
        }
        if let Some(cap) = &self.linecap {
            parts.push(format!(r#" stroke-linecap="{}""#, escape_xml(cap)));
        }
        for (key, value) in &self.extra {
            parts.push(format!(
                r#" {}="{}""#,
                key.replace('_', "-"),
                escape_xml(value)
            ));
        }
        parts.join("")
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    background: Vec<String>,
    body: Vec<String>,
    text: Vec<String>,
    font_family: String,
    font_size: f64,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            background: vec![],
            body: vec![],
            text: vec![],
            font_family: "sans-serif".to_string(),
            font_size: 18.0,
            indent: BASE_INDENT,
        }
    }

    /// Set the font used by every text element
    pub fn set_font(&mut self, family: impl Into<String>, size: f64) {
        self.font_family = family.into();
        self.font_size = size;
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    fn indent_str(&self, level: usize) -> String {
        if self.config.pretty_print {
            " ".repeat(self.config.indent * level)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push_body(&mut self, element: String) {
        let line = format!("{}{}", self.indent_str(self.indent), element);
        self.body.push(line);
    }

    /// Add the rectangle drawn behind everything else
    pub fn add_background(&mut self, bounds: BoundingBox, fill: &str, outline: &str) {
        let style = Style::filled(fill).with_stroke(outline).with_stroke_width(1.0);
        let line = format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(BASE_INDENT),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            style.to_attrs()
        );
        self.background.push(line);
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.push_body(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            x,
            y,
            w,
            h,
            style.to_attrs()
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, r: f64, style: &Style) {
        self.push_body(format!(
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            center.x,
            center.y,
            r,
            style.to_attrs()
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, from: Point, to: Point, style: &Style) {
        self.push_body(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            style.to_attrs()
        ));
    }

    /// Add a polyline element
    pub fn add_polyline(&mut self, points: &[Point], style: &Style) {
        self.push_body(format!(
            r#"<polyline points="{}"{}/>"#,
            points_attr(points),
            style.to_attrs()
        ));
    }

    /// Add a polygon element
    pub fn add_polygon(&mut self, points: &[Point], style: &Style) {
        self.push_body(format!(
            r#"<polygon points="{}"{}/>"#,
            points_attr(points),
            style.to_attrs()
        ));
    }

    /// Add a path element
    pub fn add_path(&mut self, path: &PathData, style: &Style) {
        self.push_body(format!(
            r#"<path d="{}"{}/>"#,
            path.to_svg_d(),
            style.to_attrs()
        ));
    }

    /// Add a text element on the text layer.
    ///
    /// The vertical part of `justify` shifts the baseline by a fraction of
    /// the font size, since `dominant-baseline` is not honored by every
    /// viewer.
    pub fn add_text(&mut self, text: &str, position: Point, justify: Justify) {
        let y = position.y + justify.vertical.baseline_shift() * self.font_size;
        let line = format!(
            r#"{}<text x="{}" y="{}" text-anchor="{}">{}</text>"#,
            self.indent_str(BASE_INDENT),
            position.x,
            y,
            justify.horizontal.as_str(),
            escape_xml(text)
        );
        self.text.push(line);
    }

    /// Open a group on the body layer
    pub fn start_group(&mut self, id: Option<&str>, transform: Option<&str>) {
        let id_attr = id
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let transform_attr = transform
            .map(|t| format!(r#" transform="{}""#, t))
            .unwrap_or_default();
        self.push_body(format!("<g{}{}>", id_attr, transform_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1).max(BASE_INDENT);
        self.push_body("</g>".to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty() && self.body.is_empty() && self.text.is_empty()
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let nl = self.newline();
        let layer_indent = self.indent_str(1);

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            viewbox.width, viewbox.height, viewbox.x, viewbox.y, viewbox.width, viewbox.height
        ));
        svg.push_str(nl);

        let text_attrs = format!(
            r#" font-family="{}" font-size="{}" fill="black""#,
            escape_xml(&self.font_family),
            self.font_size
        );
        let layers = [
            ("background", String::new(), &self.background),
            ("body", String::new(), &self.body),
            ("text", text_attrs, &self.text),
        ];
        for (id, attrs, elements) in layers {
            if elements.is_empty() {
                continue;
            }
            svg.push_str(&format!(r#"{}<g id="{}"{}>"#, layer_indent, id, attrs));
            svg.push_str(nl);
            for elem in elements {
                svg.push_str(elem);
                svg.push_str(nl);
            }
            svg.push_str(&layer_indent);
            svg.push_str("</g>");
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
