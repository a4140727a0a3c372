//! Schematic sessions
//!
//! A [`Schematic`] owns the drawing surface and the accumulated bounds of
//! everything placed on it. Components and wires are added one at a time;
//! [`Schematic::finish`] consumes the session and produces the SVG document.

use std::path::Path;

use crate::components::{Annotator, Canvas, Symbol, Tile};
use crate::config::SchematicConfig;
use crate::error::SchematicError;
use crate::layout::{resolve, BoundingBox, Footprint, OrientTransform, Point, Wire, WireKind};
use crate::renderer::{Style, SvgBuilder};

/// A wire with optional styling
#[derive(Debug, Clone, PartialEq)]
pub struct WireSpec {
    pub points: Vec<Point>,
    pub kind: WireKind,
    /// Stroke width, `None` uses the schematic line width
    pub line_width: Option<f64>,
    /// Stroke color, `None` draws black
    pub color: Option<String>,
}

impl WireSpec {
    pub fn new(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            kind: WireKind::Plain,
            line_width: None,
            color: None,
        }
    }

    pub fn kind(mut self, kind: WireKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A drawing session
pub struct Schematic {
    config: SchematicConfig,
    svg: SvgBuilder,
    bounds: Option<BoundingBox>,
}

impl Default for Schematic {
    fn default() -> Self {
        Self::new(SchematicConfig::default())
    }
}

impl Schematic {
    pub fn new(config: SchematicConfig) -> Self {
        let mut svg = SvgBuilder::new(config.svg.clone());
        svg.set_font(config.font_family.clone(), config.font_size);
        Self {
            config,
            svg,
            bounds: None,
        }
    }

    pub fn config(&self) -> &SchematicConfig {
        &self.config
    }

    /// Place and draw a symbol.
    ///
    /// The placement is validated before anything is drawn, so a rejected
    /// symbol leaves the schematic untouched.
    pub fn add<S: Symbol>(&mut self, symbol: S) -> Result<Tile, SchematicError> {
        let options = symbol.options();
        let orientation = options.orient.unwrap_or_else(|| symbol.default_orientation());
        let transform = OrientTransform::new(orientation, symbol.authored_axis().other());
        let (cols, rows) = options.size.unwrap_or_else(|| symbol.default_size());
        let (width, height) = self.config.layout.cells(cols, rows);

        let pins = symbol.pins();
        let footprint = Footprint {
            pins: &pins,
            compass: symbol.compass(),
            width,
            height,
            attrs: symbol.attr_policy(),
        };
        let resolved = resolve(S::KIND, &footprint, &transform, &options.placement)?;
        let center = resolved.center;
        let (ew, eh) = resolved.extent;
        self.update_bounds(BoundingBox::from_center(center, ew, eh));

        let group_transform = symbol.drawing_transform(transform).svg_transform(center);
        let group_id = S::KIND.to_lowercase();
        self.svg.start_group(Some(&group_id), Some(&group_transform));
        self.svg
            .add_rect(-width / 2.0, -height / 2.0, width, height, &Style::hidden());
        {
            let mut canvas = Canvas::new(
                &mut self.svg,
                pins.scaled(width, height),
                (width, height),
                self.config.line_width,
                self.config.dot_radius,
                &self.config.background,
                options.placement.attrs(),
            );
            symbol.draw(&mut canvas);
        }
        self.svg.end_group();

        let tile = Tile::new(S::KIND, center, resolved.extent, orientation, resolved.anchors);

        let mut text = Annotator::new(
            &mut self.svg,
            center,
            (width, height),
            orientation,
            transform.rotates(),
            (options.nudge, self.config.layout.nudge),
            self.config.dot_radius,
            (options.name.as_deref(), options.value.as_deref()),
        );
        symbol.annotate(&mut text);

        log::debug!(
            "placed {} {} at ({}, {})",
            S::KIND,
            options.name.as_deref().unwrap_or("<unnamed>"),
            center.x,
            center.y
        );
        Ok(tile)
    }

    /// Route and draw a plain black wire
    pub fn wire(
        &mut self,
        points: impl IntoIterator<Item = impl Into<Point>>,
        kind: WireKind,
    ) -> Result<Wire, SchematicError> {
        self.wire_with(WireSpec::new(points).kind(kind))
    }

    /// Route and draw a styled wire
    pub fn wire_with(&mut self, spec: WireSpec) -> Result<Wire, SchematicError> {
        let wire = Wire::new(&spec.points, spec.kind)?;
        let style = Style::stroked(spec.line_width.unwrap_or(self.config.line_width))
            .with_stroke(spec.color.as_deref().unwrap_or("black"))
            .with_linecap("round");
        self.svg.add_polyline(&wire.path, &style);
        for &p in &spec.points {
            self.update_bounds(BoundingBox::at_point(p));
        }
        Ok(wire)
    }

    /// Grow the drawn extent to cover `bbox`
    pub fn update_bounds(&mut self, bbox: BoundingBox) {
        self.bounds = Some(match self.bounds {
            Some(current) => current.union(&bbox),
            None => bbox,
        });
    }

    /// Extent of everything drawn so far
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// The drawing's view box: bounds grown by the paddings and the line
    /// width, so strokes on the outermost geometry are not clipped.
    pub fn viewport(&self) -> Option<BoundingBox> {
        let lw = self.config.line_width;
        let pad = self.config.padding;
        self.bounds
            .map(|b| b.pad(pad.left + lw, pad.top + lw, pad.right + lw, pad.bottom + lw))
    }

    /// Finalize the document
    pub fn finish(mut self) -> Result<String, SchematicError> {
        let viewport = self.viewport().ok_or(SchematicError::EmptySchematic)?;
        if self.config.has_background() {
            self.svg
                .add_background(viewport, &self.config.background, &self.config.outline);
        }
        Ok(self.svg.build(viewport))
    }

    /// Finalize the document and write it to `path`
    pub fn save(self, path: impl AsRef<Path>) -> Result<(), SchematicError> {
        let path = path.as_ref();
        let svg = self.finish()?;
        std::fs::write(path, svg)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

/// Run `build` on a fresh schematic and write the result to `path`.
///
/// Configuration and resource errors write nothing. Any other error from
/// `build` still writes whatever was drawn before it, if anything was, and
/// is then returned.
pub fn render_to_file<F>(
    path: impl AsRef<Path>,
    config: SchematicConfig,
    build: F,
) -> Result<(), SchematicError>
where
    F: FnOnce(&mut Schematic) -> Result<(), SchematicError>,
{
    let path = path.as_ref();
    let mut schematic = Schematic::new(config);
    match build(&mut schematic) {
        Ok(()) => schematic.save(path),
        Err(err) if err.is_configuration() || err.is_resource() => Err(err),
        Err(err) => {
            log::warn!("{}: {err}", path.display());
            if schematic.bounds().is_some() {
                if let Err(save_err) = schematic.save(path) {
                    log::warn!("could not write partial drawing: {save_err}");
                }
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Configure, Resistor};
    use crate::config::Padding;

    #[test]
    fn test_empty_schematic() {
        let err = Schematic::default().finish().unwrap_err();
        assert!(matches!(err, SchematicError::EmptySchematic));
        assert!(err.is_resource());
    }

    #[test]
    fn test_bounds_follow_oriented_extent() {
        let mut sch = Schematic::default();
        sch.add(Resistor::new().orient("v").size(2.0, 1.0)).unwrap();
        assert_eq!(sch.bounds(), Some(BoundingBox::new(-25.0, -50.0, 50.0, 100.0)));
    }

    #[test]
    fn test_viewport_includes_padding_and_line_width() {
        let mut config = SchematicConfig::default().with_line_width(2.0);
        config.padding = Padding {
            left: 10.0,
            right: 20.0,
            top: 30.0,
            bottom: 40.0,
        };
        let mut sch = Schematic::new(config);
        sch.update_bounds(BoundingBox::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(sch.viewport(), Some(BoundingBox::new(-12.0, -32.0, 134.0, 124.0)));
    }

    #[test]
    fn test_rejected_symbol_draws_nothing() {
        let mut sch = Schematic::default();
        let err = sch
            .add(Resistor::new().at("p", (0.0, 0.0)).at("n", (50.0, 0.0)))
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(sch.bounds().is_none());
        assert!(sch.svg.is_empty());
    }

    #[test]
    fn test_wire_updates_bounds() {
        let mut sch = Schematic::default();
        let wire = sch
            .wire([(0.0, 0.0), (100.0, 50.0)], WireKind::HorizontalVertical)
            .unwrap();
        assert_eq!(wire.path.len(), 3);
        assert_eq!(sch.bounds(), Some(BoundingBox::new(0.0, 0.0, 100.0, 50.0)));

        let err = sch.wire([(0.0, 0.0)], WireKind::Plain).unwrap_err();
        assert!(matches!(err, SchematicError::TooFewWaypoints { count: 1 }));
    }

    #[test]
    fn test_finish_draws_background() {
        let mut sch = Schematic::default();
        sch.add(Resistor::new()).unwrap();
        let svg = sch.finish().unwrap();
        assert!(svg.contains(r#"<g id="background">"#));
        assert!(svg.contains(r#"viewBox="-51 -51 102 102""#));

        let mut sch = Schematic::new(SchematicConfig::default().with_background("none"));
        sch.add(Resistor::new()).unwrap();
        assert!(!sch.finish().unwrap().contains(r#"<g id="background">"#));
    }
}
