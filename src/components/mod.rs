//! Schematic symbols
//!
//! Every symbol kind implements [`Symbol`]: it declares its pins in
//! normalized local space, the axis its geometry is drawn along, and how to
//! draw itself. [`crate::schematic::Schematic::add`] does the rest: it
//! resolves the placement, draws the symbol inside a group carrying the
//! orientation transform, writes the name and value text, and returns the
//! placed [`Tile`].
//!
//! ```
//! use svg_schematic::prelude::*;
//!
//! let mut sch = Schematic::default();
//! let r = sch.add(Resistor::new().name("R1").value("1k")).unwrap();
//! let c = sch
//!     .add(Capacitor::new().name("C1").at("p", r.pin("p").unwrap()).xoff(25.0))
//!     .unwrap();
//! assert_eq!(c.pin("p").unwrap().x, r.pin("p").unwrap().x + 25.0);
//! ```

pub mod amplifier;
pub mod block;
pub mod canvas;
pub mod passive;
pub mod source;
pub mod terminal;
pub mod tile;
pub mod transistor;

pub use amplifier::{Amp, AmpKind, Converter, Gate, GateKind};
pub use block::{Block, Crossing, Switch, SwitchKind};
pub use canvas::{Annotator, Canvas};
pub use passive::{Capacitor, Diode, Inductor, Resistor};
pub use source::{Ground, Source, SourceKind};
pub use terminal::{Dot, Label, LabelKind, Pin, PinKind};
pub use tile::Tile;
pub use transistor::{Bjt, BjtKind, Mos, MosKind};

use crate::layout::{AttrPolicy, Axis, CompassStyle, OrientTransform, Orientation, PinSet, Placement, Point};

/// Options common to every symbol
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileOptions {
    /// Orientation, `None` uses the symbol's default
    pub orient: Option<Orientation>,
    pub name: Option<String>,
    pub value: Option<String>,
    /// Size in unit cells, `None` uses the symbol's default
    pub size: Option<(f64, f64)>,
    /// Distance between the symbol and its text, `None` uses the schematic default
    pub nudge: Option<f64>,
    pub placement: Placement,
}

/// A symbol kind that can be placed on a schematic
pub trait Symbol {
    /// Name used in diagnostics and as the SVG group id
    const KIND: &'static str;

    fn options(&self) -> &TileOptions;

    fn options_mut(&mut self) -> &mut TileOptions;

    /// Axis the local geometry is drawn along
    fn authored_axis(&self) -> Axis;

    /// Orientation used when the caller gives none
    fn default_orientation(&self) -> Orientation {
        Orientation {
            axis: Some(self.authored_axis()),
            ..Orientation::default()
        }
    }

    /// Size in unit cells
    fn default_size(&self) -> (f64, f64) {
        (2.0, 2.0)
    }

    /// Pins in normalized local space
    fn pins(&self) -> PinSet;

    fn compass(&self) -> CompassStyle {
        CompassStyle::Tile
    }

    /// Rendering-only attributes accepted in the placement
    fn attr_policy(&self) -> AttrPolicy {
        AttrPolicy::None
    }

    /// Transform applied to the drawing; normally the one used for anchors
    fn drawing_transform(&self, anchors: OrientTransform) -> OrientTransform {
        anchors
    }

    /// Draw the symbol in local coordinates
    fn draw(&self, canvas: &mut Canvas<'_>);

    /// Write name and value text in drawing coordinates
    fn annotate(&self, _text: &mut Annotator<'_>) {}
}

/// Builder methods shared by every symbol
pub trait Configure: Symbol + Sized {
    fn orient(mut self, orient: impl Into<Orientation>) -> Self {
        self.options_mut().orient = Some(orient.into());
        self
    }

    fn name(mut self, name: impl Into<String>) -> Self {
        self.options_mut().name = Some(name.into());
        self
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.options_mut().value = Some(value.into());
        self
    }

    /// Size in unit cells
    fn size(mut self, width: f64, height: f64) -> Self {
        self.options_mut().size = Some((width, height));
        self
    }

    fn nudge(mut self, nudge: f64) -> Self {
        self.options_mut().nudge = Some(nudge);
        self
    }

    /// Put the named anchor of this symbol at `target`
    fn at(mut self, anchor: impl Into<String>, target: impl Into<Point>) -> Self {
        self.options_mut().placement.bind(anchor, target);
        self
    }

    fn off(mut self, dx: f64, dy: f64) -> Self {
        self.options_mut().placement.set_off(dx, dy);
        self
    }

    fn xoff(mut self, dx: f64) -> Self {
        self.options_mut().placement.set_xoff(dx);
        self
    }

    fn yoff(mut self, dy: f64) -> Self {
        self.options_mut().placement.set_yoff(dy);
        self
    }

    /// Attach a rendering-only attribute
    fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options_mut()
            .placement
            .push_attr(key.into(), value.into());
        self
    }
}

impl<S: Symbol> Configure for S {}

/// Parse a kind name against a table of accepted spellings
pub(crate) fn parse_kind<K: Copy>(
    component: &str,
    s: &str,
    table: &[(&str, K)],
) -> Result<K, crate::error::SchematicError> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, kind)| *kind)
        .ok_or_else(|| {
            let expected: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
            crate::error::SchematicError::unknown_kind(component, s, &expected)
        })
}
