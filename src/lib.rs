//! SVG Schematic - electrical schematics drawn from code
//!
//! Components are placed relative to the named anchors of components placed
//! before them, oriented with a short flag string, and connected with
//! orthogonally routed wires. The result is a standalone SVG document.
//!
//! # Example
//!
//! ```rust
//! use svg_schematic::prelude::*;
//!
//! let mut sch = Schematic::default();
//! let r = sch.add(Resistor::new().name("R1").value("1k")).unwrap();
//! let c = sch
//!     .add(Capacitor::new().name("C1").at("p", r.pin("p").unwrap()))
//!     .unwrap();
//! sch.wire([r.pin("n").unwrap(), c.pin("n").unwrap()], WireKind::VerticalHorizontal)
//!     .unwrap();
//!
//! let svg = sch.finish().unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("R1"));
//! ```

pub mod components;
pub mod config;
pub mod demos;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod schematic;

pub use config::{ConfigError, Padding, SchematicConfig};
pub use error::SchematicError;
pub use layout::{LayoutConfig, Orientation, Point, WireKind};
pub use renderer::SvgConfig;
pub use schematic::{render_to_file, Schematic, WireSpec};

/// Everything needed to draw a schematic
pub mod prelude {
    pub use crate::components::{
        Amp, AmpKind, Bjt, BjtKind, Block, Capacitor, Configure, Converter, Crossing, Diode, Dot,
        Gate, GateKind, Ground, Inductor, Label, LabelKind, Mos, MosKind, Pin, PinKind, Resistor,
        Source, SourceKind, Switch, SwitchKind, Symbol, Tile,
    };
    pub use crate::config::SchematicConfig;
    pub use crate::error::SchematicError;
    pub use crate::layout::{
        midpoint, midpoint_x, midpoint_y, shift, shift_x, shift_y, with_max_x, with_max_y,
        with_min_x, with_min_y, with_x, with_x_of, with_y, with_y_of, Orientation, Point, Wire,
        WireKind,
    };
    pub use crate::schematic::{render_to_file, Schematic, WireSpec};
}
