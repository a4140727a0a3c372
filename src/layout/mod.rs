//! Placement geometry: points, orientation, anchor resolution and wire routing
//!
//! Everything in this module is pure computation. Drawing happens in
//! [`crate::renderer`] and the two are tied together by
//! [`crate::schematic::Schematic`].

pub mod anchor;
pub mod config;
pub mod routing;
pub mod transform;
pub mod types;

pub use anchor::{
    resolve, Anchors, AttrPolicy, CompassStyle, Footprint, PinSet, Placement, Resolved,
    COMPASS_NAMES,
};
pub use config::LayoutConfig;
pub use routing::{route, Wire, WireKind};
pub use transform::{Axis, OrientTransform, Orientation};
pub use types::*;
