//! SVG drawing surface
//!
//! Components draw through [`SvgBuilder`], which collects elements on
//! layers and assembles the final document once the viewport is known.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{PathData, PathSegment};
pub use svg::{escape_xml, Justify, Style, SvgBuilder, TextAnchor, VerticalAlign};
