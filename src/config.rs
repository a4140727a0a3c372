//! Schematic-wide drawing options
//!
//! Options can be set in code with the `with_*` builders or loaded from a
//! TOML file. Every key is optional:
//!
//! ```toml
//! [schematic]
//! font_size = 12
//! line_width = 2
//! background = "none"
//! pad = 10
//!
//! [layout]
//! unit_width = 50
//! unit_height = 50
//!
//! [svg]
//! pretty_print = false
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Space added around the drawn geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(pad: f64) -> Self {
        Self {
            left: pad,
            right: pad,
            top: pad,
            bottom: pad,
        }
    }
}

/// Options for a single schematic
#[derive(Debug, Clone, PartialEq)]
pub struct SchematicConfig {
    pub font_size: f64,
    pub font_family: String,
    /// Stroke width of wires and symbol outlines
    pub line_width: f64,
    /// Radius of junction dots
    pub dot_radius: f64,
    /// Fill of the background rectangle, `"none"` to omit
    pub background: String,
    /// Stroke of the background rectangle, `"none"` to omit
    pub outline: String,
    pub padding: Padding,
    pub layout: LayoutConfig,
    pub svg: SvgConfig,
}

impl Default for SchematicConfig {
    fn default() -> Self {
        Self {
            font_size: 18.0,
            font_family: "sans-serif".to_string(),
            line_width: 1.0,
            dot_radius: 4.0,
            background: "white".to_string(),
            outline: "none".to_string(),
            padding: Padding::default(),
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlConfig {
    schematic: TomlSchematic,
    layout: Option<LayoutConfig>,
    svg: Option<SvgConfig>,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlSchematic {
    font_size: Option<f64>,
    font_family: Option<String>,
    line_width: Option<f64>,
    dot_radius: Option<f64>,
    background: Option<String>,
    outline: Option<String>,
    pad: Option<f64>,
    left_pad: Option<f64>,
    right_pad: Option<f64>,
    top_pad: Option<f64>,
    bottom_pad: Option<f64>,
}

impl SchematicConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// `pad` applies to every side and is added to the per-side values.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        let s = parsed.schematic;
        let pad = s.pad.unwrap_or(0.0);

        Ok(SchematicConfig {
            font_size: s.font_size.unwrap_or(defaults.font_size),
            font_family: s.font_family.unwrap_or(defaults.font_family),
            line_width: s.line_width.unwrap_or(defaults.line_width),
            dot_radius: s.dot_radius.unwrap_or(defaults.dot_radius),
            background: s.background.unwrap_or(defaults.background),
            outline: s.outline.unwrap_or(defaults.outline),
            padding: Padding {
                left: s.left_pad.unwrap_or(0.0) + pad,
                right: s.right_pad.unwrap_or(0.0) + pad,
                top: s.top_pad.unwrap_or(0.0) + pad,
                bottom: s.bottom_pad.unwrap_or(0.0) + pad,
            },
            layout: parsed.layout.unwrap_or(defaults.layout),
            svg: parsed.svg.unwrap_or(defaults.svg),
        })
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f64) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    pub fn with_background(mut self, fill: impl Into<String>) -> Self {
        self.background = fill.into();
        self
    }

    pub fn with_outline(mut self, stroke: impl Into<String>) -> Self {
        self.outline = stroke.into();
        self
    }

    /// Set the same padding on every side
    pub fn with_padding(mut self, pad: f64) -> Self {
        self.padding = Padding::uniform(pad);
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }

    /// Whether a background rectangle is drawn
    pub fn has_background(&self) -> bool {
        self.background != "none" || self.outline != "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SchematicConfig::default();
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.font_family, "sans-serif");
        assert_eq!(config.line_width, 1.0);
        assert_eq!(config.dot_radius, 4.0);
        assert_eq!(config.padding, Padding::default());
        assert!(config.has_background());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SchematicConfig::from_str("").unwrap();
        assert_eq!(config, SchematicConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[schematic]
font_size = 12
font_family = "serif"
line_width = 2
background = "none"
pad = 5
left_pad = 10

[layout]
unit_width = 40

[svg]
pretty_print = false
"#;
        let config = SchematicConfig::from_str(toml).unwrap();
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.font_family, "serif");
        assert_eq!(config.line_width, 2.0);
        assert_eq!(config.dot_radius, 4.0);
        assert!(!config.has_background());
        assert_eq!(
            config.padding,
            Padding {
                left: 15.0,
                right: 5.0,
                top: 5.0,
                bottom: 5.0
            }
        );
        assert_eq!(config.layout.unit_width, 40.0);
        assert_eq!(config.layout.unit_height, 50.0);
        assert!(!config.svg.pretty_print);
        assert!(config.svg.standalone);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SchematicConfig::from_str("[schematic]\nfont_sise = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SchematicConfig::from_file(Path::new("/nonexistent/schematic.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_builder() {
        let config = SchematicConfig::new()
            .with_font("monospace", 10.0)
            .with_line_width(3.0)
            .with_background("none")
            .with_outline("black")
            .with_padding(4.0);
        assert_eq!(config.font_family, "monospace");
        assert_eq!(config.padding, Padding::uniform(4.0));
        assert!(config.has_background());
    }
}
