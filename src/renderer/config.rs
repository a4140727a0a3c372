//! Output formatting of the SVG document

use serde::Deserialize;

/// How the document text is laid out. Affects formatting only, never geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgConfig {
    /// Emit the `<?xml ...?>` declaration
    pub standalone: bool,
    /// One element per line, nested by `indent` spaces
    pub pretty_print: bool,
    pub indent: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            indent: 2,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output suitable for inlining into an HTML page
    pub fn inline() -> Self {
        Self {
            standalone: false,
            ..Self::default()
        }
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SvgConfig = toml::from_str("indent = 4").unwrap();
        assert_eq!(config, SvgConfig::default().with_indent(4));
        assert!(toml::from_str::<SvgConfig>("class_prefix = \"x\"").is_err());
    }

    #[test]
    fn test_inline() {
        let config = SvgConfig::inline();
        assert!(!config.standalone);
        assert!(config.pretty_print);
    }
}
