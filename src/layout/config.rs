//! Configuration for component placement

use serde::Deserialize;

/// Geometry options shared by every component in a schematic
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of one unit cell
    pub unit_width: f64,

    /// Height of one unit cell
    pub unit_height: f64,

    /// Default distance between a symbol and its name/value text
    pub nudge: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_width: 50.0,
            unit_height: 50.0,
            nudge: 5.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit cell size
    pub fn with_unit(mut self, width: f64, height: f64) -> Self {
        self.unit_width = width;
        self.unit_height = height;
        self
    }

    /// Set the default text nudge
    pub fn with_nudge(mut self, nudge: f64) -> Self {
        self.nudge = nudge;
        self
    }

    /// Convert a size in unit cells to drawing units
    pub fn cells(&self, width: f64, height: f64) -> (f64, f64) {
        (width * self.unit_width, height * self.unit_height)
    }
}
