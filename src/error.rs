//! Error types for schematic construction and output

use thiserror::Error;

/// Errors raised while building or saving a schematic
#[derive(Debug, Error)]
pub enum SchematicError {
    /// More than one anchor of a component was bound to a location
    #[error("{component}: too many location specifiers: {}", anchors.join(", "))]
    TooManyLocations {
        component: String,
        anchors: Vec<String>,
    },

    /// Placement keys that are neither anchors nor accepted attributes
    #[error("{component}: unknown {}: {}", plural_arguments(keys), keys.join(", "))]
    UnknownArguments { component: String, keys: Vec<String> },

    /// Zero, negative or non-finite component size
    #[error("{component}: size must be positive, got {width} x {height}")]
    InvalidSize {
        component: String,
        width: f64,
        height: f64,
    },

    /// Lookup of an anchor a placed component does not have
    #[error("{component}: no anchor named '{anchor}' (valid anchors: {valid_anchors})")]
    UnknownAnchor {
        component: String,
        anchor: String,
        valid_anchors: String,
    },

    /// Unrecognized kind string for a component or wire
    #[error("{component}: unknown kind '{kind}' (expected one of: {expected})")]
    UnknownKind {
        component: String,
        kind: String,
        expected: String,
    },

    /// A wire needs at least two waypoints
    #[error("wire needs at least two points, got {count}")]
    TooFewWaypoints { count: usize },

    /// Finalization of a schematic that never received any geometry
    #[error("no components in schematic")]
    EmptySchematic,

    /// Failure writing the output file
    #[error("failed to write schematic: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by the caller's own build code
    #[error("{0}")]
    Build(String),
}

fn plural_arguments(keys: &[String]) -> &'static str {
    if keys.len() == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl SchematicError {
    pub fn too_many_locations(component: impl Into<String>, anchors: Vec<String>) -> Self {
        Self::TooManyLocations {
            component: component.into(),
            anchors,
        }
    }

    pub fn unknown_arguments(component: impl Into<String>, keys: Vec<String>) -> Self {
        Self::UnknownArguments {
            component: component.into(),
            keys,
        }
    }

    pub fn invalid_size(component: impl Into<String>, width: f64, height: f64) -> Self {
        Self::InvalidSize {
            component: component.into(),
            width,
            height,
        }
    }

    pub fn unknown_anchor(
        component: impl Into<String>,
        anchor: impl Into<String>,
        valid_anchors: Vec<String>,
    ) -> Self {
        Self::UnknownAnchor {
            component: component.into(),
            anchor: anchor.into(),
            valid_anchors: valid_anchors.join(", "),
        }
    }

    pub fn unknown_kind(component: impl Into<String>, kind: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownKind {
            component: component.into(),
            kind: kind.into(),
            expected: expected.join(", "),
        }
    }

    /// Wrap a failure raised by caller code inside a build closure
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build(message.into())
    }

    /// Misuse of the placement or wiring interface
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::TooManyLocations { .. }
                | Self::UnknownArguments { .. }
                | Self::InvalidSize { .. }
                | Self::UnknownAnchor { .. }
                | Self::UnknownKind { .. }
                | Self::TooFewWaypoints { .. }
        )
    }

    /// The schematic cannot be finalized
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::EmptySchematic)
    }

    /// The component type that raised the error, if any
    pub fn component(&self) -> Option<&str> {
        match self {
            Self::TooManyLocations { component, .. }
            | Self::UnknownArguments { component, .. }
            | Self::InvalidSize { component, .. }
            | Self::UnknownAnchor { component, .. }
            | Self::UnknownKind { component, .. } => Some(component),
            _ => None,
        }
    }
}
