//! Anchor resolution: from a placement request to world coordinates.
//!
//! Every symbol declares a set of pins in normalized local space (fractions
//! of its width and height measured from its center). Together with the
//! compass points every tile receives, these form the anchors a caller may
//! bind to a location. Resolution finds the symbol center that puts the bound
//! anchor on its target, then translates every anchor into the drawing.

use std::ops::Index;

use crate::error::SchematicError;

use super::transform::OrientTransform;
use super::types::Point;

/// Names of the compass anchors, center first
pub const COMPASS_NAMES: [&str; 9] = ["C", "N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const DIAGONAL: f64 = 0.70711 / 4.0;

/// Where the compass anchors sit relative to the tile extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompassStyle {
    /// On the edges and corners of the tile
    #[default]
    Tile,
    /// On a circle of a quarter of the tile size, for round symbols
    Round,
}

impl CompassStyle {
    /// Normalized compass offsets, in [`COMPASS_NAMES`] order
    pub fn offsets(self) -> [(&'static str, Point); 9] {
        let (side, corner) = match self {
            CompassStyle::Tile => (0.5, 0.5),
            CompassStyle::Round => (0.25, DIAGONAL),
        };
        [
            ("C", Point::new(0.0, 0.0)),
            ("N", Point::new(0.0, -side)),
            ("NE", Point::new(corner, -corner)),
            ("E", Point::new(side, 0.0)),
            ("SE", Point::new(corner, corner)),
            ("S", Point::new(0.0, side)),
            ("SW", Point::new(-corner, corner)),
            ("W", Point::new(-side, 0.0)),
            ("NW", Point::new(-corner, -corner)),
        ]
    }
}

/// Pins of a symbol in normalized local space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinSet {
    pins: Vec<(&'static str, Point)>,
}

impl PinSet {
    pub fn new(pins: &[(&'static str, f64, f64)]) -> Self {
        Self {
            pins: pins
                .iter()
                .map(|&(name, x, y)| (name, Point::new(x, y)))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.pins
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Point)> + '_ {
        self.pins.iter().copied()
    }

    /// Pins scaled to a `width` x `height` tile, still unoriented
    pub fn scaled(&self, width: f64, height: f64) -> Anchors {
        let mut anchors = Anchors::default();
        for (name, p) in self.iter() {
            anchors.insert(name, Point::new(p.x * width, p.y * height));
        }
        anchors
    }
}

/// Ordered mapping from anchor name to point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anchors {
    entries: Vec<(String, Point)>,
}

impl Anchors {
    pub fn get(&self, name: &str) -> Option<Point> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| *p)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace an anchor, keeping first-insertion order
    pub fn insert(&mut self, name: impl Into<String>, point: Point) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = point,
            None => self.entries.push((name, point)),
        }
    }

    fn translated(&self, by: Point) -> Anchors {
        Anchors {
            entries: self
                .entries
                .iter()
                .map(|(n, p)| (n.clone(), *p + by))
                .collect(),
        }
    }
}

impl Index<&str> for Anchors {
    type Output = Point;

    fn index(&self, name: &str) -> &Point {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((_, p)) => p,
            None => panic!("no anchor named '{name}'"),
        }
    }
}

/// Which rendering-only attributes a symbol accepts in its placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttrPolicy {
    /// Every attribute is reported as unknown
    #[default]
    None,
    /// Only the listed attribute names
    Only(&'static [&'static str]),
    /// Any attribute (passed through to the drawing)
    Any,
}

impl AttrPolicy {
    pub fn accepts(&self, key: &str) -> bool {
        match self {
            AttrPolicy::None => false,
            AttrPolicy::Only(keys) => keys.contains(&key),
            AttrPolicy::Any => true,
        }
    }
}

/// Caller-supplied placement of a new component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    bindings: Vec<(String, Point)>,
    off: Option<(f64, f64)>,
    xoff: Option<f64>,
    yoff: Option<f64>,
    attrs: Vec<(String, String)>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the named anchor of the new component at `target`
    pub fn at(mut self, anchor: impl Into<String>, target: impl Into<Point>) -> Self {
        self.bind(anchor, target);
        self
    }

    pub fn off(mut self, dx: f64, dy: f64) -> Self {
        self.off = Some((dx, dy));
        self
    }

    pub fn xoff(mut self, dx: f64) -> Self {
        self.xoff = Some(dx);
        self
    }

    pub fn yoff(mut self, dy: f64) -> Self {
        self.yoff = Some(dy);
        self
    }

    /// Attach a rendering-only attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Binding an anchor again replaces its earlier target.
    pub(crate) fn bind(&mut self, anchor: impl Into<String>, target: impl Into<Point>) {
        let (anchor, target) = (anchor.into(), target.into());
        match self.bindings.iter_mut().find(|(name, _)| *name == anchor) {
            Some(binding) => binding.1 = target,
            None => self.bindings.push((anchor, target)),
        }
    }

    pub(crate) fn set_off(&mut self, dx: f64, dy: f64) {
        self.off = Some((dx, dy));
    }

    pub(crate) fn set_xoff(&mut self, dx: f64) {
        self.xoff = Some(dx);
    }

    pub(crate) fn set_yoff(&mut self, dy: f64) {
        self.yoff = Some(dy);
    }

    pub(crate) fn push_attr(&mut self, key: String, value: String) {
        self.attrs.push((key, value));
    }

    pub fn bindings(&self) -> &[(String, Point)] {
        &self.bindings
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// The total offset to apply to the center.
    ///
    /// `off` takes precedence over `xoff`/`yoff`.
    pub fn offset(&self, component: &str) -> (f64, f64) {
        match self.off {
            Some(off) => {
                if self.xoff.is_some() || self.yoff.is_some() {
                    log::warn!("{component}: both off and xoff/yoff given, using off");
                }
                off
            }
            None => (self.xoff.unwrap_or(0.0), self.yoff.unwrap_or(0.0)),
        }
    }
}

/// Local geometry of a symbol at its actual size
#[derive(Debug, Clone, Copy)]
pub struct Footprint<'a> {
    pub pins: &'a PinSet,
    pub compass: CompassStyle,
    /// Authored width in drawing units
    pub width: f64,
    /// Authored height in drawing units
    pub height: f64,
    pub attrs: AttrPolicy,
}

/// The outcome of resolving a placement
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub center: Point,
    /// Extent after orientation (width, height)
    pub extent: (f64, f64),
    /// Every anchor in drawing coordinates, including `C`
    pub anchors: Anchors,
}

/// Offsets of every anchor from the symbol center, after orientation
pub fn placed_offsets(footprint: &Footprint<'_>, transform: &OrientTransform) -> Anchors {
    // compass names follow the tile as drawn, so N is always its top edge
    let (ew, eh) = transform.extent(footprint.width, footprint.height);
    let mut offsets = Anchors::default();
    for (name, p) in footprint.compass.offsets() {
        offsets.insert(name, Point::new(p.x * ew, p.y * eh));
    }
    for (name, p) in footprint.pins.scaled(footprint.width, footprint.height).iter() {
        offsets.insert(name, transform.apply(p));
    }
    offsets
}

/// Resolve the placement of `component` and return its world anchors.
pub fn resolve(
    component: &str,
    footprint: &Footprint<'_>,
    transform: &OrientTransform,
    placement: &Placement,
) -> Result<Resolved, SchematicError> {
    let (width, height) = (footprint.width, footprint.height);
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(SchematicError::invalid_size(component, width, height));
    }

    let offsets = placed_offsets(footprint, transform);

    let (known, unknown): (Vec<_>, Vec<_>) = placement
        .bindings()
        .iter()
        .partition(|(name, _)| offsets.contains(name));

    if known.len() > 1 {
        return Err(SchematicError::too_many_locations(
            component,
            known.iter().map(|(name, _)| name.clone()).collect(),
        ));
    }

    let mut unused: Vec<String> = unknown.iter().map(|(name, _)| name.clone()).collect();
    unused.extend(
        placement
            .attrs()
            .iter()
            .filter(|(key, _)| !footprint.attrs.accepts(key))
            .map(|(key, _)| key.clone()),
    );
    if !unused.is_empty() {
        return Err(SchematicError::unknown_arguments(component, unused));
    }

    let mut center = match known.first() {
        Some((name, target)) => *target - offsets[name.as_str()],
        None => Point::ORIGIN,
    };
    let (dx, dy) = placement.offset(component);
    center = Point::new(center.x + dx, center.y + dy);

    log::debug!(
        "{component}: center ({}, {}) from {:?}",
        center.x,
        center.y,
        known.first().map(|(name, _)| name.as_str())
    );

    Ok(Resolved {
        center,
        extent: transform.extent(width, height),
        anchors: offsets.translated(center),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::transform::{Axis, Orientation};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    fn resistor_pins() -> PinSet {
        PinSet::new(&[("p", 0.5, 0.0), ("n", -0.5, 0.0)])
    }

    fn footprint(pins: &PinSet) -> Footprint<'_> {
        Footprint {
            pins,
            compass: CompassStyle::Tile,
            width: 100.0,
            height: 100.0,
            attrs: AttrPolicy::None,
        }
    }

    fn transform(orient: &str) -> OrientTransform {
        OrientTransform::new(Orientation::parse(orient), Axis::Vertical)
    }

    #[test]
    fn test_no_binding_centers_on_origin() {
        let pins = resistor_pins();
        let r = resolve("R", &footprint(&pins), &transform("h"), &Placement::new()).unwrap();
        assert_eq!(r.center, Point::ORIGIN);
        assert_eq!(r.anchors["C"], Point::ORIGIN);
        assert_eq!(r.anchors["p"], Point::new(50.0, 0.0));
        assert_eq!(r.anchors["NW"], Point::new(-50.0, -50.0));
    }

    #[test]
    fn test_no_binding_with_offset() {
        let pins = resistor_pins();
        let placement = Placement::new().xoff(10.0).yoff(-5.0);
        let r = resolve("R", &footprint(&pins), &transform("h"), &placement).unwrap();
        assert_eq!(r.anchors["C"], Point::new(10.0, -5.0));
    }

    #[test]
    fn test_pin_binding() {
        let pins = resistor_pins();
        let placement = Placement::new().at("p", (200.0, 200.0));
        let r = resolve("R", &footprint(&pins), &transform("h"), &placement).unwrap();
        assert_eq!(r.center, Point::new(150.0, 200.0));
    }

    #[test]
    fn test_pin_binding_mirrored() {
        let pins = resistor_pins();
        let placement = Placement::new().at("p", (200.0, 200.0));
        let r = resolve("R", &footprint(&pins), &transform("h|"), &placement).unwrap();
        assert_eq!(r.center, Point::new(250.0, 200.0));
        assert_eq!(r.anchors["p"], Point::new(200.0, 200.0));
    }

    #[test]
    fn test_compass_binding_follows_rotated_extent() {
        let pins = resistor_pins();
        let fp = Footprint {
            width: 100.0,
            height: 50.0,
            ..footprint(&pins)
        };
        let placement = Placement::new().at("N", (0.0, 0.0));
        let r = resolve("R", &fp, &transform("v"), &placement).unwrap();
        assert!(approx_eq(r.center, Point::new(0.0, 50.0)));
        assert_eq!(r.extent, (50.0, 100.0));
    }

    #[test]
    fn test_every_anchor_lands_on_target() {
        let pins = PinSet::new(&[("c", 0.5, -0.5), ("b", -0.5, 0.0), ("e", 0.5, 0.5)]);
        let target = Point::new(-12.5, 333.0);
        for orient in ["", "h", "v", "|", "-", "h|", "h-", "v|", "v-", "h|-", "v|-"] {
            let t = transform(orient);
            for name in ["c", "b", "e", "C", "N", "NE", "E", "SE", "S", "SW", "W", "NW"] {
                let placement = Placement::new().at(name, target);
                let r = resolve("Bjt", &footprint(&pins), &t, &placement).unwrap();
                assert!(
                    approx_eq(r.anchors[name], target),
                    "{name} with orient '{orient}' landed at {:?}",
                    r.anchors[name]
                );
            }
        }
    }

    #[test]
    fn test_two_bindings_rejected() {
        let pins = resistor_pins();
        let placement = Placement::new().at("p", (0.0, 0.0)).at("C", (1.0, 1.0));
        let err = resolve("Resistor", &footprint(&pins), &transform("h"), &placement).unwrap_err();
        match err {
            SchematicError::TooManyLocations { component, anchors } => {
                assert_eq!(component, "Resistor");
                assert_eq!(anchors, vec!["p".to_string(), "C".to_string()]);
            }
            other => panic!("expected TooManyLocations, got {other:?}"),
        }
    }

    #[test]
    fn test_rebinding_same_anchor_replaces_target() {
        let pins = resistor_pins();
        let placement = Placement::new().at("p", (0.0, 0.0)).at("p", (200.0, 200.0));
        assert_eq!(placement.bindings().len(), 1);
        let r = resolve("Resistor", &footprint(&pins), &transform("h"), &placement).unwrap();
        assert_eq!(r.anchors["p"], Point::new(200.0, 200.0));
    }

    #[test]
    fn test_compass_follows_drawn_tile() {
        let pins = resistor_pins();
        let fp = Footprint {
            width: 100.0,
            height: 75.0,
            ..footprint(&pins)
        };
        let offsets = placed_offsets(&fp, &transform("v"));
        assert_eq!(offsets["N"], Point::new(0.0, -50.0));
        assert_eq!(offsets["E"], Point::new(37.5, 0.0));
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        let pins = resistor_pins();
        let placement = Placement::new().at("q", (0.0, 0.0));
        let err = resolve("Resistor", &footprint(&pins), &transform("h"), &placement).unwrap_err();
        match err {
            SchematicError::UnknownArguments { keys, .. } => assert_eq!(keys, vec!["q"]),
            other => panic!("expected UnknownArguments, got {other:?}"),
        }
    }

    #[test]
    fn test_attrs_follow_policy() {
        let pins = resistor_pins();
        let placement = Placement::new().attr("fill", "red");

        let err = resolve("R", &footprint(&pins), &transform("h"), &placement).unwrap_err();
        assert!(matches!(err, SchematicError::UnknownArguments { .. }));

        let fp = Footprint {
            attrs: AttrPolicy::Only(&["fill"]),
            ..footprint(&pins)
        };
        assert!(resolve("R", &fp, &transform("h"), &placement).is_ok());
    }

    #[test]
    fn test_off_wins_over_xoff() {
        let pins = resistor_pins();
        let placement = Placement::new().xoff(99.0).off(1.0, 2.0);
        let r = resolve("R", &footprint(&pins), &transform("h"), &placement).unwrap();
        assert_eq!(r.center, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_invalid_size_rejected() {
        let pins = resistor_pins();
        for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0)] {
            let fp = Footprint {
                width: w,
                height: h,
                ..footprint(&pins)
            };
            let err = resolve("R", &fp, &transform("h"), &Placement::new()).unwrap_err();
            assert!(matches!(err, SchematicError::InvalidSize { .. }));
        }
    }

    #[test]
    fn test_round_compass() {
        let pins = PinSet::empty();
        let fp = Footprint {
            compass: CompassStyle::Round,
            ..footprint(&pins)
        };
        let r = resolve("Source", &fp, &transform(""), &Placement::new()).unwrap();
        assert_eq!(r.anchors["N"], Point::new(0.0, -25.0));
        assert!(approx_eq(r.anchors["NE"], Point::new(17.67775, -17.67775)));
    }
}
