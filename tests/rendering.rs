//! End-to-end rendering: SVG output, file writing, configuration and demos.

use pretty_assertions::assert_eq;
use svg_schematic::demos::DEMOS;
use svg_schematic::prelude::*;
use tempfile::tempdir;

#[test]
fn test_group_transform_matches_anchors() {
    let mut sch = Schematic::default();
    let q = sch
        .add(Bjt::npn().orient("h|").at("C", (100.0, 200.0)))
        .unwrap();
    // local collector (50, -50) rotated to (-50, -50), then mirrored
    assert_eq!(q.pin("c").unwrap(), Point::new(150.0, 150.0));

    let svg = sch.finish().unwrap();
    assert!(svg.contains(
        r#"<g id="bjt" transform="translate(100,200) scale(-1,1) rotate(-90)">"#
    ));
}

#[test]
fn test_unrotated_symbol_is_only_translated() {
    let mut sch = Schematic::default();
    sch.add(Capacitor::new().at("C", (30.0, 40.0))).unwrap();
    let svg = sch.finish().unwrap();
    assert!(svg.contains(r#"<g id="capacitor" transform="translate(30,40)">"#));
}

#[test]
fn test_pin_marker_never_rotates() {
    let mut sch = Schematic::default();
    sch.add(Pin::new(PinKind::In).orient("h|").at("t", (10.0, 20.0)))
        .unwrap();
    let svg = sch.finish().unwrap();
    assert!(svg.contains(r#"<g id="pin" transform="translate(10,20)">"#));
}

#[test]
fn test_text_is_outside_symbol_groups() {
    let mut sch = Schematic::default();
    sch.add(Resistor::new().name("R1").value("1k").orient("v"))
        .unwrap();
    let svg = sch.finish().unwrap();

    let text_layer = svg.find(r#"<g id="text""#).unwrap();
    let name = svg.find(">R1</text>").unwrap();
    let value = svg.find(">1k</text>").unwrap();
    assert!(name > text_layer);
    assert!(value > text_layer);
}

#[test]
fn test_text_is_escaped() {
    let mut sch = Schematic::default();
    sch.add(Block::new().name("A<B & C")).unwrap();
    let svg = sch.finish().unwrap();
    assert!(svg.contains(">A&lt;B &amp; C</text>"));
}

#[test]
fn test_styled_wire() {
    let mut sch = Schematic::default();
    let wire = sch
        .wire_with(
            WireSpec::new([(0.0, 0.0), (100.0, 50.0)])
                .kind(WireKind::HorizontalVertical)
                .color("red")
                .line_width(3.0),
        )
        .unwrap();
    assert_eq!(wire.mid, Point::new(50.0, 25.0));

    let svg = sch.finish().unwrap();
    assert!(svg.contains(
        r#"<polyline points="0,0 100,0 100,50" fill="none" stroke="red" stroke-width="3" stroke-linecap="round"/>"#
    ));
}

#[test]
fn test_config_from_toml_applies_to_output() {
    let config = SchematicConfig::from_str(
        r#"
[schematic]
font_size = 12
line_width = 2
background = "none"
pad = 10
"#,
    )
    .unwrap();

    let mut sch = Schematic::new(config);
    sch.add(Resistor::new().name("R1")).unwrap();
    let svg = sch.finish().unwrap();

    assert!(svg.contains(r#"viewBox="-62 -62 124 124""#));
    assert!(svg.contains(r#"font-size="12""#));
    assert!(!svg.contains(r#"<g id="background">"#));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Schematic::default();
    let mut second = Schematic::default();
    first.add(Resistor::new()).unwrap();
    assert!(second.add(Resistor::new().at("p", (0.0, 0.0)).at("n", (1.0, 1.0))).is_err());
    assert!(first.finish().is_ok());
    assert!(matches!(second.finish(), Err(SchematicError::EmptySchematic)));
}

#[test]
fn test_render_to_file_writes_drawing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rc.svg");
    render_to_file(&path, SchematicConfig::default(), |sch| {
        let r = sch.add(Resistor::new().name("R1"))?;
        sch.add(Capacitor::new().at("p", r.pin("p")?))?;
        Ok(())
    })
    .unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(">R1</text>"));
}

#[test]
fn test_render_to_file_skips_configuration_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.svg");
    let err = render_to_file(&path, SchematicConfig::default(), |sch| {
        sch.add(Resistor::new())?;
        sch.add(Resistor::new().at("q", (0.0, 0.0)))?;
        Ok(())
    })
    .unwrap_err();

    assert!(err.is_configuration());
    assert!(!path.exists());
}

#[test]
fn test_render_to_file_skips_empty_schematic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let err = render_to_file(&path, SchematicConfig::default(), |_| Ok(())).unwrap_err();
    assert!(err.is_resource());
    assert!(!path.exists());
}

#[test]
fn test_render_to_file_flushes_partial_drawing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.svg");
    let err = render_to_file(&path, SchematicConfig::default(), |sch| {
        sch.add(Resistor::new().name("R1"))?;
        Err(SchematicError::build("lookup table missing"))
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "lookup table missing");
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains(">R1</text>"));
}

#[test]
fn test_render_to_file_caller_error_before_drawing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nothing.svg");
    let err = render_to_file(&path, SchematicConfig::default(), |_| {
        Err(SchematicError::build("no input"))
    })
    .unwrap_err();

    assert!(matches!(err, SchematicError::Build(_)));
    assert!(!path.exists());
}

#[test]
fn test_every_demo_renders() {
    for demo in DEMOS {
        let svg = demo
            .render(SchematicConfig::default())
            .unwrap_or_else(|e| panic!("demo {} failed: {e}", demo.name));
        assert!(svg.contains("<svg"), "demo {} produced no svg", demo.name);
        assert!(svg.contains(r#"<g id="body">"#));
    }
}

#[test]
fn test_demo_write() {
    let dir = tempdir().unwrap();
    let demo = &DEMOS[0];
    let path = demo.write(dir.path(), SchematicConfig::default()).unwrap();
    assert_eq!(path, dir.path().join(format!("{}.svg", demo.name)));
    assert!(path.exists());
}
