//! Placement properties checked across every symbol kind.
//!
//! For every kind and every orientation:
//! - binding any single anchor puts exactly that anchor on its target
//! - binding any two anchors is rejected, naming both
//! - an unknown anchor name is rejected, naming exactly that key

use svg_schematic::prelude::*;

const ORIENTS: [&str; 12] = [
    "", "h", "v", "|", "-", "|-", "h|", "h-", "h|-", "v|", "v-", "v|-",
];

const EPSILON: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

fn anchor_names<S: Symbol>(symbol: S) -> Vec<String> {
    let mut sch = Schematic::default();
    let tile = sch.add(symbol).unwrap();
    tile.anchors().names()
}

fn check_kind<S, F>(make: F)
where
    S: Symbol,
    F: Fn() -> S,
{
    let target = Point::new(-37.5, 412.0);
    for orient in ORIENTS {
        let names = anchor_names(make().orient(orient));
        assert!(names.iter().any(|n| n == "C"), "{} has no center", S::KIND);

        for name in &names {
            let mut sch = Schematic::default();
            let tile = sch.add(make().orient(orient).at(name.as_str(), target)).unwrap();
            assert!(
                close(tile[name.as_str()], target),
                "{} '{}' anchor {} landed at {:?}",
                S::KIND,
                orient,
                name,
                tile[name.as_str()]
            );
        }

        // anchor idempotence: re-binding a resolved anchor reproduces the tile
        let mut sch = Schematic::default();
        let first = sch.add(make().orient(orient).xoff(10.0).yoff(-20.0)).unwrap();
        for name in &names {
            let again = sch
                .add(make().orient(orient).at(name.as_str(), first[name.as_str()]))
                .unwrap();
            assert!(close(again.center(), first.center()));
        }
    }
}

fn check_pairs<S, F>(make: F)
where
    S: Symbol,
    F: Fn() -> S,
{
    let names = anchor_names(make());
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            let mut sch = Schematic::default();
            let err = sch
                .add(make().at(a.as_str(), (0.0, 0.0)).at(b.as_str(), (10.0, 10.0)))
                .unwrap_err();
            match err {
                SchematicError::TooManyLocations { component, anchors } => {
                    assert_eq!(component, S::KIND);
                    assert_eq!(anchors, vec![a.clone(), b.clone()]);
                }
                other => panic!("expected TooManyLocations, got {other:?}"),
            }
        }
    }
}

fn check_unknown<S, F>(make: F)
where
    S: Symbol,
    F: Fn() -> S,
{
    let mut sch = Schematic::default();
    let err = sch.add(make().at("bogus", (0.0, 0.0))).unwrap_err();
    match err {
        SchematicError::UnknownArguments { component, keys } => {
            assert_eq!(component, S::KIND);
            assert_eq!(keys, vec!["bogus".to_string()]);
        }
        other => panic!("expected UnknownArguments, got {other:?}"),
    }
    assert!(sch.bounds().is_none());
}

macro_rules! kind_tests {
    ($($test:ident => $make:expr;)*) => {
        $(
            #[test]
            fn $test() {
                check_kind($make);
                check_pairs($make);
                check_unknown($make);
            }
        )*
    };
}

kind_tests! {
    test_resistor => Resistor::new;
    test_capacitor => Capacitor::new;
    test_inductor => Inductor::new;
    test_diode => Diode::new;
    test_npn => Bjt::npn;
    test_pnp => Bjt::pnp;
    test_nmos => Mos::nmos;
    test_pmos => Mos::pmos;
    test_amp => || Amp::new(AmpKind::OpAmp);
    test_converter => || Converter::new(AmpKind::SingleEnded);
    test_gate => Gate::inverter;
    test_ground => Ground::new;
    test_source => || Source::new(SourceKind::Vdc);
    test_pin => || Pin::new(PinKind::Out);
    test_dot => Dot::new;
    test_label => || Label::new(LabelKind::Arrow);
    test_block => Block::new;
    test_switch => || Switch::new(SwitchKind::Spdt);
    test_crossing => Crossing::new;
}

#[test]
fn test_scenario_pin_binding() {
    let mut sch = Schematic::default();
    let r = sch
        .add(Resistor::new().orient("h").at("p", (200.0, 200.0)))
        .unwrap();
    assert_eq!(r.c(), Point::new(150.0, 200.0));
}

#[test]
fn test_scenario_mirrored_pin_binding() {
    let mut sch = Schematic::default();
    let r = sch
        .add(Resistor::new().orient("h|").at("p", (200.0, 200.0)))
        .unwrap();
    assert_eq!(r.c(), Point::new(250.0, 200.0));
    assert_eq!(r.pin("p").unwrap(), Point::new(200.0, 200.0));
}

#[test]
fn test_compass_uses_oriented_extent() {
    let mut sch = Schematic::default();
    let r = sch
        .add(Resistor::new().orient("v").size(3.0, 1.0).at("N", (0.0, 0.0)))
        .unwrap();
    assert_eq!(r.size(), (50.0, 150.0));
    assert!(close(r.c(), Point::new(0.0, 75.0)));
    assert!(close(r.pin("p").unwrap(), Point::new(0.0, 0.0)));
}

#[test]
fn test_offset_without_binding() {
    let mut sch = Schematic::default();
    let r = sch.add(Resistor::new().off(30.0, 40.0)).unwrap();
    assert_eq!(r.c(), Point::new(30.0, 40.0));
}

#[test]
fn test_invalid_size() {
    let mut sch = Schematic::default();
    let err = sch.add(Resistor::new().size(0.0, 1.0)).unwrap_err();
    assert!(matches!(err, SchematicError::InvalidSize { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_block_attributes_pass_through() {
    let mut sch = Schematic::default();
    sch.add(Block::new().attr("stroke_dasharray", "4 2")).unwrap();
    let svg = sch.finish().unwrap();
    assert!(svg.contains(r#"stroke-dasharray="4 2""#));

    let mut sch = Schematic::default();
    let err = sch.add(Resistor::new().attr("stroke_dasharray", "4 2")).unwrap_err();
    match err {
        SchematicError::UnknownArguments { keys, .. } => {
            assert_eq!(keys, vec!["stroke_dasharray".to_string()])
        }
        other => panic!("expected UnknownArguments, got {other:?}"),
    }
}

#[test]
fn test_unknown_anchor_lookup() {
    let mut sch = Schematic::default();
    let r = sch.add(Resistor::new()).unwrap();
    let err = r.pin("x").unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.component(), Some("Resistor"));
}
