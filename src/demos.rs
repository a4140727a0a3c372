//! Built-in demo schematics
//!
//! Each demo is a plain function drawing onto a [`Schematic`]; the CLI
//! renders them to SVG files and the integration tests render all of them.

use std::path::{Path, PathBuf};

use crate::components::*;
use crate::config::SchematicConfig;
use crate::error::SchematicError;
use crate::layout::{midpoint, shift, shift_x, shift_y, with_x_of, with_y_of, Point, WireKind};
use crate::schematic::{render_to_file, Schematic};

type BuildFn = fn(&mut Schematic) -> Result<(), SchematicError>;

/// A named demo schematic
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    build: BuildFn,
}

impl Demo {
    /// Draw the demo and return the SVG document
    pub fn render(&self, config: SchematicConfig) -> Result<String, SchematicError> {
        let mut schematic = Schematic::new(config);
        (self.build)(&mut schematic)?;
        schematic.finish()
    }

    /// Draw the demo into `<dir>/<name>.svg`
    pub fn write(&self, dir: &Path, config: SchematicConfig) -> Result<PathBuf, SchematicError> {
        let path = dir.join(format!("{}.svg", self.name));
        render_to_file(&path, config, self.build)?;
        Ok(path)
    }
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "inverting",
        description: "inverting amplifier",
        build: inverting,
    },
    Demo {
        name: "noninverting",
        description: "non-inverting amplifier driven by a sine source",
        build: noninverting,
    },
    Demo {
        name: "inverter",
        description: "CMOS inverter next to its gate symbol",
        build: inverter,
    },
    Demo {
        name: "oscillator",
        description: "cross-coupled LC oscillator",
        build: oscillator,
    },
    Demo {
        name: "pipeline-adc",
        description: "block diagram of a pipelined ADC",
        build: pipeline_adc,
    },
    Demo {
        name: "orientations",
        description: "one transistor in every orientation",
        build: orientations,
    },
    Demo {
        name: "symbols",
        description: "every symbol kind",
        build: symbols,
    },
];

/// Look up a demo by name
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

fn inverting(sch: &mut Schematic) -> Result<(), SchematicError> {
    let vin = sch.add(Pin::new(PinKind::In).name("in").size(1.5, 1.0))?;
    let vout = sch.add(
        Pin::new(PinKind::Out)
            .name("out")
            .size(2.0, 1.0)
            .at("C", vin.c())
            .xoff(350.0),
    )?;
    sch.wire([vin.c(), vout.c()], WireKind::Plain)?;

    let rin = sch.add(Resistor::new().name("Rin").at("W", vin.c()).xoff(25.0))?;
    let vg = sch.add(Dot::new().at("C", rin.east()).xoff(25.0))?;
    let rfb = sch.add(Resistor::new().name("Rfb").at("W", vg.c()).xoff(25.0))?;
    let oj = sch.add(Dot::new().at("C", rfb.east()).xoff(25.0))?;

    let amp = sch.add(
        Amp::new(AmpKind::OpAmp)
            .orient("-")
            .at("C", rfb.c())
            .yoff(75.0),
    )?;
    sch.wire([oj.c(), amp.pin("o")?], WireKind::VerticalHorizontal)?;
    let gnd = sch.add(Ground::new().orient("h|").at("C", amp.pin("pi")?).xoff(-25.0))?;
    sch.wire([gnd.c(), amp.pin("pi")?], WireKind::Plain)?;
    sch.wire([vg.c(), amp.pin("ni")?], WireKind::VerticalHorizontal)?;
    sch.add(Label::new(LabelKind::Plain).loc("sw").name("Vg").at("C", vg.c()))?;
    Ok(())
}

fn noninverting(sch: &mut Schematic) -> Result<(), SchematicError> {
    let vin = sch.add(Source::new(SourceKind::Sine))?;
    let vin_p = vin.pin("p")?;
    sch.add(Label::new(LabelKind::Plain).loc("n").name("Vin").at("C", vin_p))?;
    sch.add(Ground::new().at("C", vin.pin("n")?))?;

    let amp = sch.add(Amp::new(AmpKind::OpAmp).at("pi", vin_p).xoff(100.0))?;
    let (ni, o) = (amp.pin("ni")?, amp.pin("o")?);
    sch.add(Label::new(LabelKind::Plain).loc("n").name("Vf").at("C", ni).xoff(-25.0))?;
    sch.wire([vin_p, amp.pin("pi")?], WireKind::Plain)?;

    let out = sch.add(
        Pin::new(PinKind::Out)
            .name("out")
            .size(2.0, 1.0)
            .at("C", o)
            .xoff(50.0),
    )?;
    sch.wire([o, out.c()], WireKind::Plain)?;
    let oj = sch.add(Dot::new().at("C", o).xoff(25.0))?;

    let r1 = sch.add(Resistor::new().name("R1").orient("v").at("p", ni).off(-25.0, 50.0))?;
    sch.wire([r1.north(), ni], WireKind::VerticalHorizontal)?;
    let r2 = sch.add(Resistor::new().name("R2").at("C", amp.c()).yoff(75.0))?;
    sch.wire([r1.pin("p")?, r2.west()], WireKind::VerticalHorizontal)?;
    sch.wire([oj.c(), r2.east()], WireKind::VerticalHorizontal)?;
    sch.add(Dot::new().at("C", r2.west()).xoff(-25.0))?;
    sch.add(Ground::new().at("C", r1.pin("n")?))?;
    Ok(())
}

fn inverter(sch: &mut Schematic) -> Result<(), SchematicError> {
    let mp = sch.add(Mos::pmos())?;
    let mn = sch.add(Mos::nmos().at("N", mp.south()))?;
    let vin = sch.add(
        Pin::new(PinKind::In)
            .name("Vin")
            .size(2.0, 1.0)
            .at("C", midpoint(mp.pin("g")?, mn.pin("g")?))
            .xoff(-50.0),
    )?;
    let vout = sch.add(
        Pin::new(PinKind::Out)
            .name("Vout")
            .size(2.0, 1.0)
            .at("C", midpoint(mp.pin("d")?, mn.pin("d")?))
            .xoff(50.0),
    )?;
    sch.add(Label::new(LabelKind::Plain).loc("n").name("Vdd").at("C", mp.pin("s")?))?;
    sch.add(Ground::new().at("C", mn.pin("s")?))?;
    for (pin, mos, terminal) in [(&vin, &mp, "g"), (&vin, &mn, "g"), (&vout, &mp, "d"), (&vout, &mn, "d")] {
        sch.wire([pin.pin("t")?, mos.pin(terminal)?], WireKind::HorizontalVertical)?;
    }

    let inv = sch.add(Gate::inverter().at("N", mn.south()).yoff(25.0))?;
    let (i, o) = (inv.pin("i")?, inv.pin("o")?);
    let vin = sch.add(Pin::new(PinKind::In).name("Vin").size(2.0, 1.0).at("t", i).xoff(-25.0))?;
    let vout = sch.add(Pin::new(PinKind::Out).name("Vout").size(2.0, 1.0).at("t", o).xoff(25.0))?;
    sch.wire([o, vout.pin("t")?], WireKind::Plain)?;
    sch.wire([i, vin.pin("t")?], WireKind::Plain)?;
    Ok(())
}

fn oscillator(sch: &mut Schematic) -> Result<(), SchematicError> {
    let vdd = sch.add(Label::new(LabelKind::Plain).loc("n").nudge(10.0).name("Vdd"))?;
    sch.wire([vdd.c(), shift_y(vdd.c(), 25.0)], WireKind::Plain)?;

    let ll = sch.add(
        Inductor::new()
            .orient("v")
            .name("L/2")
            .at("p", shift(vdd.c(), -125.0, 25.0)),
    )?;
    let lr = sch.add(
        Inductor::new()
            .orient("v|")
            .name("L/2")
            .at("p", shift(vdd.c(), 125.0, 25.0)),
    )?;
    let (lln, lrn) = (ll.pin("n")?, lr.pin("n")?);
    let c = sch.add(Capacitor::new().orient("h").name("C").at("C", midpoint(lln, lrn)))?;
    sch.wire([ll.pin("p")?, lr.pin("p")?], WireKind::Plain)?;
    sch.wire([lln, c.pin("p")?], WireKind::Plain)?;
    sch.wire([lrn, c.pin("n")?], WireKind::Plain)?;

    let ml = sch.add(Mos::nmos().orient("|").at("d", lln).yoff(75.0))?;
    let mr = sch.add(Mos::nmos().at("d", lrn).yoff(75.0))?;
    sch.wire([lln, ml.pin("d")?], WireKind::Plain)?;
    sch.wire([lrn, mr.pin("d")?], WireKind::Plain)?;

    let (mlg, mrg) = (ml.pin("g")?, mr.pin("g")?);
    let cross = sch.add(
        Crossing::new()
            .pass_under("white")
            .orient("v")
            .at("C", midpoint(mlg, mrg))
            .yoff(-50.0),
    )?;
    sch.wire([mlg, cross.pin("pi")?], WireKind::HorizontalVertical)?;
    sch.wire([mrg, cross.pin("ni")?], WireKind::HorizontalVertical)?;
    sch.wire([lrn, cross.pin("po")?], WireKind::VerticalHorizontal)?;

    let (mls, mrs) = (ml.pin("s")?, mr.pin("s")?);
    sch.wire(
        [mls, shift_y(mls, 12.0), shift_y(mrs, 12.0), mrs],
        WireKind::Plain,
    )?;
    sch.add(
        Source::new(SourceKind::Idc)
            .value("Iss")
            .at("p", midpoint(mls, mrs))
            .yoff(12.0),
    )?;
    Ok(())
}

fn pipeline_adc(sch: &mut Schematic) -> Result<(), SchematicError> {
    // first stage, drawn in detail on a shaded block
    let i = sch.add(Pin::new(PinKind::In).name("in"))?;
    let it = i.pin("t")?;
    let s1 = sch.add(
        Block::new()
            .background("lightgray")
            .size(10.5, 4.5)
            .at("NW", it)
            .off(25.0, -62.5),
    )?;
    sch.add(Label::new(LabelKind::Plain).loc("nw").name("Stage 1").at("C", s1.south_east()))?;
    let adc = sch.add(Block::new().name("2 bit").value("Flash").at("W", it).off(75.0, 100.0))?;
    let dac = sch.add(Block::new().name("2 bit").value("DAC").at("i", adc.pin("o")?).xoff(50.0))?;
    let sh = sch.add(
        Block::new()
            .name("SAH")
            .at("C", with_x_of(it, midpoint(adc.c(), dac.c()))),
    )?;
    let sum = sch.add(
        Source::new(SourceKind::Sum)
            .orient("h|")
            .at("W", with_x_of(it, dac.east()))
            .xoff(25.0),
    )?;
    sch.add(Label::new(LabelKind::Plain).loc("nw").name("+").at("C", sum.west()))?;
    sch.add(Label::new(LabelKind::Plain).loc("se").name("−").at("C", sum.south()))?;
    let amp = sch.add(
        Amp::new(AmpKind::SingleEnded)
            .name("4×")
            .at("i", sum.east())
            .xoff(25.0),
    )?;
    sch.wire([it, sh.pin("i")?], WireKind::Plain)?;
    sch.wire([sh.pin("o")?, sum.west()], WireKind::Plain)?;
    sch.wire([sum.east(), amp.pin("i")?], WireKind::Plain)?;
    sch.wire([shift_x(it, 50.0), adc.pin("i")?], WireKind::VerticalHorizontal)?;
    sch.wire([adc.pin("o")?, dac.pin("i")?], WireKind::Plain)?;
    sch.wire([dac.pin("o")?, sum.south()], WireKind::HorizontalVertical)?;

    // remaining stages
    let s2 = sch.add(Block::new().name("Stage 2").at("N", dac.south()).off(25.0, 75.0))?;
    let s3 = sch.add(Block::new().name("Stage 3").at("W", s2.east()).xoff(50.0))?;
    let s4 = sch.add(Block::new().name("4 bit").value("Flash").at("W", s3.east()).xoff(50.0))?;
    sch.wire([s2.pin("o")?, s3.pin("i")?], WireKind::Plain)?;
    sch.wire([s3.pin("o")?, s4.pin("i")?], WireKind::Plain)?;
    let ao = amp.pin("o")?;
    sch.wire(
        [
            ao,
            shift_x(ao, 50.0),
            shift(s1.south_east(), 25.0, 25.0),
            shift(s2.north_west(), -25.0, -25.0),
            shift_x(s2.west(), -25.0),
            s2.west(),
        ],
        WireKind::Plain,
    )?;

    // error correction
    let ec = sch.add(
        Block::new()
            .name("Digital Error Correction")
            .size(9.0, 1.0)
            .at("NW", s2.south_west())
            .off(-75.0, 50.0),
    )?;
    let eco = ec.pin("o")?;
    let out = sch.add(
        Pin::new(PinKind::Out)
            .name("out")
            .size(2.0, 1.0)
            .at("t", shift_x(eco, 50.0)),
    )?;
    sch.wire([eco, out.pin("t")?], WireKind::Plain)?;
    sch.add(
        Label::new(LabelKind::Slash)
            .loc("s")
            .name("10")
            .at("C", shift_x(ec.east(), 25.0)),
    )?;

    let tap = midpoint(adc.pin("o")?, dac.pin("i")?);
    let buses = [(tap, "2"), (s2.south(), "2"), (s3.south(), "2"), (s4.south(), "4")];
    for (from, width) in buses {
        let bus = sch.wire([from, with_y_of(from, ec.north())], WireKind::Plain)?;
        sch.add(
            Label::new(LabelKind::Slash)
                .loc("w")
                .name(width)
                .nudge(8.0)
                .at("C", bus.end)
                .yoff(-25.0),
        )?;
    }
    Ok(())
}

fn orientations(sch: &mut Schematic) -> Result<(), SchematicError> {
    const ORIENTS: [&str; 8] = ["", "|", "-", "|-", "h", "h|", "h-", "h|-"];
    let mut at = Point::ORIGIN;
    for orient in ORIENTS {
        let q = sch.add(
            Bjt::npn()
                .orient(orient)
                .name(format!("'{orient}'"))
                .at("C", at),
        )?;
        for terminal in ["c", "b", "e"] {
            sch.add(Dot::new().kind(PinKind::None).value(terminal).at("t", q.pin(terminal)?))?;
        }
        at = shift_x(at, 200.0);
    }
    Ok(())
}

fn symbols(sch: &mut Schematic) -> Result<(), SchematicError> {
    let spacing = 150.0;

    let mut at = Point::ORIGIN;
    for kind in [
        SourceKind::Empty,
        SourceKind::Vdc,
        SourceKind::Idc,
        SourceKind::Sine,
        SourceKind::Noise,
        SourceKind::Sum,
        SourceKind::Mult,
        SourceKind::Cv,
        SourceKind::Ci,
    ] {
        sch.add(Source::new(kind).name(format!("{kind:?}")).at("C", at))?;
        at = shift_x(at, spacing);
    }

    let mut at = Point::new(0.0, spacing);
    for kind in [
        AmpKind::SingleEnded,
        AmpKind::OpAmp,
        AmpKind::DiffAmp,
        AmpKind::Comparator,
    ] {
        sch.add(Amp::new(kind).name("A").at("C", at))?;
        sch.add(Converter::new(kind).name("D").at("C", shift_y(at, spacing)))?;
        at = shift_x(at, spacing);
    }
    sch.add(Gate::inverter().at("C", at))?;
    sch.add(Bjt::pnp().name("Q1").value("pnp").at("C", shift_x(at, spacing)))?;
    sch.add(Bjt::new(BjtKind::Unmarked).at("C", shift_x(at, 2.0 * spacing)))?;
    sch.add(Mos::new(MosKind::Unmarked).at("C", shift_x(at, 3.0 * spacing)))?;

    let mut at = Point::new(0.0, 3.0 * spacing);
    sch.add(Diode::new().name("D1").color("darkred").at("C", at))?;
    at = shift_x(at, spacing);
    sch.add(Capacitor::new().name("C1").value("1n").at("C", at))?;
    at = shift_x(at, spacing);
    sch.add(Switch::new(SwitchKind::Spst).name("S1").value("on").at("C", at))?;
    at = shift_x(at, spacing);
    sch.add(Switch::new(SwitchKind::Spdt).dots(true).name("S2").at("C", at))?;
    at = shift_x(at, spacing);
    sch.add(Switch::new(SwitchKind::Spdt).orient("v-").name("S3").value("sel").at("C", at))?;
    at = shift_x(at, spacing);
    sch.add(
        Block::new()
            .line_width(2.0)
            .name("dashed")
            .attr("stroke_dasharray", "4 2")
            .at("C", at),
    )?;
    at = shift_x(at, spacing);
    sch.add(Crossing::new().at("C", at))?;

    let mut at = Point::new(0.0, 4.0 * spacing);
    for (kind, loc) in [
        (LabelKind::Plain, "c"),
        (LabelKind::Arrow, "n"),
        (LabelKind::ArrowTip, "e"),
        (LabelKind::Slash, "s"),
        (LabelKind::Dot, "nw"),
    ] {
        sch.add(
            Label::new(kind)
                .loc(loc)
                .color("blue")
                .name(format!("{kind:?}"))
                .at("C", at),
        )?;
        at = shift_x(at, spacing);
    }
    for kind in [PinKind::Dot, PinKind::In, PinKind::Out, PinKind::None] {
        sch.add(
            Pin::new(kind)
                .orient("|")
                .name(format!("{kind:?}"))
                .value("pin")
                .at("t", at),
        )?;
        at = shift_x(at, spacing);
    }
    Ok(())
}
