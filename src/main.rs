//! SVG Schematic CLI
//!
//! Renders the built-in demo schematics to SVG files.
//!
//! Usage:
//!   svg-schematic [OPTIONS] [DEMO]...
//!
//! Options:
//!   -c, --config <FILE>    Drawing options (TOML format)
//!   -o, --out-dir <DIR>    Directory for the SVG files [default: .]
//!   -l, --list             List the demos and exit
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use svg_schematic::demos::{self, DEMOS};
use svg_schematic::SchematicConfig;

#[derive(Parser)]
#[command(name = "svg-schematic")]
#[command(about = "Draw electrical schematics as SVG")]
struct Cli {
    /// Demos to render (all when omitted)
    demos: Vec<String>,

    /// Drawing options (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the SVG files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// List the demos and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.list {
        for demo in DEMOS {
            println!("{:<14} {}", demo.name, demo.description);
        }
        return;
    }

    let config = match &cli.config {
        Some(path) => match SchematicConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SchematicConfig::default(),
    };

    let selected: Vec<_> = if cli.demos.is_empty() {
        DEMOS.iter().collect()
    } else {
        let mut selected = vec![];
        for name in &cli.demos {
            match demos::find(name) {
                Some(demo) => selected.push(demo),
                None => {
                    eprintln!("Unknown demo '{}' (try --list)", name);
                    std::process::exit(1);
                }
            }
        }
        selected
    };

    let mut failed = false;
    for demo in selected {
        match demo.write(&cli.out_dir, config.clone()) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("Error rendering '{}': {}", demo.name, e);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
