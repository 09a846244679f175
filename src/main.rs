//! Sundial CLI: compute dial geometry, render it as text or SVG.
//!
//! The three subcommands pipe into each other through the JSON
//! interchange record:
//!
//! ```bash
//! gnomon compute -p 48.8 -D 10 -z 55 --json > dial.json
//! gnomon text dial.json
//! gnomon compute -p 48.8 -D 10 -z 55 --json | gnomon svg -r 40 -u cm > dial.svg
//! ```

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use gnomon::declination::DeclinationSet;
use gnomon::errors::Result;
use gnomon::float_types::Real;
use gnomon::io::record::SundialRecord;
use gnomon::io::{svg, text};
use gnomon::layout;
use gnomon::Sundial;

#[derive(Parser, Debug)]
#[command(name = "gnomon")]
#[command(about = "Planar sundial geometry and rendering")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the hour lines and print them as text or as a JSON record
    Compute(ComputeArgs),
    /// Render a computed record as a plain-text table
    Text {
        /// JSON record file (stdin when omitted)
        record: Option<PathBuf>,
    },
    /// Render a computed record as an SVG drawing
    Svg(SvgArgs),
}

#[derive(clap::Args, Debug)]
struct ComputeArgs {
    /// Latitude of the sundial in degrees, positive towards north
    #[arg(short = 'p', long)]
    latitude: Real,

    /// Declination of the sundial plane perpendicular in degrees
    #[arg(short = 'D', long)]
    declination: Real,

    /// Zenithal distance of the stylus in degrees
    #[arg(short = 'z', long)]
    zenithal_distance: Real,

    /// Length of the stylus
    #[arg(short = 's', long, default_value_t = 15.0)]
    stylus_length: Real,

    /// Longitude of the sundial in degrees
    #[arg(short = 'l', long, default_value_t = 0.0)]
    longitude: Real,

    /// Emit the JSON interchange record instead of the text table
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct SvgArgs {
    /// JSON record file (stdin when omitted)
    record: Option<PathBuf>,

    /// Maximum radius of the sundial, everything outside is clipped
    #[arg(short, long)]
    radius: Option<Real>,

    /// Unit of the coordinates (cosmetic)
    #[arg(short, long, value_enum)]
    unit: Option<Unit>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Unit {
    Cm,
    Mm,
    In,
    Pt,
    Px,
}

impl Unit {
    fn as_str(self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Px => "px",
        }
    }
}

fn main() {
    // Diagnostics go to stderr so the rendered output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gnomon=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli.command) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let declinations = DeclinationSet::standard();
    match command {
        Command::Compute(args) => {
            let dial = Sundial::new(
                args.latitude,
                args.declination,
                args.zenithal_distance,
                args.stylus_length,
                args.longitude,
            )?;
            let hour_lines = dial.compute_hour_lines(&declinations);
            if args.json {
                println!("{}", SundialRecord::new(&dial, &hour_lines).to_json()?);
            } else {
                print!("{}", text::render(&dial, &hour_lines, &declinations));
            }
        },
        Command::Text { record } => {
            let (dial, hour_lines) = load_record(record)?.into_parts()?;
            print!("{}", text::render(&dial, &hour_lines, &declinations));
        },
        Command::Svg(args) => {
            let (dial, hour_lines) = load_record(args.record)?.into_parts()?;
            let layout = layout::lay_out(&dial, &hour_lines, &declinations, args.radius)?;
            let unit = args.unit.map(Unit::as_str).unwrap_or("");
            println!("{}", svg::document(&dial, &layout, unit));
        },
    }
    Ok(())
}

fn load_record(path: Option<PathBuf>) -> Result<SundialRecord> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        },
    };
    SundialRecord::from_json(&contents)
}
