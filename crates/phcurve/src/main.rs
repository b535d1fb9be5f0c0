//! Command‑line entry point for the `phcurve` tool.
//!
//! Provides subcommands to query pseudo-Hilbert curves, verify their
//! traversal invariants and render them as images.

use std::{
    fmt::Display,
    io,
    ops::Range,
    path::{Path, PathBuf},
    process,
    str::FromStr,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colornames::Color;
use image::Rgba;
use pseudohilbert::{Axis, Corner, Orientation, registry};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI command implementations.
mod cmd;
/// Rendering helpers shared by the CLI.
mod map;

use crate::{
    cmd::CurveSpec,
    map::{MapPalette, StrokeOptions},
};

/// Half-open range of curve offsets parsed from `--chunk`.
#[derive(Clone, Copy, Debug)]
struct ChunkOffsets {
    /// Inclusive start offset for rendering.
    start: u32,
    /// Exclusive end offset for rendering.
    end: u32,
}

impl ChunkOffsets {
    /// Convert the offsets into a standard half-open range.
    fn into_range(self) -> Range<u32> {
        self.start..self.end
    }
}

impl FromStr for ChunkOffsets {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (start, end) = value
            .split_once(':')
            .ok_or_else(|| "chunk must be in START:END form".to_string())?;

        let parse_bound = |label: &str, bound: &str| -> Result<u32, String> {
            bound.trim().parse::<u32>().map_err(|_| {
                format!("invalid {label} offset '{bound}': expected a non-negative integer")
            })
        };

        let start = parse_bound("start", start)?;
        let end = parse_bound("end", end)?;

        if start >= end {
            return Err(format!(
                "chunk start ({start}) must be less than end ({end})"
            ));
        }

        Ok(Self { start, end })
    }
}

/// Validate a curve name against the known set.
fn parse_curve_name(s: &str) -> Result<String, String> {
    if registry::CURVE_NAMES.contains(&s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "Invalid curve name '{}'. Valid options: {}",
            s,
            registry::CURVE_NAMES.join(", ")
        ))
    }
}

/// Parse a named or hex color into an `Rgba` value.
///
/// Hex colors may be `RGB`, `RRGGBB` or `RRGGBBAA`, with or without a leading
/// `#`. Anything else is looked up as a CSS color name.
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    let trimmed = input.trim();
    let raw = trimmed.trim_start_matches('#');
    if raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        let bytes: Vec<u8> = match raw.len() {
            3 => raw
                .chars()
                .filter_map(|c| c.to_digit(16))
                .map(|v| (v * 17) as u8)
                .collect(),
            6 | 8 => (0..raw.len())
                .step_by(2)
                .filter_map(|i| u8::from_str_radix(&raw[i..i + 2], 16).ok())
                .collect(),
            _ => Vec::new(),
        };
        match bytes[..] {
            [r, g, b] => return Ok(Rgba([r, g, b, 0xff])),
            [r, g, b, a] => return Ok(Rgba([r, g, b, a])),
            _ => {}
        }
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!("invalid color '{input}': use a named color or hex (RGB/RRGGBB/RRGGBBAA)")
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

/// Entry corner as spelled on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartCorner {
    /// `(0, 0)`
    #[value(name = "bl")]
    BottomLeft,
    /// `(width - 1, 0)`
    #[value(name = "br")]
    BottomRight,
    /// `(0, height - 1)`
    #[value(name = "tl")]
    TopLeft,
    /// `(width - 1, height - 1)`
    #[value(name = "tr")]
    TopRight,
}

impl From<StartCorner> for Corner {
    fn from(c: StartCorner) -> Self {
        match c {
            StartCorner::BottomLeft => Self::BottomLeft,
            StartCorner::BottomRight => Self::BottomRight,
            StartCorner::TopLeft => Self::TopLeft,
            StartCorner::TopRight => Self::TopRight,
        }
    }
}

/// Preferred crossing axis as spelled on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum MajorAxis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl From<MajorAxis> for Axis {
    fn from(a: MajorAxis) -> Self {
        match a {
            MajorAxis::X => Self::X,
            MajorAxis::Y => Self::Y,
        }
    }
}

/// Curve selection shared by the query and render subcommands.
#[derive(Args, Debug)]
struct CurveArgs {
    #[arg(
        short = 'p',
        long = "pattern",
        default_value = "pseudohilbert",
        value_parser = parse_curve_name,
        help = &format!("Pattern name (options: {})", registry::CURVE_NAMES.join(", "))
    )]
    /// Pattern name.
    pattern: String,

    #[arg(
        long = "start",
        value_enum,
        default_value = "bl",
        help = "Corner the curve enters from"
    )]
    /// Entry corner.
    start: StartCorner,

    #[arg(
        long = "major",
        value_enum,
        default_value = "x",
        help = "Preferred crossing axis (swapped when the grid's parity requires it)"
    )]
    /// Preferred major axis.
    major: MajorAxis,

    #[arg(help = "Grid width in cells")]
    /// Grid width.
    width: u32,

    #[arg(help = "Grid height in cells")]
    /// Grid height.
    height: u32,
}

impl CurveArgs {
    /// Borrow the arguments as a curve selection.
    fn spec(&self) -> CurveSpec<'_> {
        CurveSpec {
            pattern: &self.pattern,
            width: self.width,
            height: self.height,
            orientation: Orientation::new(self.start.into(), self.major.into()),
        }
    }
}

#[derive(Parser)]
#[command(name = "phcurve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `phcurve` tool.
enum Commands {
    #[command(about = "Render a map of a curve to an image file")]
    /// Render a map of a curve.
    Map {
        #[command(flatten)]
        /// Curve selection.
        curve: CurveArgs,

        #[arg(
            short = 's',
            long = "scale",
            value_name = "PIXELS",
            default_value_t = 16,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Pixels per grid cell"
        )]
        /// Pixels per cell.
        scale: u32,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_rgba_color,
            default_value = "#8080ff",
            value_name = "COLOR",
            help = "Foreground color (name or hex)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#ffffff",
            value_name = "COLOR",
            help = "Background color (name or hex)"
        )]
        /// Background color for the map.
        background: Rgba<u8>,

        #[arg(
            long = "chunk",
            value_name = "START:END",
            help = "Draw only the curve segment from START (inclusive) to END (exclusive)"
        )]
        /// Optional start/end offsets (START:END) for the rendered curve segment.
        chunk: Option<ChunkOffsets>,

        #[arg(help = "Output image path (format from extension)")]
        /// Output file path.
        output: PathBuf,
    },

    #[command(about = "Print the index of every cell, top row first")]
    /// Print the coordinate → index table.
    Grid {
        #[command(flatten)]
        /// Curve selection.
        curve: CurveArgs,
    },

    #[command(about = "Print the curve index of cell X Y")]
    /// Coordinate to index lookup.
    Index {
        #[command(flatten)]
        /// Curve selection.
        curve: CurveArgs,

        #[arg(help = "Cell column")]
        /// Cell column.
        x: u32,

        #[arg(help = "Cell row, counted from the bottom")]
        /// Cell row.
        y: u32,
    },

    #[command(about = "Print the cell at curve index INDEX")]
    /// Index to coordinate lookup.
    Point {
        #[command(flatten)]
        /// Curve selection.
        curve: CurveArgs,

        #[arg(help = "Curve index")]
        /// Curve index.
        index: u32,
    },

    #[command(about = "Verify that a curve is a continuous bijection")]
    /// Verify traversal invariants.
    Check {
        #[command(flatten)]
        /// Curve selection.
        curve: CurveArgs,
    },

    #[command(
        name = "list-curves",
        about = "List supported curve names and constraints"
    )]
    /// List supported curves and their constraints.
    ListCurves,
}

/// Print a value or exit with an error.
fn report<T: Display>(result: Result<T>) {
    match result {
        Ok(v) => println!("{v}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the `map` subcommand.
fn handle_map(
    spec: &CurveSpec<'_>,
    scale: u32,
    chunk: Option<ChunkOffsets>,
    stroke: StrokeOptions,
    output: &Path,
) -> Result<String> {
    let image = cmd::map(spec, scale, chunk.map(ChunkOffsets::into_range), stroke)?;
    image.save(output)?;
    info!(path = %output.display(), "saved map");
    Ok(format!(
        "wrote {}x{} map to {}",
        image.width(),
        image.height(),
        output.display()
    ))
}

/// Handle the `check` subcommand.
fn handle_check(spec: &CurveSpec<'_>) {
    match cmd::check(spec) {
        Ok(report) => {
            println!("{report}");
            if !report.passed() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Handle the `list-curves` subcommand.
fn handle_list_curves() {
    println!("Supported curves:");
    for entry in registry::REGISTRY {
        println!(
            "- {:<14} {:<16} {}",
            entry.key, entry.display, entry.constraints
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.v);

    match cli.command {
        Commands::Map {
            curve,
            scale,
            line_width,
            foreground,
            background,
            chunk,
            output,
        } => report(handle_map(
            &curve.spec(),
            scale,
            chunk,
            StrokeOptions {
                line_width,
                palette: MapPalette {
                    foreground,
                    background,
                },
            },
            &output,
        )),
        Commands::Grid { curve } => match cmd::grid(&curve.spec()) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        Commands::Index { curve, x, y } => report(cmd::index(&curve.spec(), x, y)),
        Commands::Point { curve, index } => report(cmd::point(&curve.spec(), index)),
        Commands::Check { curve } => handle_check(&curve.spec()),
        Commands::ListCurves => handle_list_curves(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chunk_offsets() {
        let chunk: ChunkOffsets = "1:5".parse().unwrap();
        assert_eq!(chunk.into_range(), 1..5);
    }

    #[test]
    fn rejects_invalid_chunks() {
        assert!("5:1".parse::<ChunkOffsets>().is_err());
        assert!("abc".parse::<ChunkOffsets>().is_err());
        assert!("1:".parse::<ChunkOffsets>().is_err());
    }

    #[test]
    fn parses_colors() {
        assert_eq!(parse_rgba_color("#fff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_rgba_color("8080ff").unwrap(), Rgba([128, 128, 255, 255]));
        assert_eq!(
            parse_rgba_color("#11223344").unwrap(),
            Rgba([0x11, 0x22, 0x33, 0x44])
        );
    }

    #[test]
    fn curve_args_build_orientation() {
        let cli = Cli::parse_from(["phcurve", "grid", "--start", "tr", "--major", "y", "6", "4"]);
        let Commands::Grid { curve } = cli.command else {
            panic!("expected grid");
        };
        let spec = curve.spec();
        assert_eq!(spec.pattern, "pseudohilbert");
        assert_eq!((spec.width, spec.height), (6, 4));
        assert_eq!(
            spec.orientation,
            Orientation::new(Corner::TopRight, Axis::Y)
        );
    }
}
