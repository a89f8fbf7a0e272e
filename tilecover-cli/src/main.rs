//! Tilecover CLI - Command-line interface
//!
//! This binary provides command-line access to the tilecover library:
//! tile addressing, coverage enumeration, and catalog-backed requests.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::common::EncodingArg;
use commands::{cover, locate, tiles};

#[derive(Debug, Parser)]
#[command(name = "tilecover")]
#[command(version = tilecover::VERSION)]
#[command(about = "Tile-pyramid addressing and coverage resolution", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find the tile addressing a coordinate at a zoom level
    Locate {
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Zoom level (0-23)
        #[arg(long)]
        zoom: u8,

        /// Tile URL template with {quadkey} or {z}/{x}/{y} placeholders
        #[arg(long, default_value = "{quadkey}")]
        template: String,

        /// Service name used in tile identifiers
        #[arg(long, default_value = "tile")]
        name: String,
    },

    /// Enumerate the tiles covering a bounding box
    Cover {
        /// Bounding box as minLon,minLat,maxLon,maxLat in degrees
        #[arg(long, allow_hyphen_values = true)]
        bbox: String,

        /// Zoom level to enumerate at (0-23)
        #[arg(long, conflicts_with = "scale", required_unless_present = "scale")]
        zoom: Option<u8>,

        /// Scale denominator to derive the zoom level from
        #[arg(long)]
        scale: Option<f64>,

        /// Tile URL template with {quadkey} or {z}/{x}/{y} placeholders
        #[arg(long, default_value = "{quadkey}")]
        template: String,

        /// Service name used in tile identifiers
        #[arg(long, default_value = "tile")]
        name: String,

        /// Maximum number of tiles before the request is rejected
        #[arg(long, default_value = "256")]
        max_tiles: u64,

        /// Print tiles as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a standards-based tile request against a catalog
    Tiles {
        /// Path to the catalog JSON document
        #[arg(long)]
        catalog: PathBuf,

        /// Layer identifier to request
        #[arg(long)]
        layer: String,

        /// Bounding box as minLon,minLat,maxLon,maxLat in degrees
        #[arg(long, allow_hyphen_values = true)]
        bbox: String,

        /// Coordinate reference system for matrix-set selection
        #[arg(long, default_value = "EPSG:4326")]
        crs: String,

        /// Output width in pixels
        #[arg(long, default_value = "256")]
        width: u32,

        /// Output height in pixels
        #[arg(long, default_value = "256")]
        height: u32,

        /// Style identifier (defaults to the layer's default style)
        #[arg(long)]
        style: Option<String>,

        /// Tile format such as image/png (defaults per layer)
        #[arg(long)]
        format: Option<String>,

        /// TIME dimension value for time-aware layers
        #[arg(long)]
        time: Option<String>,

        /// URL encoding for the resolved tiles
        #[arg(long, value_enum, default_value = "kvp")]
        encoding: EncodingArg,

        /// Base endpoint URL (required for KVP encoding)
        #[arg(long)]
        base_url: Option<String>,

        /// Print the resolved coverage as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Initialize logging to stderr, honoring `RUST_LOG` over the verbosity flag.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Locate {
            lon,
            lat,
            zoom,
            template,
            name,
        } => locate::run(locate::LocateArgs {
            lon,
            lat,
            zoom,
            template,
            name,
        }),
        Commands::Cover {
            bbox,
            zoom,
            scale,
            template,
            name,
            max_tiles,
            json,
        } => cover::run(cover::CoverArgs {
            bbox,
            zoom,
            scale,
            template,
            name,
            max_tiles,
            json,
        }),
        Commands::Tiles {
            catalog,
            layer,
            bbox,
            crs,
            width,
            height,
            style,
            format,
            time,
            encoding,
            base_url,
            json,
        } => tiles::run(tiles::TilesArgs {
            catalog,
            layer,
            bbox,
            crs,
            width,
            height,
            style,
            format,
            time,
            encoding,
            base_url,
            json,
        }),
    };

    if let Err(e) = result {
        e.exit();
    }
}
