//! Tiles command - resolve a standards-based tile request against a catalog.

use std::path::PathBuf;

use tilecover::matrix::{Crs, TileMatrixCatalog};
use tilecover::request::{GetTileRequest, RequestEncoding};
use tilecover::service::TileFactory;
use tracing::debug;

use super::common::{EncodingArg, parse_extent};
use crate::error::CliError;

/// Arguments for the tiles command.
pub struct TilesArgs {
    pub catalog: PathBuf,
    pub layer: String,
    pub bbox: String,
    pub crs: String,
    pub width: u32,
    pub height: u32,
    pub style: Option<String>,
    pub format: Option<String>,
    pub time: Option<String>,
    pub encoding: EncodingArg,
    pub base_url: Option<String>,
    pub json: bool,
}

/// Run the tiles command.
pub fn run(args: TilesArgs) -> Result<(), CliError> {
    let extent = parse_extent(&args.bbox)?;
    let encoding = match args.encoding {
        EncodingArg::Kvp => {
            let base_url = args.base_url.ok_or_else(|| {
                CliError::InvalidArgument("--base-url is required for KVP encoding".to_string())
            })?;
            RequestEncoding::Kvp { base_url }
        }
        EncodingArg::Rest => RequestEncoding::Rest,
    };

    let catalog = TileMatrixCatalog::from_file(&args.catalog).map_err(|e| CliError::Catalog {
        path: args.catalog.display().to_string(),
        source: e,
    })?;
    debug!(
        path = %args.catalog.display(),
        matrix_sets = catalog.matrix_sets().len(),
        layers = catalog.layers().len(),
        "Loaded catalog"
    );

    let mut request = GetTileRequest::new(&args.layer)
        .with_extent(extent)
        .with_crs(Crs::parse(&args.crs))
        .with_output_size(args.width, args.height)
        .with_encoding(encoding);
    if let Some(style) = args.style {
        request = request.with_style(style);
    }
    if let Some(format) = args.format {
        request = request.with_format(format);
    }
    if let Some(time) = args.time {
        request = request.with_time(time);
    }

    let coverage = request.resolve(&catalog, &TileFactory::new())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&coverage)?);
        return Ok(());
    }

    let degraded = if coverage.degraded_crs_match() {
        " (degraded CRS match)"
    } else {
        ""
    };
    println!("Resolved coverage for layer '{}':", args.layer);
    println!("  Matrix set: {}{}", coverage.matrix_set(), degraded);
    println!("  Zoom:       {}", coverage.zoom());
    println!("  Scale:      1:{}", coverage.scale_denominator());
    println!("  Style:      {}", coverage.style());
    println!("  Format:     {}", coverage.format());
    println!("  Tiles:      {}", coverage.tiles().len());
    println!();
    for tile in coverage.tiles() {
        println!("  {}  {}", tile.identifier.id(), tile.url);
    }

    Ok(())
}
