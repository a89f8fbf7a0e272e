//! Cover command - enumerate the tiles covering a bounding box.

use serde_json::json;
use tilecover::service::{TileService, zoom_for_scale};
use tilecover::tile::Tile;
use tracing::debug;

use super::common::{parse_extent, parse_zoom};
use crate::error::CliError;

/// Arguments for the cover command.
pub struct CoverArgs {
    pub bbox: String,
    pub zoom: Option<u8>,
    pub scale: Option<f64>,
    pub template: String,
    pub name: String,
    pub max_tiles: u64,
    pub json: bool,
}

/// Run the cover command.
pub fn run(args: CoverArgs) -> Result<(), CliError> {
    let extent = parse_extent(&args.bbox)?;
    let service = TileService::new(&args.name, &args.template)?;

    let zoom = match (args.zoom, args.scale) {
        (Some(zoom), _) => parse_zoom(zoom)?,
        (None, Some(scale)) => {
            let zoom = zoom_for_scale(scale);
            debug!(scale, zoom = zoom.level(), "Derived zoom level from scale denominator");
            zoom
        }
        (None, None) => {
            return Err(CliError::InvalidArgument(
                "either --zoom or --scale is required".to_string(),
            ));
        }
    };

    let coverage = service.find_tiles_at_zoom(&extent, zoom, args.max_tiles)?;

    // Row-major order keeps output stable across runs
    let mut tiles: Vec<Tile> = coverage.into_iter().collect();
    tiles.sort_by_key(|tile| (tile.identifier().y(), tile.identifier().x()));

    if args.json {
        let entries: Vec<_> = tiles
            .iter()
            .map(|tile| {
                let id = tile.identifier();
                let extent = tile.extent();
                json!({
                    "id": id.id(),
                    "quadkey": id.code(),
                    "column": id.x(),
                    "row": id.y(),
                    "zoom": id.zoom().level(),
                    "extent": [extent.min_lon, extent.min_lat, extent.max_lon, extent.max_lat],
                    "url": tile.url(&service),
                })
            })
            .collect();
        let document = json!({
            "zoom": zoom.level(),
            "count": tiles.len(),
            "tiles": entries,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!("{} tiles cover {} at zoom {}:", tiles.len(), extent, zoom);
    for tile in &tiles {
        println!("  {}  {}", tile.identifier().id(), tile.url(&service));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CoverArgs {
        CoverArgs {
            bbox: "2,50,9,54".to_string(),
            zoom: Some(5),
            scale: None,
            template: "{quadkey}".to_string(),
            name: "tile".to_string(),
            max_tiles: 256,
            json: false,
        }
    }

    #[test]
    fn test_zoom_and_scale_both_absent_is_rejected() {
        let mut bad = args();
        bad.zoom = None;
        let err = run(bad).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_scale_derives_the_zoom_level() {
        let mut by_scale = args();
        by_scale.zoom = None;
        by_scale.scale = Some(559_082_264.0);
        assert!(run(by_scale).is_ok());
    }

    #[test]
    fn test_oversized_coverage_is_rejected_whole() {
        let mut big = args();
        big.bbox = "-180,-85,180,85".to_string();
        big.zoom = Some(10);
        let err = run(big).unwrap_err();
        assert!(matches!(err, CliError::Service(_)));
    }
}
