//! Locate command - find the tile addressing a single coordinate.

use tilecover::service::{TileFactory, TileService};

use super::common::parse_zoom;
use crate::error::CliError;

/// Arguments for the locate command.
pub struct LocateArgs {
    pub lon: f64,
    pub lat: f64,
    pub zoom: u8,
    pub template: String,
    pub name: String,
}

/// Run the locate command.
pub fn run(args: LocateArgs) -> Result<(), CliError> {
    let zoom = parse_zoom(args.zoom)?;
    let service = TileService::new(&args.name, &args.template)?;
    let factory = TileFactory::new();

    let tile = factory.tile_at(&service, args.lon, args.lat, zoom);
    let identifier = tile.identifier();

    println!("Tile for {}, {} at zoom {}:", args.lon, args.lat, zoom);
    println!("  Id:      {}", identifier.id());
    println!("  Column:  {}", identifier.x());
    println!("  Row:     {}", identifier.y());
    println!("  Quadkey: {}", identifier.code());
    println!("  Extent:  {}", tile.extent());
    println!("  URL:     {}", tile.url(&service));

    Ok(())
}
