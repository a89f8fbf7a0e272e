//! Stateless construction of tiles from points, neighbours, and names.

use crate::coord::{self, GeoExtent, ZoomLevel};
use crate::service::tile_service::TileService;
use crate::tile::{Tile, TileIdentifier};

/// Stateless factory for tiles of the pseudo-Mercator pyramid.
///
/// The factory carries no configuration and no cached state; callers hold
/// one instance and pass it explicitly wherever tiles are built, so there
/// is no hidden shared state between requests. All operations delegate to
/// the pure conversions in [`crate::coord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileFactory;

impl TileFactory {
    /// Creates a factory.
    pub fn new() -> TileFactory {
        TileFactory
    }

    /// Builds the tile of `service`'s layer containing a geographic point.
    pub fn tile_at(&self, service: &TileService, lon: f64, lat: f64, zoom: ZoomLevel) -> Tile {
        Tile::new(service.find_tile_at(lon, lat, zoom))
    }

    /// Builds the tile immediately east of `tile`, on the same layer.
    ///
    /// Does not wrap: on the grid's last column the result's x equals the
    /// grid width and is outside the valid range. Callers crossing the
    /// edge must check against [`ZoomLevel::tiles_per_axis`].
    pub fn right_neighbour(&self, tile: &Tile) -> Tile {
        Tile::new(tile.identifier().right_neighbour())
    }

    /// Builds the tile immediately south of `tile`, on the same layer.
    ///
    /// Does not wrap at the grid's last row; see [`Self::right_neighbour`].
    pub fn lower_neighbour(&self, tile: &Tile) -> Tile {
        Tile::new(tile.identifier().lower_neighbour())
    }

    /// Geographic bounding box of the tile an identifier names.
    ///
    /// Agrees exactly with [`Tile::extent`] for the same identifier.
    pub fn extent_of(&self, identifier: &TileIdentifier) -> GeoExtent {
        coord::tile_extent(identifier.x(), identifier.y(), identifier.zoom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TileService {
        TileService::new("aerial", "https://tiles.example.com/{quadkey}.jpg").unwrap()
    }

    #[test]
    fn test_tile_at_locates_the_owning_tile() {
        let factory = TileFactory::new();
        let tile = factory.tile_at(&service(), 7.0, 51.0, ZoomLevel::new(5));

        assert_eq!(tile.identifier().x(), 16);
        assert_eq!(tile.identifier().y(), 10);
        assert_eq!(tile.identifier().layer_name(), "aerial");
        assert!(tile.extent().contains(7.0, 51.0));
    }

    #[test]
    fn test_right_neighbour_increments_x() {
        let factory = TileFactory::new();
        let tile = Tile::new(TileIdentifier::new(20, 15, ZoomLevel::new(5), "aerial"));
        let right = factory.right_neighbour(&tile);

        assert_eq!(right.identifier().x(), 21);
        assert_eq!(right.identifier().y(), 15);
        assert_eq!(right.identifier().layer_name(), "aerial");
    }

    #[test]
    fn test_lower_neighbour_increments_y() {
        let factory = TileFactory::new();
        let tile = Tile::new(TileIdentifier::new(20, 15, ZoomLevel::new(5), "aerial"));
        let lower = factory.lower_neighbour(&tile);

        assert_eq!(lower.identifier().x(), 20);
        assert_eq!(lower.identifier().y(), 16);
    }

    #[test]
    fn test_neighbours_share_an_edge_with_the_origin() {
        let factory = TileFactory::new();
        let tile = Tile::new(TileIdentifier::new(8, 5, ZoomLevel::new(4), "aerial"));

        let right = factory.right_neighbour(&tile);
        assert!((tile.extent().max_lon - right.extent().min_lon).abs() < 1e-12);

        let lower = factory.lower_neighbour(&tile);
        assert!((tile.extent().min_lat - lower.extent().max_lat).abs() < 1e-12);
    }

    #[test]
    fn test_extent_of_agrees_with_tile_extent() {
        let factory = TileFactory::new();
        let identifier = TileIdentifier::new(16, 10, ZoomLevel::new(5), "aerial");
        let tile = Tile::new(identifier.clone());

        assert_eq!(factory.extent_of(&identifier), tile.extent());
    }
}
