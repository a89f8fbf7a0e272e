//! Tile value types.
//!
//! A [`TileIdentifier`] is a pure address; a [`Tile`] is that address as a
//! set-member value whose geographic extent and request URL can be
//! resolved on demand. Tiles are cheap to create and discard; coverage
//! resolution mints them per query.

mod identifier;

pub use identifier::TileIdentifier;

use crate::coord::{self, GeoExtent};
use crate::service::TileService;
use std::hash::{Hash, Hasher};

/// One tile of a layer's pyramid.
///
/// Wraps a [`TileIdentifier`]; the owning [`TileService`] is borrowed per
/// call for the parts that depend on service configuration, keeping the
/// tile itself a plain value. Set membership treats tiles with equal
/// identifiers as the same tile regardless of how they were produced.
#[derive(Debug, Clone)]
pub struct Tile {
    identifier: TileIdentifier,
}

impl Tile {
    /// Wraps an identifier as a tile.
    pub fn new(identifier: TileIdentifier) -> Self {
        Tile { identifier }
    }

    /// The tile's address.
    pub fn identifier(&self) -> &TileIdentifier {
        &self.identifier
    }

    /// Geographic bounding box covered by this tile.
    ///
    /// Computed from the identifier's pixel-space corners; agrees exactly
    /// with [`coord::tile_extent`] for the same address.
    pub fn extent(&self) -> GeoExtent {
        coord::tile_extent(self.identifier.x(), self.identifier.y(), self.identifier.zoom())
    }

    /// Request URL for this tile against the given service.
    pub fn url(&self, service: &TileService) -> String {
        service.tile_url(&self.identifier)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl From<TileIdentifier> for Tile {
    fn from(identifier: TileIdentifier) -> Self {
        Tile::new(identifier)
    }
}
