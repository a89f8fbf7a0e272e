//! Tilecover - Tile-pyramid addressing and coverage resolution
//!
//! This library converts between geographic coordinates, pixel grids,
//! tile indices, and quadkey codes for a global pseudo-Mercator pyramid
//! of 256-pixel tiles, and resolves which tiles cover a geographic extent
//! at a given map scale.
//!
//! # Locating and covering
//!
//! A [`service::TileService`] names a layer and its URL template and owns
//! the coverage algorithm:
//!
//! ```
//! use tilecover::coord::{GeoExtent, ZoomLevel};
//! use tilecover::service::TileService;
//!
//! let service = TileService::new("aerial", "https://tiles.example.com/{quadkey}.jpg")?;
//!
//! let tile = service.find_tile_at(7.0, 51.0, ZoomLevel::new(5));
//! assert_eq!(tile.code(), "12020");
//!
//! let tiles = service.find_tiles_at_zoom(
//!     &GeoExtent::new(6.0, 50.0, 8.0, 52.0),
//!     ZoomLevel::new(8),
//!     256,
//! )?;
//! assert!(!tiles.is_empty());
//! # Ok::<(), tilecover::service::ServiceError>(())
//! ```
//!
//! # Standards-based requests
//!
//! Against a parsed capabilities catalog, a [`request::GetTileRequest`]
//! resolves scale, picks a matrix set for the requested CRS, clips the
//! coverage to the layer's published limits, and assembles per-tile KVP
//! or REST URLs. See the [`request`] module.

pub mod coord;
pub mod matrix;
pub mod request;
pub mod service;
pub mod tile;

/// Library version from the workspace manifest.
///
/// The CLI reports this for `--version`, so the binary and the library
/// it wraps always carry the same number.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
