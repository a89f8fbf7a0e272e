//! Tile services and coverage resolution
//!
//! A [`TileService`] is a named, URL-templated endpoint for one map layer.
//! It owns the coverage-resolution algorithm: given a geographic extent and
//! a target map scale (or an explicit zoom level), it enumerates the exact,
//! bounded set of tiles covering that extent. The [`TileFactory`] builds
//! individual tiles from points, names, and neighbour relations without any
//! shared state.
//!
//! # Coverage resolution
//!
//! ```
//! use tilecover::coord::GeoExtent;
//! use tilecover::service::{TileService, LEVEL_0_SCALE_DENOMINATOR};
//!
//! let service = TileService::new("aerial", "https://tiles.example.com/{quadkey}.jpg")?;
//! let extent = GeoExtent::new(6.0, 50.0, 8.0, 52.0);
//!
//! // level 6 scale, capped at 256 tiles
//! let scale = LEVEL_0_SCALE_DENOMINATOR / 64.0;
//! let tiles = service.find_tiles_in_extent(&extent, scale, 256)?;
//! for tile in &tiles {
//!     println!("{} -> {}", tile.identifier(), tile.url(&service));
//! }
//! # Ok::<(), tilecover::service::ServiceError>(())
//! ```

mod error;
mod factory;
mod scale;
mod tile_service;
mod url_scheme;

pub use error::ServiceError;
pub use factory::TileFactory;
pub use scale::{scale_denominator_for_zoom, zoom_for_scale, LEVEL_0_SCALE_DENOMINATOR};
pub use tile_service::{ServiceOptions, TileService, TIME_TOKEN};
pub use url_scheme::{UrlScheme, QUADKEY_TOKEN};
