//! Standards-based tile request assembly
//!
//! A [`GetTileRequest`] turns a geographic extent, an output size, and a
//! [`TileMatrixCatalog`](crate::matrix::TileMatrixCatalog) into the final
//! set of tiles to fetch: it computes the map scale the rendition implies,
//! selects a matrix set for the requested CRS (falling back to the first
//! linked one when nothing matches), enumerates the covering tiles under
//! the request cap, clips them to the layer's published limits, and writes
//! one KVP or REST URL per surviving tile.
//!
//! Scale computation is a standalone capability in [`compute_ogc_scale`];
//! everything downstream of it is deterministic for a given catalog.

mod error;
mod get_tile;
mod scale;
mod url;

pub use error::RequestError;
pub use get_tile::{
    GetTileRequest, RequestEncoding, ResolvedCoverage, ResolvedTile, DEFAULT_FORMAT,
    MAX_REQUEST_TILES,
};
pub use scale::{compute_ogc_scale, ScaleError, OGC_DEGREE_TO_METERS, OGC_DPI};
