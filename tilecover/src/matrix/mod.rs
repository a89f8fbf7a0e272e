//! Standards-based tile matrix catalogs
//!
//! A [`TileMatrixCatalog`] is the read-only inventory a capabilities
//! document describes: multi-CRS [`TileMatrixSet`] grids and the layers
//! published in them, each with optional per-level [`TileMatrixLimits`]
//! naming the sub-rectangle a layer actually serves. Request resolution
//! consults the catalog to pick a matrix set for a CRS and to clip
//! coverage to a layer's published tiles.
//!
//! The catalog is consumed as already-parsed data; a JSON rendition can
//! be loaded with [`TileMatrixCatalog::from_file`].

mod catalog;
mod crs;
mod layer;
mod limits;
mod set;

pub use catalog::{CatalogError, TileMatrixCatalog};
pub use crs::Crs;
pub use layer::CatalogLayer;
pub use limits::{TileMatrixLimits, TileMatrixSetLink};
pub use set::{TileMatrix, TileMatrixSet};
