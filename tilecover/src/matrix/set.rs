//! Tile matrix sets: standards-based grid descriptions per CRS.

use serde::{Deserialize, Serialize};

use crate::coord::ZoomLevel;
use crate::matrix::crs::Crs;

fn default_tile_edge() -> u32 {
    256
}

/// One grid level of a [`TileMatrixSet`].
///
/// Carries the standard per-level description from a capabilities
/// document. The engine's own pyramid math fixes tile size and grid
/// growth, so most fields here are descriptive; the scale denominator and
/// the identifier (used as the TileMatrix value in request URLs) are the
/// operative ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMatrix {
    /// Level identifier as the capabilities document declares it.
    pub identifier: String,
    /// Nominal 1:N map scale of this level.
    pub scale_denominator: f64,
    #[serde(default = "default_tile_edge")]
    pub tile_width: u32,
    #[serde(default = "default_tile_edge")]
    pub tile_height: u32,
    /// Number of tile columns in the full matrix.
    pub matrix_width: u32,
    /// Number of tile rows in the full matrix.
    pub matrix_height: u32,
    /// Projected coordinates of the matrix origin, `[x, y]`.
    pub top_left_corner: (f64, f64),
}

/// An ordered family of grid levels sharing one CRS.
///
/// Levels are declared coarsest first, so a level's position in
/// [`matrices`](Self::matrices) is its zoom level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMatrixSet {
    pub identifier: String,
    pub crs: Crs,
    pub matrices: Vec<TileMatrix>,
}

impl TileMatrixSet {
    /// The matrix at exactly this zoom level, if the set is deep enough.
    pub fn matrix_for_zoom(&self, zoom: ZoomLevel) -> Option<&TileMatrix> {
        self.matrices.get(zoom.level() as usize)
    }

    /// The matrix at this zoom level, or the set's deepest level when the
    /// requested one is not published. `None` only for an empty set.
    pub fn nearest_matrix(&self, zoom: ZoomLevel) -> Option<(ZoomLevel, &TileMatrix)> {
        if self.matrices.is_empty() {
            return None;
        }
        let index = (zoom.level() as usize).min(self.matrices.len() - 1);
        Some((ZoomLevel::new(index as u8), &self.matrices[index]))
    }

    /// Number of levels the set publishes.
    pub fn depth(&self) -> usize {
        self.matrices.len()
    }
}
