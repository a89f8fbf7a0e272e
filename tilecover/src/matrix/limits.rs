//! Per-layer matrix limits: the published sub-rectangle of a grid level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The valid sub-rectangle of one grid level for one layer.
///
/// A layer rarely publishes the full global matrix; its limits name the
/// inclusive column and row ranges that actually exist. Tiles outside the
/// limits are dropped during request resolution rather than requested and
/// failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMatrixLimits {
    pub min_col: u32,
    pub max_col: u32,
    pub min_row: u32,
    pub max_row: u32,
}

impl TileMatrixLimits {
    /// True when the tile at `(col, row)` lies inside the limits, bounds
    /// included.
    pub fn contains(&self, col: u32, row: u32) -> bool {
        col >= self.min_col && col <= self.max_col && row >= self.min_row && row <= self.max_row
    }
}

/// A layer's link to one matrix set, with optional per-level limits.
///
/// Levels absent from `limits` are unrestricted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMatrixSetLink {
    /// Identifier of the linked [`TileMatrixSet`](crate::matrix::TileMatrixSet).
    pub matrix_set: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<u8, TileMatrixLimits>,
}

impl TileMatrixSetLink {
    /// Creates an unrestricted link to a matrix set.
    pub fn new(matrix_set: impl Into<String>) -> TileMatrixSetLink {
        TileMatrixSetLink {
            matrix_set: matrix_set.into(),
            limits: BTreeMap::new(),
        }
    }

    /// The limits declared for a level, if any.
    pub fn limits_for(&self, level: u8) -> Option<&TileMatrixLimits> {
        self.limits.get(&level)
    }
}
