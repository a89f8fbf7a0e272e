//! Tile addresses within a layer's pyramid.

use crate::coord::{self, ZoomLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable address of one tile: grid position, zoom level, and the name
/// of the layer it belongs to.
///
/// Column and row are expected to lie in `0..tiles_per_axis()` for the
/// zoom level. Construction does not check or clamp the range; callers
/// walking the grid guard the edges themselves.
///
/// # Example
///
/// ```
/// use tilecover::coord::ZoomLevel;
/// use tilecover::tile::TileIdentifier;
///
/// let id = TileIdentifier::new(10, 12, ZoomLevel::new(5), "SomeService");
/// assert_eq!(id.code(), "03210");
/// assert_eq!(id.id(), "SomeService_03210");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIdentifier {
    x: u32,
    y: u32,
    zoom: ZoomLevel,
    layer_name: String,
}

impl TileIdentifier {
    /// Creates an identifier for the tile at `(x, y)` on `zoom`.
    pub fn new(x: u32, y: u32, zoom: ZoomLevel, layer_name: impl Into<String>) -> Self {
        TileIdentifier {
            x,
            y,
            zoom,
            layer_name: layer_name.into(),
        }
    }

    /// Column index, growing eastward.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Row index, growing southward.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Zoom level the tile lives on.
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// Name of the layer the tile belongs to.
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// Quadkey code of this tile, one base-4 digit per zoom level.
    pub fn code(&self) -> String {
        coord::tile_xy_to_quadkey(self.x, self.y, self.zoom)
    }

    /// Unique id: the layer name and the code joined by an underscore.
    pub fn id(&self) -> String {
        format!("{}_{}", self.layer_name, self.code())
    }

    /// The identifier one column to the east.
    ///
    /// Does not wrap: on the last column this yields `x == tiles_per_axis()`,
    /// one past the valid range. Callers crossing the grid edge must check.
    pub fn right_neighbour(&self) -> TileIdentifier {
        TileIdentifier {
            x: self.x + 1,
            y: self.y,
            zoom: self.zoom,
            layer_name: self.layer_name.clone(),
        }
    }

    /// The identifier one row to the south.
    ///
    /// Does not wrap at the last row; see [`right_neighbour`](Self::right_neighbour).
    pub fn lower_neighbour(&self) -> TileIdentifier {
        TileIdentifier {
            x: self.x,
            y: self.y + 1,
            zoom: self.zoom,
            layer_name: self.layer_name.clone(),
        }
    }
}

impl fmt::Display for TileIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn reference_identifier() -> TileIdentifier {
        TileIdentifier::new(10, 12, ZoomLevel::new(5), "SomeService")
    }

    #[test]
    fn test_code_is_the_quadkey() {
        assert_eq!(reference_identifier().code(), "03210");
    }

    #[test]
    fn test_id_joins_layer_name_and_code() {
        assert_eq!(reference_identifier().id(), "SomeService_03210");
    }

    #[test]
    fn test_display_matches_id() {
        let id = reference_identifier();
        assert_eq!(id.to_string(), id.id());
    }

    #[test]
    fn test_code_is_empty_at_level_zero() {
        let id = TileIdentifier::new(0, 0, ZoomLevel::new(0), "world");
        assert_eq!(id.code(), "");
        assert_eq!(id.id(), "world_");
    }

    #[test]
    fn test_right_neighbour_increments_column_only() {
        let id = TileIdentifier::new(20, 15, ZoomLevel::new(5), "SomeService");
        let right = id.right_neighbour();
        assert_eq!(right.x(), 21);
        assert_eq!(right.y(), 15);
        assert_eq!(right.zoom(), ZoomLevel::new(5));
        assert_eq!(right.layer_name(), "SomeService");
    }

    #[test]
    fn test_lower_neighbour_increments_row_only() {
        let id = TileIdentifier::new(20, 15, ZoomLevel::new(5), "SomeService");
        let lower = id.lower_neighbour();
        assert_eq!(lower.x(), 20);
        assert_eq!(lower.y(), 16);
        assert_eq!(lower.zoom(), ZoomLevel::new(5));
        assert_eq!(lower.layer_name(), "SomeService");
    }

    #[test]
    fn test_neighbours_do_not_wrap_at_the_grid_edge() {
        let zoom = ZoomLevel::new(3);
        let last = zoom.tiles_per_axis() - 1;
        let id = TileIdentifier::new(last, last, zoom, "edge");

        // one past the valid range; the caller is responsible for checking
        assert_eq!(id.right_neighbour().x(), zoom.tiles_per_axis());
        assert_eq!(id.lower_neighbour().y(), zoom.tiles_per_axis());
    }

    #[test]
    fn test_equality_covers_all_four_fields() {
        let id = reference_identifier();
        assert_eq!(id, TileIdentifier::new(10, 12, ZoomLevel::new(5), "SomeService"));
        assert_ne!(id, TileIdentifier::new(11, 12, ZoomLevel::new(5), "SomeService"));
        assert_ne!(id, TileIdentifier::new(10, 13, ZoomLevel::new(5), "SomeService"));
        assert_ne!(id, TileIdentifier::new(10, 12, ZoomLevel::new(6), "SomeService"));
        assert_ne!(id, TileIdentifier::new(10, 12, ZoomLevel::new(5), "OtherService"));
    }

    #[test]
    fn test_hash_set_deduplicates_equal_identifiers() {
        let mut set = HashSet::new();
        set.insert(reference_identifier());
        set.insert(reference_identifier());
        set.insert(reference_identifier().right_neighbour());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let id = reference_identifier();
        let json = serde_json::to_string(&id).unwrap();
        let back: TileIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
