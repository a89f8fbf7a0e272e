//! The multi-CRS tile matrix catalog.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::coord::ZoomLevel;
use crate::matrix::layer::CatalogLayer;
use crate::matrix::limits::TileMatrixLimits;
use crate::matrix::set::TileMatrixSet;

/// Errors from loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog document
    #[error("Failed to read catalog document: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a catalog document
    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The parsed matrix-set and layer inventory of one tile endpoint.
///
/// Built once from an already-parsed capabilities document (or its JSON
/// rendition) and then used read-only across requests: the catalog only
/// answers lookups, never mutates. Matrix sets keep the document's
/// declared order, which drives matrix-set selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileMatrixCatalog {
    #[serde(default)]
    matrix_sets: Vec<TileMatrixSet>,
    #[serde(default)]
    layers: Vec<CatalogLayer>,
}

impl TileMatrixCatalog {
    /// Builds a catalog from already-parsed parts.
    pub fn new(matrix_sets: Vec<TileMatrixSet>, layers: Vec<CatalogLayer>) -> TileMatrixCatalog {
        TileMatrixCatalog {
            matrix_sets,
            layers,
        }
    }

    /// Parses a catalog from its JSON rendition.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Parse`] when the document is not valid catalog JSON.
    pub fn from_json_str(json: &str) -> Result<TileMatrixCatalog, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a catalog from a JSON reader.
    pub fn from_json_reader(reader: impl Read) -> Result<TileMatrixCatalog, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Io`] when the file cannot be read,
    /// [`CatalogError::Parse`] when its content is not valid catalog JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<TileMatrixCatalog, CatalogError> {
        let file = File::open(path)?;
        TileMatrixCatalog::from_json_reader(BufReader::new(file))
    }

    /// All matrix sets, in the document's declared order.
    pub fn matrix_sets(&self) -> &[TileMatrixSet] {
        &self.matrix_sets
    }

    /// All layers, in the document's declared order.
    pub fn layers(&self) -> &[CatalogLayer] {
        &self.layers
    }

    /// Looks up a layer by identifier.
    pub fn layer(&self, identifier: &str) -> Option<&CatalogLayer> {
        self.layers.iter().find(|layer| layer.identifier == identifier)
    }

    /// Looks up a matrix set by identifier.
    pub fn matrix_set(&self, identifier: &str) -> Option<&TileMatrixSet> {
        self.matrix_sets.iter().find(|set| set.identifier == identifier)
    }

    /// The matrix sets a layer is published in, keeping declared order.
    pub fn matrix_sets_for_layer(&self, layer: &str) -> Vec<&TileMatrixSet> {
        let Some(layer) = self.layer(layer) else {
            return Vec::new();
        };
        self.matrix_sets
            .iter()
            .filter(|set| layer.link_for(&set.identifier).is_some())
            .collect()
    }

    /// A layer's limits for one matrix set and level, if declared.
    ///
    /// `None` means unrestricted; absence of a layer or link also yields
    /// `None`, since there is nothing to clip against.
    pub fn limits_for(
        &self,
        layer: &str,
        matrix_set_id: &str,
        zoom: ZoomLevel,
    ) -> Option<&TileMatrixLimits> {
        self.layer(layer)?
            .link_for(matrix_set_id)?
            .limits_for(zoom.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::crs::Crs;
    use crate::matrix::limits::TileMatrixSetLink;
    use crate::matrix::set::TileMatrix;
    use std::io::Write;

    fn matrix(level: u8) -> TileMatrix {
        TileMatrix {
            identifier: level.to_string(),
            scale_denominator: 559_082_264.028_717_8 / (1u64 << level) as f64,
            tile_width: 256,
            tile_height: 256,
            matrix_width: 1 << level,
            matrix_height: 1 << level,
            top_left_corner: (-20_037_508.342_789_244, 20_037_508.342_789_244),
        }
    }

    fn catalog() -> TileMatrixCatalog {
        let mercator = TileMatrixSet {
            identifier: "WebMercatorQuad".to_string(),
            crs: Crs::parse("urn:ogc:def:crs:EPSG::3857"),
            matrices: (0..4).map(matrix).collect(),
        };
        let plate_carree = TileMatrixSet {
            identifier: "WorldCRS84Quad".to_string(),
            crs: Crs::parse("EPSG:4326"),
            matrices: (0..4).map(matrix).collect(),
        };

        let mut aerial = CatalogLayer::new("aerial");
        let mut link = TileMatrixSetLink::new("WebMercatorQuad");
        link.limits.insert(
            2,
            TileMatrixLimits {
                min_col: 1,
                max_col: 2,
                min_row: 1,
                max_row: 1,
            },
        );
        aerial.links.push(link);

        TileMatrixCatalog::new(vec![mercator, plate_carree], vec![aerial])
    }

    #[test]
    fn test_layer_and_matrix_set_lookup() {
        let catalog = catalog();
        assert!(catalog.layer("aerial").is_some());
        assert!(catalog.layer("missing").is_none());
        assert!(catalog.matrix_set("WebMercatorQuad").is_some());
        assert!(catalog.matrix_set("UTM31").is_none());
    }

    #[test]
    fn test_matrix_sets_for_layer_filters_by_links() {
        let catalog = catalog();
        let sets = catalog.matrix_sets_for_layer("aerial");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].identifier, "WebMercatorQuad");

        assert!(catalog.matrix_sets_for_layer("missing").is_empty());
    }

    #[test]
    fn test_limits_for_declared_level_only() {
        let catalog = catalog();
        let limits = catalog
            .limits_for("aerial", "WebMercatorQuad", ZoomLevel::new(2))
            .unwrap();
        assert!(limits.contains(1, 1));
        assert!(!limits.contains(0, 0));

        assert!(catalog
            .limits_for("aerial", "WebMercatorQuad", ZoomLevel::new(1))
            .is_none());
        assert!(catalog
            .limits_for("aerial", "WorldCRS84Quad", ZoomLevel::new(2))
            .is_none());
    }

    #[test]
    fn test_json_round_trip_preserves_declared_order() {
        let catalog = catalog();
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let back = TileMatrixCatalog::from_json_str(&json).unwrap();
        assert_eq!(back, catalog);
        assert_eq!(back.matrix_sets()[0].identifier, "WebMercatorQuad");
        assert_eq!(back.matrix_sets()[1].identifier, "WorldCRS84Quad");
    }

    #[test]
    fn test_from_file_reads_a_catalog_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&catalog()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = TileMatrixCatalog::from_file(file.path()).unwrap();
        assert_eq!(loaded, catalog());
    }

    #[test]
    fn test_from_file_surfaces_io_errors() {
        let err = TileMatrixCatalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_from_json_str_surfaces_parse_errors() {
        let err = TileMatrixCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_empty_document_is_an_empty_catalog() {
        let catalog = TileMatrixCatalog::from_json_str("{}").unwrap();
        assert!(catalog.matrix_sets().is_empty());
        assert!(catalog.layers().is_empty());
    }
}
