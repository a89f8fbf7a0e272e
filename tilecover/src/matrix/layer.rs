//! Layer entries of the matrix catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::matrix::limits::TileMatrixSetLink;

/// One layer as a capabilities document advertises it.
///
/// A layer names its styles and output formats, links the matrix sets it
/// is published in, and (for REST endpoints) maps formats to resource URL
/// templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLayer {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    /// Advertised output formats, most preferred first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<String>,
    /// REST resource templates keyed by format.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resource_templates: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<TileMatrixSetLink>,
}

impl CatalogLayer {
    /// Creates a layer with only an identifier set.
    pub fn new(identifier: impl Into<String>) -> CatalogLayer {
        CatalogLayer {
            identifier: identifier.into(),
            title: None,
            default_style: None,
            styles: Vec::new(),
            formats: Vec::new(),
            resource_templates: BTreeMap::new(),
            links: Vec::new(),
        }
    }

    /// The style a request should use.
    ///
    /// A non-empty requested style wins; otherwise the declared default,
    /// then the first advertised style, then the empty style.
    pub fn effective_style(&self, requested: Option<&str>) -> String {
        if let Some(style) = requested {
            if !style.is_empty() {
                return style.to_string();
            }
        }
        if let Some(style) = &self.default_style {
            return style.clone();
        }
        self.styles.first().cloned().unwrap_or_default()
    }

    /// The link to a matrix set, if this layer is published in it.
    pub fn link_for(&self, matrix_set_id: &str) -> Option<&TileMatrixSetLink> {
        self.links.iter().find(|link| link.matrix_set == matrix_set_id)
    }

    /// The layer's first advertised format.
    pub fn first_format(&self) -> Option<&str> {
        self.formats.first().map(String::as_str)
    }

    /// The REST resource template for a format, if one is declared.
    pub fn template_for(&self, format: &str) -> Option<&str> {
        self.resource_templates.get(format).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aerial() -> CatalogLayer {
        let mut layer = CatalogLayer::new("aerial");
        layer.default_style = Some("default".to_string());
        layer.styles = vec!["default".to_string(), "dark".to_string()];
        layer.formats = vec!["image/jpeg".to_string(), "image/png".to_string()];
        layer.resource_templates.insert(
            "image/jpeg".to_string(),
            "https://example.com/{TileMatrix}/{TileCol}/{TileRow}.jpg".to_string(),
        );
        layer.links.push(TileMatrixSetLink::new("WebMercatorQuad"));
        layer
    }

    #[test]
    fn test_effective_style_prefers_the_requested_style() {
        assert_eq!(aerial().effective_style(Some("dark")), "dark");
    }

    #[test]
    fn test_effective_style_falls_back_to_declared_default() {
        assert_eq!(aerial().effective_style(None), "default");
        assert_eq!(aerial().effective_style(Some("")), "default");
    }

    #[test]
    fn test_effective_style_falls_back_to_first_style() {
        let mut layer = aerial();
        layer.default_style = None;
        assert_eq!(layer.effective_style(None), "default");

        layer.styles.clear();
        assert_eq!(layer.effective_style(None), "");
    }

    #[test]
    fn test_link_for_finds_linked_sets_only() {
        let layer = aerial();
        assert!(layer.link_for("WebMercatorQuad").is_some());
        assert!(layer.link_for("WorldCRS84Quad").is_none());
    }

    #[test]
    fn test_template_lookup_by_format() {
        let layer = aerial();
        assert!(layer.template_for("image/jpeg").is_some());
        assert!(layer.template_for("image/png").is_none());
        assert_eq!(layer.first_format(), Some("image/jpeg"));
    }

    #[test]
    fn test_deserialize_minimal_layer() {
        let layer: CatalogLayer = serde_json::from_str(r#"{ "identifier": "bare" }"#).unwrap();
        assert_eq!(layer.identifier, "bare");
        assert!(layer.links.is_empty());
        assert!(layer.first_format().is_none());
        assert_eq!(layer.effective_style(None), "");
    }
}
