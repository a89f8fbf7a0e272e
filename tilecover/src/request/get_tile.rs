//! Standards-based GetTile request resolution.

use serde::Serialize;
use tracing::{debug, warn};

use crate::coord::{GeoExtent, ZoomLevel};
use crate::matrix::{CatalogLayer, Crs, TileMatrixCatalog, TileMatrixSet};
use crate::request::error::RequestError;
use crate::request::scale::{compute_ogc_scale, OGC_DPI};
use crate::request::url::{kvp_url, rest_url, TileUrlParams};
use crate::service::{zoom_for_scale, TileFactory, TileService};
use crate::tile::{Tile, TileIdentifier};

/// Hard cap on the number of tiles one request may resolve.
pub const MAX_REQUEST_TILES: u64 = 256;

/// Format assumed when a request configures none.
pub const DEFAULT_FORMAT: &str = "image/png";

/// How the resolved tile URLs are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestEncoding {
    /// Standard query parameters appended to a base endpoint URL.
    Kvp { base_url: String },
    /// The layer's per-format resource template with tokens substituted.
    #[default]
    Rest,
}

/// A standards-based tile request against a [`TileMatrixCatalog`].
///
/// Resolution runs four sequential stages, none repeated and none
/// reversible: validate the configuration, compute the map scale from the
/// extent and output size, select a matrix set for the requested CRS, and
/// enumerate-then-clip the covering tiles. A failure in any stage fails
/// the whole request; the only local recovery is the one-shot fallback to
/// the layer's first advertised format when a REST template is missing.
///
/// # Example
///
/// ```no_run
/// use tilecover::coord::GeoExtent;
/// use tilecover::matrix::{Crs, TileMatrixCatalog};
/// use tilecover::request::{GetTileRequest, RequestEncoding};
/// use tilecover::service::TileFactory;
///
/// let catalog = TileMatrixCatalog::from_file("catalog.json")?;
/// let coverage = GetTileRequest::new("aerial")
///     .with_extent(GeoExtent::new(6.0, 50.0, 8.0, 52.0))
///     .with_crs(Crs::parse("EPSG:3857"))
///     .with_output_size(1024, 768)
///     .with_encoding(RequestEncoding::Kvp {
///         base_url: "https://wmts.example.com/tiles".to_string(),
///     })
///     .resolve(&catalog, &TileFactory::new())?;
///
/// for tile in coverage.tiles() {
///     println!("{} {}", tile.identifier.id(), tile.url);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GetTileRequest {
    layer: String,
    style: Option<String>,
    format: Option<String>,
    extent: Option<GeoExtent>,
    crs: Option<Crs>,
    width: u32,
    height: u32,
    time: Option<String>,
    headers: Vec<(String, String)>,
    encoding: RequestEncoding,
}

impl GetTileRequest {
    /// Starts a request for one catalog layer.
    pub fn new(layer: impl Into<String>) -> GetTileRequest {
        GetTileRequest {
            layer: layer.into(),
            ..GetTileRequest::default()
        }
    }

    /// Sets the requested extent, in geographic degrees.
    ///
    /// The extent is always expressed in longitude/latitude; the CRS set
    /// with [`with_crs`](Self::with_crs) names the system tiles are
    /// requested in, not the units of this extent.
    pub fn with_extent(mut self, extent: GeoExtent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Sets the CRS tiles are requested in; drives matrix-set selection.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// Sets the output rendition size in pixels.
    pub fn with_output_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the style; unset or empty falls back to the layer's default.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets the format; unset or empty falls back to [`DEFAULT_FORMAT`].
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the time dimension carried in tile URLs.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Adds an HTTP header the fetch layer should send with every tile.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets how tile URLs are written.
    pub fn with_encoding(mut self, encoding: RequestEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Resolves the request into its covering tile set.
    ///
    /// # Errors
    ///
    /// * [`RequestError::UnknownLayer`] / [`RequestError::MissingField`]
    ///   when the configuration is incomplete.
    /// * [`RequestError::ScaleComputation`] when no scale can be computed
    ///   from the extent and output size.
    /// * [`RequestError::NoMatchingMatrix`] when the layer links no usable
    ///   matrix set.
    /// * [`RequestError::MissingFormatTemplate`] when a REST request has
    ///   no template for the format, nor for the fallback format.
    /// * [`RequestError::Service`] for an oversized coverage.
    pub fn resolve(
        &self,
        catalog: &TileMatrixCatalog,
        factory: &TileFactory,
    ) -> Result<ResolvedCoverage, RequestError> {
        // stage 1: validate the configuration
        if self.layer.trim().is_empty() {
            return Err(RequestError::MissingField("layer"));
        }
        let layer = catalog
            .layer(&self.layer)
            .ok_or_else(|| RequestError::UnknownLayer(self.layer.clone()))?;
        let extent = self.extent.ok_or(RequestError::MissingField("extent"))?;
        let crs = self.crs.clone().ok_or(RequestError::MissingField("crs"))?;
        if self.width == 0 {
            return Err(RequestError::MissingField("width"));
        }
        if self.height == 0 {
            return Err(RequestError::MissingField("height"));
        }

        // stage 2: resolve the map scale; the extent is geographic
        let scale = compute_ogc_scale(&extent, &Crs::geographic(), self.width, OGC_DPI)
            .map_err(|e| RequestError::ScaleComputation(e.to_string()))?;
        debug!(layer = %self.layer, scale, "Resolved request scale");

        // stage 3: select a matrix set for the requested CRS
        let (matrix_set, degraded) = select_matrix_set(catalog, layer, &crs)?;
        if degraded {
            warn!(
                layer = %self.layer,
                requested = %crs,
                selected = %matrix_set.crs,
                matrix_set = %matrix_set.identifier,
                "Failed to match the requested CRS, using the first linked matrix set"
            );
        }

        let style = layer.effective_style(self.style.as_deref());
        let requested_format = match &self.format {
            Some(format) if !format.is_empty() => format.clone(),
            _ => DEFAULT_FORMAT.to_string(),
        };

        // stage 4: resolve the coverage and clip it to the layer's limits
        let (format, service) = match &self.encoding {
            RequestEncoding::Kvp { base_url } => (
                requested_format,
                TileService::new(&self.layer, base_url.clone())?,
            ),
            RequestEncoding::Rest => {
                let (format, template) = resolve_rest_template(layer, &requested_format)?;
                (format, TileService::new(&self.layer, template)?)
            }
        };

        let (zoom, matrix) = matrix_set
            .nearest_matrix(zoom_for_scale(scale))
            .ok_or_else(|| RequestError::NoMatchingMatrix {
                layer: layer.identifier.clone(),
            })?;

        let covering = service.find_tiles_at_zoom(&extent, zoom, MAX_REQUEST_TILES)?;

        let limits = catalog.limits_for(&layer.identifier, &matrix_set.identifier, zoom);
        let mut kept: Vec<Tile> = covering
            .into_iter()
            .filter(|tile| match limits {
                Some(limits) => limits.contains(tile.identifier().x(), tile.identifier().y()),
                None => true,
            })
            .collect();
        kept.sort_by_key(|tile| (tile.identifier().y(), tile.identifier().x()));

        let tiles = kept
            .iter()
            .map(|tile| {
                let params = TileUrlParams {
                    layer: &layer.identifier,
                    style: &style,
                    format: &format,
                    matrix_set: &matrix_set.identifier,
                    matrix: &matrix.identifier,
                    row: tile.identifier().y(),
                    col: tile.identifier().x(),
                    time: self.time.as_deref(),
                };
                let url = match &self.encoding {
                    RequestEncoding::Kvp { base_url } => kvp_url(base_url, &params),
                    RequestEncoding::Rest => rest_url(service.url_template(), &params),
                };
                ResolvedTile {
                    identifier: tile.identifier().clone(),
                    extent: factory.extent_of(tile.identifier()),
                    url,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            layer = %self.layer,
            matrix_set = %matrix_set.identifier,
            zoom = zoom.level(),
            tiles = tiles.len(),
            "Resolved tile request"
        );

        Ok(ResolvedCoverage {
            zoom,
            scale_denominator: scale,
            matrix_set: matrix_set.identifier.clone(),
            degraded_crs_match: degraded,
            style,
            format,
            tiles,
            headers: self.headers.clone(),
        })
    }
}

/// One tile of a resolved coverage, with its extent and final URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTile {
    pub identifier: TileIdentifier,
    pub extent: GeoExtent,
    pub url: String,
}

/// The terminal result of a resolved request.
///
/// Tiles are ordered by row, then column; each is independently
/// URL-addressable, so a fetch layer may download them in parallel
/// without coordination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCoverage {
    zoom: ZoomLevel,
    scale_denominator: f64,
    matrix_set: String,
    degraded_crs_match: bool,
    style: String,
    format: String,
    tiles: Vec<ResolvedTile>,
    headers: Vec<(String, String)>,
}

impl ResolvedCoverage {
    /// The zoom level the coverage was enumerated at.
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// The rounded scale denominator computed for the request.
    pub fn scale_denominator(&self) -> f64 {
        self.scale_denominator
    }

    /// Identifier of the selected matrix set.
    pub fn matrix_set(&self) -> &str {
        &self.matrix_set
    }

    /// True when no matrix set matched the requested CRS and the first
    /// linked one was used instead.
    pub fn degraded_crs_match(&self) -> bool {
        self.degraded_crs_match
    }

    /// The style the URLs carry.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// The format the URLs carry, after any template fallback.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The covering tiles, ordered by row then column.
    pub fn tiles(&self) -> &[ResolvedTile] {
        &self.tiles
    }

    /// Headers the fetch layer should send with every tile.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Picks the matrix set for a request CRS in two explicit passes.
///
/// The first pass walks the catalog's declared order and takes the first
/// set the layer links whose CRS equals the requested one. The second
/// pass, reached only when nothing matched, takes the layer's first
/// linked set regardless of CRS and reports the match as degraded.
fn select_matrix_set<'a>(
    catalog: &'a TileMatrixCatalog,
    layer: &CatalogLayer,
    crs: &Crs,
) -> Result<(&'a TileMatrixSet, bool), RequestError> {
    let linked = catalog.matrix_sets_for_layer(&layer.identifier);
    if linked.is_empty() {
        return Err(RequestError::NoMatchingMatrix {
            layer: layer.identifier.clone(),
        });
    }

    if let Some(set) = linked.iter().copied().find(|set| set.crs == *crs) {
        return Ok((set, false));
    }
    Ok((linked[0], true))
}

/// Finds the REST template for a format, falling back once to the
/// layer's first advertised format.
fn resolve_rest_template<'a>(
    layer: &'a CatalogLayer,
    format: &str,
) -> Result<(String, &'a str), RequestError> {
    if let Some(template) = layer.template_for(format) {
        return Ok((format.to_string(), template));
    }

    if let Some(fallback) = layer.first_format() {
        if let Some(template) = layer.template_for(fallback) {
            warn!(
                layer = %layer.identifier,
                requested = format,
                fallback,
                "No resource template for the requested format, using the layer's first format"
            );
            return Ok((fallback.to_string(), template));
        }
    }

    Err(RequestError::MissingFormatTemplate {
        layer: layer.identifier.clone(),
        format: format.to_string(),
    })
}
