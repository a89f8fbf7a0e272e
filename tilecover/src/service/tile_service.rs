//! A named, URL-templated tile layer endpoint and its coverage resolution.

use std::collections::HashSet;

use tracing::debug;

use crate::coord::{self, GeoExtent, ZoomLevel};
use crate::service::error::ServiceError;
use crate::service::scale::zoom_for_scale;
use crate::service::url_scheme::UrlScheme;
use crate::tile::{Tile, TileIdentifier};

/// Token replaced with the configured time dimension.
pub const TIME_TOKEN: &str = "{time}";

/// Caller-set request configuration for a [`TileService`].
///
/// Known dimensions are explicit fields rather than a free-form map, so a
/// typo in a dimension name fails to compile instead of silently producing
/// an unsubstituted URL. Configure options before resolving tiles; the
/// service itself never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Value substituted for the `{time}` token in the URL template and
    /// used as the time dimension of standards-based requests.
    pub time: Option<String>,
    /// Extra HTTP headers a fetch layer should attach to every tile
    /// request, in insertion order.
    pub extra_headers: Vec<(String, String)>,
}

/// A named, URL-templated endpoint serving one tile layer.
///
/// The service owns the coverage-resolution algorithm: given a geographic
/// extent and a map scale (or an explicit zoom level), it enumerates the
/// exact set of tiles covering that extent, bounded by a caller-supplied
/// cap. The URL addressing scheme is detected from the template's tokens
/// at construction.
///
/// # Example
///
/// ```
/// use tilecover::coord::{GeoExtent, ZoomLevel};
/// use tilecover::service::TileService;
///
/// let service = TileService::new("aerial", "https://tiles.example.com/{quadkey}.jpg")?;
/// let tiles = service.find_tiles_at_zoom(
///     &GeoExtent::new(6.0, 50.0, 8.0, 52.0),
///     ZoomLevel::new(8),
///     256,
/// )?;
/// assert!(!tiles.is_empty());
/// # Ok::<(), tilecover::service::ServiceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TileService {
    name: String,
    url_template: String,
    scheme: UrlScheme,
    options: ServiceOptions,
}

impl TileService {
    /// Creates a service from a layer name and a tile URL template.
    ///
    /// # Errors
    ///
    /// [`ServiceError::InvalidConfiguration`] when the name or the
    /// template is empty or blank.
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Result<TileService, ServiceError> {
        let name = name.into();
        let url_template = url_template.into();

        if name.trim().is_empty() {
            return Err(ServiceError::InvalidConfiguration(
                "service name must not be empty".to_string(),
            ));
        }
        if url_template.trim().is_empty() {
            return Err(ServiceError::InvalidConfiguration(
                "service URL template must not be empty".to_string(),
            ));
        }

        let scheme = UrlScheme::detect(&url_template);
        Ok(TileService {
            name,
            url_template,
            scheme,
            options: ServiceOptions::default(),
        })
    }

    /// The layer name tiles of this service carry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured URL template.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// The addressing scheme detected from the template.
    pub fn scheme(&self) -> UrlScheme {
        self.scheme
    }

    /// The request configuration.
    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Mutable access for configuring options before resolving tiles.
    pub fn options_mut(&mut self) -> &mut ServiceOptions {
        &mut self.options
    }

    /// Resolves the request URL for one tile.
    ///
    /// Substitutes the identifier's address into the template per the
    /// detected scheme, then the `{time}` token when a time dimension is
    /// configured.
    pub fn tile_url(&self, identifier: &TileIdentifier) -> String {
        let mut url = self.scheme.substitute(&self.url_template, identifier);
        if let Some(time) = &self.options.time {
            url = url.replace(TIME_TOKEN, time);
        }
        url
    }

    /// Identifies the tile containing a geographic point at a zoom level.
    pub fn find_tile_at(&self, lon: f64, lat: f64, zoom: ZoomLevel) -> TileIdentifier {
        let (px, py) = coord::lon_lat_to_pixel_xy(lon, lat, zoom);
        let (tx, ty) = coord::pixel_xy_to_tile_xy(px, py);
        TileIdentifier::new(tx, ty, zoom, &self.name)
    }

    /// Resolves the set of tiles covering an extent at a map scale.
    ///
    /// The scale denominator picks the zoom level whose nominal scale is
    /// nearest on a logarithmic axis; coverage is then enumerated at that
    /// level.
    ///
    /// # Errors
    ///
    /// [`ServiceError::TileCountExceeded`] when covering the extent at the
    /// resolved level would need more than `max_tiles` tiles. The request
    /// is rejected whole rather than truncated, so a caller never receives
    /// a silently partial coverage.
    pub fn find_tiles_in_extent(
        &self,
        extent: &GeoExtent,
        scale_denominator: f64,
        max_tiles: u64,
    ) -> Result<HashSet<Tile>, ServiceError> {
        let zoom = zoom_for_scale(scale_denominator);
        debug!(
            layer = %self.name,
            scale_denominator,
            zoom = zoom.level(),
            "Matched scale to zoom level"
        );
        self.find_tiles_at_zoom(extent, zoom, max_tiles)
    }

    /// Resolves the set of tiles covering an extent at a fixed zoom level.
    ///
    /// The extent's corners are projected to pixel space and the covered
    /// tile index ranges normalized (projected y grows southward). Every
    /// `(x, y)` pair in the product of the two ranges yields one tile, so
    /// the result is unique by identifier and partitions the extent's
    /// pixel footprint. The required count is checked against `max_tiles`
    /// before any tile is built.
    ///
    /// # Errors
    ///
    /// [`ServiceError::TileCountExceeded`] when the ranges would produce
    /// more than `max_tiles` tiles.
    pub fn find_tiles_at_zoom(
        &self,
        extent: &GeoExtent,
        zoom: ZoomLevel,
        max_tiles: u64,
    ) -> Result<HashSet<Tile>, ServiceError> {
        let ((min_tx, min_ty), (max_tx, max_ty)) = tile_range(extent, zoom);

        let required = (max_tx - min_tx + 1) as u64 * (max_ty - min_ty + 1) as u64;
        if required > max_tiles {
            return Err(ServiceError::TileCountExceeded {
                required,
                limit: max_tiles,
            });
        }

        let mut tiles = HashSet::with_capacity(required as usize);
        for ty in min_ty..=max_ty {
            for tx in min_tx..=max_tx {
                tiles.insert(Tile::new(TileIdentifier::new(tx, ty, zoom, &self.name)));
            }
        }
        debug!(
            layer = %self.name,
            zoom = zoom.level(),
            columns = format!("{min_tx}..={max_tx}"),
            rows = format!("{min_ty}..={max_ty}"),
            count = tiles.len(),
            "Resolved tile coverage"
        );
        Ok(tiles)
    }
}

/// Tile index ranges covering an extent, `((min_x, min_y), (max_x, max_y))`.
fn tile_range(extent: &GeoExtent, zoom: ZoomLevel) -> ((u32, u32), (u32, u32)) {
    let (px_a, py_a) = coord::lon_lat_to_pixel_xy(extent.min_lon, extent.max_lat, zoom);
    let (px_b, py_b) = coord::lon_lat_to_pixel_xy(extent.max_lon, extent.min_lat, zoom);
    let (tx_a, ty_a) = coord::pixel_xy_to_tile_xy(px_a, py_a);
    let (tx_b, ty_b) = coord::pixel_xy_to_tile_xy(px_b, py_b);
    (
        (tx_a.min(tx_b), ty_a.min(ty_b)),
        (tx_a.max(tx_b), ty_a.max(ty_b)),
    )
}
