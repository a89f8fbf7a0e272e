//! Core types for tile-pyramid addressing.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum latitude the pseudo-Mercator projection represents (degrees).
pub const MIN_LAT: f64 = -85.05112878;

/// Maximum latitude the pseudo-Mercator projection represents (degrees).
pub const MAX_LAT: f64 = 85.05112878;

/// Minimum longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Edge length of one tile in pixels.
pub const TILE_EDGE_PX: u64 = 256;

/// Lowest zoom level of the pyramid (a single tile covering the world).
pub const MIN_ZOOM: u8 = 0;

/// Deepest zoom level of the pyramid, and the longest quadkey.
pub const MAX_ZOOM: u8 = 23;

/// A discrete level of detail in the tile pyramid.
///
/// Level 0 is a single tile covering the world; each subsequent level
/// doubles the grid resolution along both axes. Construction clamps to
/// [`MAX_ZOOM`], so a `ZoomLevel` is always a valid pyramid level.
///
/// # Example
///
/// ```
/// use tilecover::coord::ZoomLevel;
///
/// let zoom = ZoomLevel::new(5);
/// assert_eq!(zoom.map_size(), 8192);
/// assert_eq!(zoom.tiles_per_axis(), 32);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Creates a zoom level, clamping values above [`MAX_ZOOM`].
    pub fn new(level: u8) -> Self {
        ZoomLevel(level.min(MAX_ZOOM))
    }

    /// The integer level.
    pub fn level(&self) -> u8 {
        self.0
    }

    /// Pixel edge length of the full world map at this level.
    pub fn map_size(&self) -> u64 {
        TILE_EDGE_PX << self.0
    }

    /// Number of tiles along one axis at this level.
    pub fn tiles_per_axis(&self) -> u32 {
        1u32 << self.0
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for ZoomLevel {
    fn from(level: u8) -> Self {
        ZoomLevel::new(level)
    }
}

/// A geographic bounding box in degrees.
///
/// Corners are normalized on construction so `min_*` is never greater
/// than `max_*`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoExtent {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoExtent {
    /// Creates an extent from two opposite corners, in either order.
    pub fn new(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> Self {
        GeoExtent {
            min_lon: lon_a.min(lon_b),
            min_lat: lat_a.min(lat_b),
            max_lon: lon_a.max(lon_b),
            max_lat: lat_a.max(lat_b),
        }
    }

    /// Width in degrees of longitude (or the extent's horizontal units).
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude (or the extent's vertical units).
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Midpoint as `(lon, lat)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// True when the point lies inside the extent, edges included.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

impl fmt::Display for GeoExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}, {:.6}, {:.6}]",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

/// Errors from decoding a quadkey string.
///
/// Quadkey decoding is the only conversion that can fail: its input is a
/// caller-supplied string, not a clampable number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadKeyError {
    /// A character outside `0..=3` appeared in the key.
    #[error("Invalid quadkey digit '{digit}' at position {position} in \"{key}\"")]
    InvalidDigit {
        key: String,
        digit: char,
        position: usize,
    },

    /// The key encodes more levels than the pyramid supports.
    #[error("Quadkey of length {len} exceeds the maximum zoom level {max}")]
    TooLong { len: usize, max: u8 },
}
