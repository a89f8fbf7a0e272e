//! Coordinate conversion for the global tile pyramid.
//!
//! Converts between geographic coordinates (longitude/latitude), global
//! pixel coordinates, tile indices, and quadkey codes for a pseudo-Mercator
//! pyramid of 256-pixel tiles that doubles its grid resolution per zoom
//! level.
//!
//! # Clamping, not errors
//!
//! Geographic inputs outside the projection's range are clamped to
//! [`MIN_LAT`]/[`MAX_LAT`] and [`MIN_LON`]/[`MAX_LON`], and pixel results
//! are clamped to `0..map_size-1`; none of the numeric conversions fail.
//! The one fallible operation is [`quadkey_to_tile_xy`], whose input is an
//! arbitrary caller-supplied string.

mod types;

pub use types::{
    GeoExtent, QuadKeyError, ZoomLevel, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
    TILE_EDGE_PX,
};

use std::f64::consts::PI;

/// Pixel edge length of the full world map at a zoom level.
///
/// `256 * 2^level`: one 256-pixel tile at level 0, doubling per level.
#[inline]
pub fn map_size(zoom: ZoomLevel) -> u64 {
    zoom.map_size()
}

/// Converts geographic coordinates to global pixel coordinates.
///
/// Latitude is clamped to `[-85.05112878, 85.05112878]` and longitude to
/// `[-180, 180]` before projecting; the resulting pixel pair is clamped to
/// `[0, map_size - 1]` on both axes.
///
/// # Arguments
///
/// * `lon` - Longitude in degrees
/// * `lat` - Latitude in degrees
/// * `zoom` - Zoom level determining the pixel grid size
///
/// # Returns
///
/// The `(x, y)` pixel position; `y` grows southward.
#[inline]
pub fn lon_lat_to_pixel_xy(lon: f64, lat: f64, zoom: ZoomLevel) -> (u64, u64) {
    let lat = lat.clamp(MIN_LAT, MAX_LAT);
    let lon = lon.clamp(MIN_LON, MAX_LON);

    let x = (lon + 180.0) / 360.0;
    let sin_lat = (lat * PI / 180.0).sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

    let size = zoom.map_size() as f64;
    let max = size - 1.0;
    let px = (x * size).round().clamp(0.0, max) as u64;
    let py = (y * size).round().clamp(0.0, max) as u64;
    (px, py)
}

/// Converts global pixel coordinates back to geographic coordinates.
///
/// The algebraic inverse of [`lon_lat_to_pixel_xy`] up to that function's
/// rounding. Pixels beyond the grid edge are clamped first, so the last
/// addressable pixel bounds the output rather than 180°/-85.05° exactly.
///
/// # Returns
///
/// `(lon, lat)` in degrees.
#[inline]
pub fn pixel_xy_to_lon_lat(px: u64, py: u64, zoom: ZoomLevel) -> (f64, f64) {
    let size = zoom.map_size() as f64;
    let max = size - 1.0;
    let x = (px as f64).clamp(0.0, max) / size - 0.5;
    let y = 0.5 - (py as f64).clamp(0.0, max) / size;

    let lon = 360.0 * x;
    let lat = 90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI;
    (lon, lat)
}

/// Converts global pixel coordinates to tile indices by floor division.
#[inline]
pub fn pixel_xy_to_tile_xy(px: u64, py: u64) -> (u32, u32) {
    ((px / TILE_EDGE_PX) as u32, (py / TILE_EDGE_PX) as u32)
}

/// Encodes tile indices as a quadkey of exactly `level` digits.
///
/// One base-4 digit per level, most significant level first: each digit
/// combines one bit of the column (low bit) and row (high bit), so digit
/// values are `0..=3` and the key's length equals the zoom level.
pub fn tile_xy_to_quadkey(x: u32, y: u32, zoom: ZoomLevel) -> String {
    let mut key = String::with_capacity(zoom.level() as usize);
    for i in (1..=zoom.level()).rev() {
        let mask = 1u32 << (i - 1);
        let mut digit = 0u8;
        if x & mask != 0 {
            digit += 1;
        }
        if y & mask != 0 {
            digit += 2;
        }
        key.push(char::from(b'0' + digit));
    }
    key
}

/// Decodes a quadkey into tile indices and the zoom level it encodes.
///
/// The empty key is valid and names the single level-0 tile.
///
/// # Errors
///
/// [`QuadKeyError::InvalidDigit`] for characters outside `0..=3`;
/// [`QuadKeyError::TooLong`] for keys deeper than [`MAX_ZOOM`].
pub fn quadkey_to_tile_xy(key: &str) -> Result<(u32, u32, ZoomLevel), QuadKeyError> {
    let depth = key.chars().count();
    if depth > MAX_ZOOM as usize {
        return Err(QuadKeyError::TooLong {
            len: depth,
            max: MAX_ZOOM,
        });
    }

    let mut x = 0u32;
    let mut y = 0u32;
    for (position, digit) in key.chars().enumerate() {
        x <<= 1;
        y <<= 1;
        match digit {
            '0' => {}
            '1' => x |= 1,
            '2' => y |= 1,
            '3' => {
                x |= 1;
                y |= 1;
            }
            _ => {
                return Err(QuadKeyError::InvalidDigit {
                    key: key.to_string(),
                    digit,
                    position,
                })
            }
        }
    }
    Ok((x, y, ZoomLevel::new(depth as u8)))
}

/// Converts geographic coordinates directly to the owning tile's quadkey.
pub fn lon_lat_to_quadkey(lon: f64, lat: f64, zoom: ZoomLevel) -> String {
    let (px, py) = lon_lat_to_pixel_xy(lon, lat, zoom);
    let (tx, ty) = pixel_xy_to_tile_xy(px, py);
    tile_xy_to_quadkey(tx, ty, zoom)
}

/// Geographic bounding box of the tile containing a point.
pub fn tile_bounding_box(lon: f64, lat: f64, zoom: ZoomLevel) -> GeoExtent {
    let (px, py) = lon_lat_to_pixel_xy(lon, lat, zoom);
    let (tx, ty) = pixel_xy_to_tile_xy(px, py);
    tile_extent(tx, ty, zoom)
}

/// Geographic bounding box of a tile given by its indices.
///
/// Inverse-projects the tile's top-left pixel and the first pixel of the
/// next tile on each axis. On the last row/column the far corner clamps to
/// the last addressable pixel, so that edge stops one pixel short of the
/// projection's outer bound.
pub fn tile_extent(x: u32, y: u32, zoom: ZoomLevel) -> GeoExtent {
    let min_px = x as u64 * TILE_EDGE_PX;
    let min_py = y as u64 * TILE_EDGE_PX;
    let (lon_a, lat_a) = pixel_xy_to_lon_lat(min_px, min_py, zoom);
    let (lon_b, lat_b) = pixel_xy_to_lon_lat(min_px + TILE_EDGE_PX, min_py + TILE_EDGE_PX, zoom);
    GeoExtent::new(lon_a, lat_a, lon_b, lat_b)
}
