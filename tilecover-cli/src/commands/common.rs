//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use tilecover::coord::{GeoExtent, ZoomLevel, MAX_ZOOM};

use crate::error::CliError;

/// Request URL encoding selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum EncodingArg {
    /// WMTS key-value-pair query URLs built on a base endpoint
    Kvp,
    /// RESTful URLs built from the layer's resource template
    Rest,
}

/// Parse a `minLon,minLat,maxLon,maxLat` bounding box in degrees.
pub fn parse_extent(s: &str) -> Result<GeoExtent, CliError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(CliError::InvalidArgument(format!(
            "bounding box '{}' must have the form minLon,minLat,maxLon,maxLat",
            s
        )));
    }
    let mut values = [0.0f64; 4];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part.parse().map_err(|_| {
            CliError::InvalidArgument(format!("'{}' is not a number in bounding box '{}'", part, s))
        })?;
    }
    Ok(GeoExtent::new(values[0], values[1], values[2], values[3]))
}

/// Validate a zoom level argument against the pyramid depth.
pub fn parse_zoom(zoom: u8) -> Result<ZoomLevel, CliError> {
    if zoom > MAX_ZOOM {
        return Err(CliError::InvalidArgument(format!(
            "zoom level {} is beyond the maximum of {}",
            zoom, MAX_ZOOM
        )));
    }
    Ok(ZoomLevel::new(zoom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extent_accepts_four_numbers() {
        let extent = parse_extent("6.0,50.0,8.5,52.0").unwrap();
        assert_eq!(extent.min_lon, 6.0);
        assert_eq!(extent.min_lat, 50.0);
        assert_eq!(extent.max_lon, 8.5);
        assert_eq!(extent.max_lat, 52.0);
    }

    #[test]
    fn test_parse_extent_tolerates_spaces() {
        let extent = parse_extent(" -180, -85, 180, 85 ").unwrap();
        assert_eq!(extent.min_lon, -180.0);
        assert_eq!(extent.max_lat, 85.0);
    }

    #[test]
    fn test_parse_extent_rejects_wrong_arity() {
        assert!(parse_extent("1,2,3").is_err());
        assert!(parse_extent("1,2,3,4,5").is_err());
        assert!(parse_extent("").is_err());
    }

    #[test]
    fn test_parse_extent_rejects_non_numbers() {
        let err = parse_extent("a,2,3,4").unwrap_err();
        assert!(err.to_string().contains("is not a number"));
    }

    #[test]
    fn test_parse_zoom_bounds() {
        assert_eq!(parse_zoom(0).unwrap(), ZoomLevel::new(0));
        assert_eq!(parse_zoom(MAX_ZOOM).unwrap(), ZoomLevel::new(MAX_ZOOM));
        assert!(parse_zoom(MAX_ZOOM + 1).is_err());
    }
}
