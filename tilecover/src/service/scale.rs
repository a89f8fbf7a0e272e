//! Scale denominators for the pseudo-Mercator pyramid.
//!
//! Each zoom level halves the scale denominator of the level above it. The
//! level 0 denominator corresponds to a single 256px tile spanning the
//! projected extent of the earth at 0.28mm per pixel, the standardized
//! rendering pixel size.

use crate::coord::{ZoomLevel, MAX_ZOOM};

/// Scale denominator of zoom level 0.
pub const LEVEL_0_SCALE_DENOMINATOR: f64 = 559_082_264.028_717_8;

/// Returns the scale denominator of a zoom level.
pub fn scale_denominator_for_zoom(zoom: ZoomLevel) -> f64 {
    LEVEL_0_SCALE_DENOMINATOR / (1u64 << zoom.level()) as f64
}

/// Returns the zoom level whose scale denominator is closest to the given
/// one, on a logarithmic axis.
///
/// Scales coarser than level 0 clamp to level 0 and scales finer than the
/// deepest level clamp to [`MAX_ZOOM`]. Ties round toward the finer level.
pub fn zoom_for_scale(scale_denominator: f64) -> ZoomLevel {
    let ratio = LEVEL_0_SCALE_DENOMINATOR / scale_denominator;
    if !ratio.is_finite() || ratio <= 1.0 {
        return ZoomLevel::new(0);
    }
    let level = ratio.log2().round();
    if level >= MAX_ZOOM as f64 {
        ZoomLevel::new(MAX_ZOOM)
    } else {
        ZoomLevel::new(level as u8)
    }
}
