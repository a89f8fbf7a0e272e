//! Map-scale computation for tile requests.
//!
//! Computes the nominal 1:N scale denominator of a rendition: how many
//! ground meters one meter of output spans, assuming the standardized
//! 0.28mm rendering pixel. Geographic extents are converted to meters at
//! the equator first.

use thiserror::Error;

use crate::coord::GeoExtent;
use crate::matrix::Crs;

/// Display resolution the scale computation assumes, in pixels per inch.
///
/// `25.4mm / 0.28mm`: one inch of standardized 0.28mm rendering pixels.
pub const OGC_DPI: f64 = 25.4 / 0.28;

/// Ground meters per degree of longitude at the equator.
pub const OGC_DEGREE_TO_METERS: f64 = 111_319.490_793_273_58;

/// Errors from computing a scale denominator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The extent has no usable width
    #[error("Extent width {0} is not a positive finite number")]
    DegenerateExtent(f64),

    /// The rendition has no pixels to map the extent onto
    #[error("Output width must be positive")]
    DegenerateOutput,
}

/// Computes the rounded scale denominator of a rendition.
///
/// The denominator is the extent's width in meters divided by the width
/// of the output in meters of physical display (`width_px / dpi` inches).
/// Extents in a geographic CRS are measured in degrees and converted at
/// the equator; extents in any other CRS are taken to be meters already.
///
/// The result is rounded to a whole denominator before matching it
/// against the pyramid's per-level scales.
///
/// # Errors
///
/// [`ScaleError::DegenerateExtent`] when the extent's width is zero,
/// negative, or not finite; [`ScaleError::DegenerateOutput`] when
/// `width_px` is zero.
pub fn compute_ogc_scale(
    extent: &GeoExtent,
    crs: &Crs,
    width_px: u32,
    dpi: f64,
) -> Result<f64, ScaleError> {
    let width = extent.width();
    if !width.is_finite() || width <= 0.0 {
        return Err(ScaleError::DegenerateExtent(width));
    }
    if width_px == 0 {
        return Err(ScaleError::DegenerateOutput);
    }

    let width_meters = if crs.is_geographic() {
        width * OGC_DEGREE_TO_METERS
    } else {
        width
    };
    let display_meters = width_px as f64 / dpi * 0.0254;
    Ok((width_meters / display_meters).round())
}
