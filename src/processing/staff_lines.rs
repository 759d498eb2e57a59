//! Staff line location via horizontal projection
//!
//! A binarized score image has bright (foreground) staff line rows.
//! Summing each row gives a profile whose peaks are the lines: a row
//! that is mostly foreground across the full width stands far above the
//! rows holding only note heads and stems.

use image::GrayImage;

use crate::error::ScanError;
use crate::models::StaffLineSet;
use crate::processing::peaks::find_peaks;

/// Minimum separation between accepted staff line rows, in pixels
pub const MIN_LINE_DISTANCE: usize = 20;

/// Fraction of a fully-bright row a projection peak must reach
const HEIGHT_FRACTION: f64 = 0.5;

/// Per-row sum of pixel intensities across the image width
pub fn horizontal_projection(image: &GrayImage) -> Vec<u64> {
    let (width, height) = image.dimensions();
    let mut profile = vec![0u64; height as usize];
    for (y, row) in profile.iter_mut().enumerate() {
        for x in 0..width {
            *row += image.get_pixel(x, y as u32).0[0] as u64;
        }
    }
    profile
}

/// Locate staff lines in a preprocessed (binarized) score image
///
/// Returns the ascending, duplicate-free row indices whose projection
/// exceeds half the maximum possible row sum, with peaks closer than
/// [`MIN_LINE_DISTANCE`] rows suppressed in favor of the stronger one.
/// An empty result is valid: no staff lines does not mean no image.
pub fn find_staff_lines(image: &GrayImage) -> Result<StaffLineSet, ScanError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ScanError::InvalidInput(format!(
            "image has degenerate dimensions {}x{}",
            width, height
        )));
    }

    let profile = horizontal_projection(image);
    let min_height = (width as f64 * u8::MAX as f64 * HEIGHT_FRACTION) as u64;
    let peaks = find_peaks(&profile, min_height, MIN_LINE_DISTANCE);

    log::debug!(
        "staff line location: {} peaks over threshold {} in {}x{} image",
        peaks.len(),
        min_height,
        width,
        height
    );

    Ok(StaffLineSet::from_ys(
        peaks.iter().map(|p| p.index as u32).collect(),
    ))
}
