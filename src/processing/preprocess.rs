//! Image preprocessing ahead of line and note detection
//!
//! Thin wrappers over the `image`/`imageproc` operations the pipeline
//! needs: grayscale conversion, edge maps for display, and adaptive
//! binarization that turns dark staff lines into bright foreground rows
//! for the horizontal projection. No pixel math is hand-rolled here.

use image::{GrayImage, Luma, Rgb, RgbImage, RgbaImage};
use imageproc::contrast::adaptive_threshold;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use crate::error::ScanError;

/// Gaussian sigma applied before edge detection to cut scan noise
const BLUR_SIGMA: f32 = 1.4;

/// Canny hysteresis thresholds
const CANNY_LOW: f32 = 50.0;
const CANNY_HIGH: f32 = 150.0;

/// Neighborhood radius for mean adaptive thresholding (15x15 window)
const THRESHOLD_BLOCK_RADIUS: u32 = 7;

/// Interpret a raw RGBA byte buffer (canvas `ImageData` layout) as an image
pub fn rgba_from_raw(pixels: Vec<u8>, width: u32, height: u32) -> Result<RgbaImage, ScanError> {
    if width == 0 || height == 0 {
        return Err(ScanError::InvalidInput(format!(
            "image has degenerate dimensions {}x{}",
            width, height
        )));
    }
    RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        ScanError::InvalidInput(format!(
            "pixel buffer does not match {}x{} RGBA dimensions",
            width, height
        ))
    })
}

/// Luma conversion via the standard BT.601 weighting
pub fn to_grayscale(image: &RgbaImage) -> GrayImage {
    image::imageops::grayscale(image)
}

/// Blurred Canny edge map, kept for display and diagnostics
pub fn edge_map(gray: &GrayImage) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, BLUR_SIGMA);
    canny(&blurred, CANNY_LOW, CANNY_HIGH)
}

/// Binarize so that ink (staff lines, note heads) becomes bright foreground
///
/// Mean adaptive threshold marks lighter-than-neighborhood pixels white;
/// inverting leaves the dark ink as 255 and the paper as 0, which is the
/// polarity the projection profile expects.
pub fn binarize(gray: &GrayImage) -> GrayImage {
    let mut thresholded = adaptive_threshold(gray, THRESHOLD_BLOCK_RADIUS);
    image::imageops::invert(&mut thresholded);
    thresholded
}

/// Replicate a single channel into RGB for detectors expecting color input
pub fn prepare_for_detection(gray: &GrayImage) -> RgbImage {
    let (width, height) = gray.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let Luma([v]) = *gray.get_pixel(x, y);
        Rgb([v, v, v])
    })
}
