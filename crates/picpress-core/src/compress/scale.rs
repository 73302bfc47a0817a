//! Dimension compression by subsampling.
//!
//! Shrinking works in sample sizes rather than target dimensions: a
//! sample size of `n` divides each dimension by `n`, cutting the pixel
//! count by `n²`. Sample sizes are always rounded up to the next power
//! of two before use, so the actual output can be smaller than the
//! bounds asked for. This is the right tool for keeping decoded images
//! from dominating memory; use the quality ramp in
//! [`super::compress_to_limit`] when the constraint is encoded file
//! size instead.

use log::debug;

use super::CompressError;
use crate::RasterImage;

/// Smallest integer sample size that brings `width x height` within
/// `limit_width x limit_height`. Both limits must be non-zero.
///
/// Returns 1 when the image already fits. The result is not yet rounded
/// to a power of two; [`shrink_by_sample`] does that.
pub fn sample_size_for_bounds(
    width: u32,
    height: u32,
    limit_width: u32,
    limit_height: u32,
) -> u32 {
    let width_ratio = f64::from(width) / f64::from(limit_width);
    let height_ratio = f64::from(height) / f64::from(limit_height);
    (width_ratio.max(height_ratio).ceil() as u32).max(1)
}

/// Shrink an image by a sample size.
///
/// The sample size is rounded up to the next power of two; each output
/// dimension is the source dimension divided by the rounded factor
/// (minimum 1). A factor of 1, or an empty source, returns a clone of
/// the input unchanged. Downscaling uses bilinear filtering.
pub fn shrink_by_sample(
    image: &RasterImage,
    sample_size: u32,
) -> Result<RasterImage, CompressError> {
    let sample = sample_size.max(1).next_power_of_two();
    if sample == 1 || image.is_empty() {
        return Ok(image.clone());
    }

    let (width, height) = image.dimensions();
    let new_width = (width / sample).max(1);
    let new_height = (height / sample).max(1);
    debug!(
        "subsampling by {}: {}x{} -> {}x{}",
        sample, width, height, new_width, new_height
    );

    let resized = image::imageops::resize(
        image.as_rgb(),
        new_width,
        new_height,
        image::imageops::FilterType::Triangle,
    );

    Ok(RasterImage::from_rgb(resized))
}

/// Shrink an image proportionally until both dimensions fit the bounds.
///
/// Computes the sample size from the bounds and applies it. An image
/// already within bounds is returned unchanged. Because sample sizes
/// are rounded up to powers of two, the result can undershoot the
/// bounds considerably.
///
/// # Errors
///
/// Returns `CompressError::InvalidBounds` when either bound is zero.
pub fn shrink_to_bounds(
    image: &RasterImage,
    limit_width: u32,
    limit_height: u32,
) -> Result<RasterImage, CompressError> {
    if limit_width == 0 || limit_height == 0 {
        return Err(CompressError::InvalidBounds {
            width: limit_width,
            height: limit_height,
        });
    }

    let (width, height) = image.dimensions();
    let sample = sample_size_for_bounds(width, height, limit_width, limit_height);
    shrink_by_sample(image, sample)
}
