//! Picpress Core - Image compression and photo preparation library
//!
//! This crate provides the image handling functionality for Picpress,
//! including size-bounded quality compression, dimension shrinking,
//! EXIF-based upright rotation, and file helpers.
//!
//! # Ownership Discipline
//!
//! Operations that may supersede the source image (`compress_to_limit`,
//! `compress_at_quality`, `upright`) take the [`RasterImage`] **by value**
//! and return a new handle. When a re-encode or rotation happens, the
//! original pixel buffer is dropped inside the call; the caller can never
//! alias an image that has been released. When nothing changed, the same
//! image is handed back unchanged.

pub mod codec;
pub mod compress;
pub mod orient;
pub mod storage;

pub use codec::{Codec, CodecError, CompressFormat, ImageCodec};
pub use compress::{
    compress_at_quality, compress_to_limit, encode_to_limit, shrink_by_sample, shrink_to_bounds,
    CompressError,
};
pub use orient::{upright, upright_from_file, Rotation};

/// An owned, decoded raster image (RGB, 8 bits per channel).
///
/// Wraps an [`image::RgbImage`] so that dimensions and pixel buffer can
/// never disagree: the only fallible construction point is
/// [`RasterImage::from_pixels`], which rejects a mismatched buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: image::RgbImage,
}

impl RasterImage {
    /// Build an image from raw RGB pixel data in row-major order
    /// (3 bytes per pixel).
    ///
    /// Returns `None` when `data.len() != width * height * 3`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        image::RgbImage::from_raw(width, height, data).map(|pixels| Self { pixels })
    }

    /// Wrap an existing RGB image buffer.
    pub fn from_rgb(pixels: image::RgbImage) -> Self {
        Self { pixels }
    }

    /// Consume the handle and return the underlying RGB buffer.
    pub fn into_rgb(self) -> image::RgbImage {
        self.pixels
    }

    /// Borrow the underlying RGB buffer.
    pub fn as_rgb(&self) -> &image::RgbImage {
        &self.pixels
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Size of the decoded pixel buffer in bytes.
    ///
    /// Note that this is the in-memory footprint, which is usually far
    /// larger than any encoded file produced from the image.
    pub fn byte_size(&self) -> usize {
        self.pixels.as_raw().len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}
