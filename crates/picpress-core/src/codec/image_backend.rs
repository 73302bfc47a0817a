//! Production codec backed by the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use image::ImageReader;

use super::{Codec, CodecError, CompressFormat};
use crate::RasterImage;

/// Codec implementation using the `image` crate's JPEG and PNG support.
///
/// JPEG encoding accepts a quality level; the `image` crate's encoder
/// requires 1-100, so quality 0 is clamped up to 1. PNG is lossless and
/// ignores the quality level entirely.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl Codec for ImageCodec {
    fn encode(
        &self,
        image: &RasterImage,
        format: CompressFormat,
        quality: u8,
    ) -> Result<Vec<u8>, CodecError> {
        if image.is_empty() {
            return Err(CodecError::EmptyImage);
        }

        let (width, height) = image.dimensions();
        let pixels = image.as_rgb().as_raw();
        let mut buffer = Cursor::new(Vec::new());

        match format {
            CompressFormat::Jpeg => {
                // The image crate's JPEG encoder rejects quality 0
                let quality = quality.clamp(1, 100);
                let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
                encoder
                    .write_image(pixels, width, height, ExtendedColorType::Rgb8)
                    .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;
            }
            CompressFormat::Png => {
                let encoder = PngEncoder::new(&mut buffer);
                encoder
                    .write_image(pixels, width, height, ExtendedColorType::Rgb8)
                    .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;
            }
        }

        Ok(buffer.into_inner())
    }

    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, CodecError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| CodecError::DecodingFailed(e.to_string()))?;

        let img = reader
            .decode()
            .map_err(|e| CodecError::DecodingFailed(e.to_string()))?;

        Ok(RasterImage::from_rgb(img.into_rgb8()))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
