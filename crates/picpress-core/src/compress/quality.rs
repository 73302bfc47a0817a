//! One-shot quality compression.

use super::CompressError;
use crate::codec::{Codec, CompressFormat};
use crate::RasterImage;

/// Re-encode an image once at the given quality level.
///
/// Quality above 100 is clamped to 100. Consumes the source image: the
/// original pixel buffer is released and the result is decoded from the
/// freshly encoded bytes, so the returned handle never aliases the input
/// (on error the source is dropped as well).
///
/// # Errors
///
/// Codec failures propagate as `CompressError::Codec`.
pub fn compress_at_quality<C: Codec>(
    codec: &C,
    image: RasterImage,
    format: CompressFormat,
    quality: u8,
) -> Result<RasterImage, CompressError> {
    let quality = quality.min(100);
    let buffer = codec.encode(&image, format, quality)?;
    drop(image);
    Ok(codec.decode(&buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ImageCodec;

    fn gray_image(width: u32, height: u32) -> RasterImage {
        RasterImage::from_pixels(width, height, vec![128u8; (width * height * 3) as usize])
            .unwrap()
    }

    #[test]
    fn test_result_is_reencoded() {
        let image = gray_image(20, 10);
        let result =
            compress_at_quality(&ImageCodec, image, CompressFormat::Jpeg, 80).unwrap();

        // Dimensions survive the encode/decode cycle
        assert_eq!(result.dimensions(), (20, 10));
    }

    #[test]
    fn test_excess_quality_clamped() {
        let image = gray_image(10, 10);
        assert!(compress_at_quality(&ImageCodec, image, CompressFormat::Jpeg, 255).is_ok());
    }

    #[test]
    fn test_lossless_format_preserves_pixels() {
        let mut data = Vec::with_capacity(8 * 8 * 3);
        for i in 0..(8 * 8 * 3) {
            data.push((i % 251) as u8);
        }
        let image = RasterImage::from_pixels(8, 8, data).unwrap();
        let original = image.clone();

        let result = compress_at_quality(&ImageCodec, image, CompressFormat::Png, 50).unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn test_empty_image_fails() {
        let image = RasterImage::from_pixels(0, 0, vec![]).unwrap();
        let result = compress_at_quality(&ImageCodec, image, CompressFormat::Jpeg, 90);
        assert!(matches!(result, Err(CompressError::Codec(_))));
    }
}
