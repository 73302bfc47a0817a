//! Size-bounded quality compression.
//!
//! The quality ramp is a linear search: encode at quality 100, then keep
//! decrementing by 1 and re-encoding until the buffer fits the byte limit
//! or quality reaches 0. Reaching 0 accepts whatever size results, so the
//! limit is not guaranteed for images that stay too large even at the
//! lowest quality. There are no retries and no backoff.

use log::debug;

use super::CompressError;
use crate::codec::{Codec, CompressFormat};
use crate::RasterImage;

/// Encode an image at the highest quality that fits `limit_bytes`.
///
/// Returns the accepted buffer together with the quality it was encoded
/// at. A final quality of 100 means the image fit on the first attempt;
/// a final quality of 0 means the ramp was exhausted and the buffer may
/// still exceed the limit.
///
/// # Errors
///
/// Returns `CompressError::InvalidLimit` when `limit_bytes` is zero,
/// before any encoding attempt. Encoder failures propagate immediately.
pub fn encode_to_limit<C: Codec>(
    codec: &C,
    image: &RasterImage,
    format: CompressFormat,
    limit_bytes: usize,
) -> Result<(Vec<u8>, u8), CompressError> {
    if limit_bytes == 0 {
        return Err(CompressError::InvalidLimit);
    }

    let mut quality: u8 = 100;
    let mut buffer = codec.encode(image, format, quality)?;
    debug!(
        "initial encode: {} bytes at quality 100, limit {}",
        buffer.len(),
        limit_bytes
    );

    while buffer.len() > limit_bytes && quality > 0 {
        quality -= 1;
        buffer = codec.encode(image, format, quality)?;
        debug!("lowered quality to {}, {} bytes", quality, buffer.len());
    }

    Ok((buffer, quality))
}

/// Compress an image so its encoded size fits `limit_bytes`.
///
/// Consumes the source image. If at least one re-encode was needed, the
/// original pixel buffer is released and a new image is decoded from the
/// accepted buffer; otherwise the original is returned unchanged. Either
/// way the caller holds exactly one live handle afterwards.
///
/// The returned image reflects the quality loss of the final encode. If
/// quality reached 0 without satisfying the limit, the result is the
/// quality-0 rendition and its encoded size may exceed `limit_bytes`;
/// use [`encode_to_limit`] when the actual size matters.
///
/// # Errors
///
/// Returns `CompressError::InvalidLimit` when `limit_bytes` is zero.
/// Codec failures propagate; the source image is dropped in that case.
pub fn compress_to_limit<C: Codec>(
    codec: &C,
    image: RasterImage,
    format: CompressFormat,
    limit_bytes: usize,
) -> Result<RasterImage, CompressError> {
    let (buffer, quality) = encode_to_limit(codec, &image, format, limit_bytes)?;

    // quality < 100 means the ramp ran at least once
    if quality < 100 {
        drop(image);
        Ok(codec.decode(&buffer)?)
    } else {
        Ok(image)
    }
}



#[cfg(test)]
mod proptests {
    use super::stub::StubCodec;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: The ramp always terminates within 101 encodes, never
        /// drives quality below 0, and honors the limit whenever some
        /// quality level can.
        #[test]
        fn prop_ramp_bounded_and_correct(
            base in 1usize..=64,
            per_quality in 0usize..=16,
            limit in 1usize..=4000,
        ) {
            let codec = StubCodec::new(base, per_quality);
            let image = RasterImage::from_pixels(1, 1, vec![0, 0, 0]).unwrap();

            let (buffer, quality) =
                encode_to_limit(&codec, &image, CompressFormat::Jpeg, limit).unwrap();

            prop_assert!(codec.encode_count() <= 101);
            prop_assert!(quality <= 100);

            if base <= limit {
                prop_assert!(buffer.len() <= limit);
            } else {
                // Ramp exhausted: accepted the quality-0 rendition
                prop_assert_eq!(quality, 0);
                prop_assert_eq!(buffer.len(), base);
            }
        }

        /// Property: A limit at or above the full-quality size means a
        /// single encode and no ramp.
        #[test]
        fn prop_no_ramp_when_limit_generous(
            base in 1usize..=64,
            per_quality in 0usize..=16,
        ) {
            let codec = StubCodec::new(base, per_quality);
            let image = RasterImage::from_pixels(1, 1, vec![0, 0, 0]).unwrap();
            let full_size = base + per_quality * 100;

            let (_, quality) =
                encode_to_limit(&codec, &image, CompressFormat::Jpeg, full_size).unwrap();

            prop_assert_eq!(quality, 100);
            prop_assert_eq!(codec.encode_count(), 1);
        }

        /// Property: Quality never increases between consecutive attempts.
        #[test]
        fn prop_quality_monotone(
            base in 1usize..=64,
            per_quality in 0usize..=16,
            limit in 1usize..=4000,
        ) {
            let codec = StubCodec::new(base, per_quality);
            let image = RasterImage::from_pixels(1, 1, vec![0, 0, 0]).unwrap();

            encode_to_limit(&codec, &image, CompressFormat::Jpeg, limit).unwrap();

            let qualities = codec.qualities();
            prop_assert!(qualities.windows(2).all(|pair| pair[1] < pair[0]));
        }
    }
}
