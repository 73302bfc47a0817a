//! The codec capability seam and its parameter types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::RasterImage;

/// Error types for encode/decode operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The image has zero width or height, so there is nothing to encode.
    #[error("image has no pixels to encode")]
    EmptyImage,

    /// The underlying encoder reported a failure.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),

    /// The bytes are not a decodable image, or the decoder failed.
    #[error("decoding failed: {0}")]
    DecodingFailed(String),
}

/// Target byte-stream format for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompressFormat {
    /// Lossy JPEG; the quality level (0-100) trades size for fidelity.
    #[default]
    Jpeg,
    /// Lossless PNG; the quality level is ignored.
    Png,
}

impl CompressFormat {
    /// Whether the quality parameter has any effect on the output.
    pub fn is_lossy(self) -> bool {
        matches!(self, CompressFormat::Jpeg)
    }
}

/// Encode/decode capability, injected wherever pixels meet bytes.
///
/// `quality` is always in `[0, 100]`; implementations for formats or
/// encoders with a narrower accepted range are expected to clamp rather
/// than fail.
pub trait Codec {
    /// Encode an image into a fresh byte buffer at the given quality.
    fn encode(
        &self,
        image: &RasterImage,
        format: CompressFormat,
        quality: u8,
    ) -> Result<Vec<u8>, CodecError>;

    /// Decode a byte buffer into a new image.
    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, CodecError>;
}
