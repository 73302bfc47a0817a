//! Image compression operations.
//!
//! This module provides the three compression strategies of the library:
//! - Size-bounded quality compression: re-encode at decreasing quality
//!   until the encoded size fits a byte budget ([`compress_to_limit`])
//! - One-shot quality compression ([`compress_at_quality`])
//! - Dimension compression by power-of-two subsampling
//!   ([`shrink_to_bounds`], [`shrink_by_sample`])
//!
//! Quality compression is the right tool when a server caps upload file
//! sizes; dimension compression is the right tool when the decoded image
//! would be too large in memory. The two compose: shrink first, then
//! ramp the quality down.
//!
//! All operations are blocking, synchronous and single-threaded, with no
//! cancellation points. A full quality ramp performs at most 101 encodes.

mod limit;
mod quality;
mod scale;

pub use limit::{compress_to_limit, encode_to_limit};
pub use quality::compress_at_quality;
pub use scale::{sample_size_for_bounds, shrink_by_sample, shrink_to_bounds};

use thiserror::Error;

use crate::codec::CodecError;

/// Errors that can occur during compression.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The byte limit for a size-bounded compression was zero.
    #[error("byte limit must be greater than zero")]
    InvalidLimit,

    /// A dimension bound was zero.
    #[error("bounds must be non-zero, got {width}x{height}")]
    InvalidBounds { width: u32, height: u32 },

    /// The underlying codec failed; no partial result is returned.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
