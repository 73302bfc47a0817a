//! Image byte-stream encoding and decoding.
//!
//! Picpress never implements an image format itself. Everything that
//! turns pixels into bytes (or back) goes through the [`Codec`] trait,
//! and the compression loops in [`crate::compress`] are generic over it.
//! That keeps the interesting logic testable with a stub codec whose
//! output size is a deterministic function of the quality level.
//!
//! [`ImageCodec`] is the production implementation, backed by the
//! `image` crate's JPEG and PNG codecs.

mod image_backend;
mod types;

pub use image_backend::ImageCodec;
pub use types::{Codec, CodecError, CompressFormat};
