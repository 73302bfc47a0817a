//! File-level helpers: copy, load, save, and path-based compression.
//!
//! The compression loops themselves never touch the filesystem; this
//! module composes them with `std::fs` for the common camera-roll
//! flows: copy a photo aside, load it (optionally shrunk and turned
//! upright), and save it back with or without a byte budget.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::{Codec, CodecError, CompressFormat, ImageCodec};
use crate::compress::{self, CompressError};
use crate::orient;
use crate::RasterImage;

/// Errors from file-level operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The source path does not exist or is not a regular file.
    #[error("source is not a readable file: {path}")]
    InvalidSource { path: PathBuf },

    /// I/O error while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's bytes could not be decoded, or encoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A compression step failed.
    #[error(transparent)]
    Compress(#[from] CompressError),
}

/// Copy an image file, returning the number of bytes copied.
///
/// # Errors
///
/// Returns `StorageError::InvalidSource` when the source does not exist
/// or is not a regular file, before touching the destination.
pub fn copy_image(source: &Path, dest: &Path) -> Result<u64, StorageError> {
    if !source.is_file() {
        return Err(StorageError::InvalidSource {
            path: source.to_path_buf(),
        });
    }
    Ok(fs::copy(source, dest)?)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<RasterImage, StorageError> {
    let bytes = fs::read(path)?;
    Ok(ImageCodec.decode(&bytes)?)
}

/// Load an image shrunk to fit within the given bounds, optionally
/// turned upright per the file's EXIF orientation.
///
/// Shrinking uses the power-of-two sample-size rules of
/// [`compress::shrink_to_bounds`]; the rotation is applied after the
/// shrink, on the smaller image.
pub fn load_shrunk_to_bounds(
    path: &Path,
    limit_width: u32,
    limit_height: u32,
    upright: bool,
) -> Result<RasterImage, StorageError> {
    let bytes = fs::read(path)?;
    let decoded = ImageCodec.decode(&bytes)?;
    let shrunk = compress::shrink_to_bounds(&decoded, limit_width, limit_height)?;
    drop(decoded);

    if upright {
        let rotation = orient::rotation_from_bytes(&bytes);
        Ok(orient::upright(shrunk, rotation))
    } else {
        Ok(shrunk)
    }
}

/// Encode an image at full quality and write it to a file.
pub fn save_image(
    image: &RasterImage,
    format: CompressFormat,
    path: &Path,
) -> Result<(), StorageError> {
    let bytes = ImageCodec.encode(image, format, 100)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Run the size-bounded quality ramp and write the accepted buffer.
///
/// The buffer is written as-is, without a decode round trip. The usual
/// quality-0 caveat applies: an image that cannot meet `limit_bytes`
/// even at the lowest quality is written oversize.
pub fn save_image_limited(
    image: &RasterImage,
    format: CompressFormat,
    path: &Path,
    limit_bytes: usize,
) -> Result<(), StorageError> {
    let (bytes, _quality) = compress::encode_to_limit(&ImageCodec, image, format, limit_bytes)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Load an image file and compress it to fit a byte budget.
pub fn compress_file_to_limit(
    path: &Path,
    format: CompressFormat,
    limit_bytes: usize,
) -> Result<RasterImage, StorageError> {
    let image = load_image(path)?;
    Ok(compress::compress_to_limit(&ImageCodec, image, format, limit_bytes)?)
}
