//! Applying an upright rotation to a decoded image.

use std::path::Path;

use image::imageops;

use super::{rotation_for_file, Rotation};
use crate::RasterImage;

/// Turn an image upright.
///
/// Consumes the source. [`Rotation::None`] hands the image back
/// untouched; any other rotation releases the source buffer and returns
/// a freshly rotated image, so the caller never holds a stale handle to
/// pre-rotation pixels.
pub fn upright(image: RasterImage, rotation: Rotation) -> RasterImage {
    match rotation {
        Rotation::None => image,
        Rotation::Cw90 => RasterImage::from_rgb(imageops::rotate90(image.as_rgb())),
        Rotation::Cw180 => RasterImage::from_rgb(imageops::rotate180(image.as_rgb())),
        Rotation::Cw270 => RasterImage::from_rgb(imageops::rotate270(image.as_rgb())),
    }
}

/// Turn a decoded image upright according to the EXIF data of the file
/// it was decoded from.
///
/// The usual flow is decode-then-orient: the caller decodes (possibly
/// shrinking along the way) and passes the source path here to pick up
/// the camera's orientation tag. Files without usable EXIF leave the
/// image untouched.
pub fn upright_from_file(path: &Path, image: RasterImage) -> RasterImage {
    upright(image, rotation_for_file(path))
}
