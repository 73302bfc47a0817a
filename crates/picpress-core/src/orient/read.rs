//! Reading the EXIF orientation tag.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use exif::{In, Reader, Tag};
use log::debug;

use super::Rotation;

/// Read the upright rotation for an encoded image held in memory.
///
/// Missing or unreadable EXIF data yields [`Rotation::None`]; a photo
/// we cannot classify is displayed as-is rather than failing.
pub fn rotation_from_bytes(bytes: &[u8]) -> Rotation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => orientation_tag(&exif),
        Err(_) => Rotation::None,
    }
}

/// Read the upright rotation for an image file on disk.
///
/// Lenient like [`rotation_from_bytes`]: unreadable files or EXIF data
/// yield [`Rotation::None`].
pub fn rotation_for_file(path: &Path) -> Rotation {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("no EXIF rotation for {}: {}", path.display(), e);
            return Rotation::None;
        }
    };

    let mut reader = BufReader::new(file);
    match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => orientation_tag(&exif),
        Err(e) => {
            debug!("no EXIF rotation for {}: {}", path.display(), e);
            Rotation::None
        }
    }
}

fn orientation_tag(exif: &exif::Exif) -> Rotation {
    if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
        if let Some(value) = field.value.get_uint(0) {
            return Rotation::from_exif(value);
        }
    }
    Rotation::None
}
