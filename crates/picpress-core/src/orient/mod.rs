//! Upright rotation of photos from their EXIF orientation tag.
//!
//! Cameras record how they were held in the EXIF orientation tag rather
//! than rotating the pixels. This module reads that tag and turns the
//! image so it displays upright: a landscape-held shot stays put, a
//! portrait-held shot gets its 90 or 270 degree turn.
//!
//! Only the pure rotations (tags 3, 6 and 8) are handled; the mirrored
//! orientations are left alone, as phone cameras do not produce them.

mod apply;
mod read;

pub use apply::{upright, upright_from_file};
pub use read::{rotation_for_file, rotation_from_bytes};

use serde::{Deserialize, Serialize};

/// Clockwise rotation needed to display a photo upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// Already upright.
    #[default]
    None,
    /// Rotate 90 degrees clockwise (EXIF orientation 6).
    Cw90,
    /// Rotate 180 degrees (EXIF orientation 3).
    Cw180,
    /// Rotate 270 degrees clockwise (EXIF orientation 8).
    Cw270,
}

impl Rotation {
    /// Map a raw EXIF orientation tag value to a rotation.
    ///
    /// Unknown values and the mirrored orientations map to `None`.
    pub fn from_exif(value: u32) -> Self {
        match value {
            3 => Rotation::Cw180,
            6 => Rotation::Cw90,
            8 => Rotation::Cw270,
            _ => Rotation::None,
        }
    }

    /// Rotation amount in degrees clockwise.
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        }
    }

    /// Whether applying this rotation swaps width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Cw90 | Rotation::Cw270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exif_rotations() {
        assert_eq!(Rotation::from_exif(3), Rotation::Cw180);
        assert_eq!(Rotation::from_exif(6), Rotation::Cw90);
        assert_eq!(Rotation::from_exif(8), Rotation::Cw270);
    }

    #[test]
    fn test_from_exif_normal_and_unknown() {
        assert_eq!(Rotation::from_exif(1), Rotation::None);
        assert_eq!(Rotation::from_exif(0), Rotation::None);
        assert_eq!(Rotation::from_exif(99), Rotation::None);
    }

    #[test]
    fn test_from_exif_mirrored_tags_ignored() {
        // 2, 4, 5, 7 are flip variants; the original only rotates
        for tag in [2, 4, 5, 7] {
            assert_eq!(Rotation::from_exif(tag), Rotation::None);
        }
    }

    #[test]
    fn test_degrees() {
        assert_eq!(Rotation::None.degrees(), 0);
        assert_eq!(Rotation::Cw90.degrees(), 90);
        assert_eq!(Rotation::Cw180.degrees(), 180);
        assert_eq!(Rotation::Cw270.degrees(), 270);
    }

    #[test]
    fn test_swaps_dimensions() {
        assert!(!Rotation::None.swaps_dimensions());
        assert!(Rotation::Cw90.swaps_dimensions());
        assert!(!Rotation::Cw180.swaps_dimensions());
        assert!(Rotation::Cw270.swaps_dimensions());
    }
}
