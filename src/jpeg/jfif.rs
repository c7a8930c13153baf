//! JFIF (APP0) segment decoding
//!
//! The JFIF application segment is a fixed-layout structure:
//!
//! ```text
//! Bytes 0-4:   "JFIF\0" identifier
//! Bytes 5-6:   Version (major, minor)
//! Byte  7:     Density unit (0 = none, 1 = dots/inch, 2 = dots/cm)
//! Bytes 8-11:  Xdensity, Ydensity (2 bytes each, big-endian)
//! Bytes 12-13: Thumbnail width and height in pixels
//! Bytes 14-:   Thumbnail pixel data, when present (never decoded here)
//! ```

use std::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::exif::errors::{ExifError, ExifResult};

/// "JFIF\0" identifier opening the segment body
pub(crate) const JFIF_ID: [u8; 5] = [0x4A, 0x46, 0x49, 0x46, 0x00];

/// Minimum body length up to and including the thumbnail dimensions
const JFIF_MIN_LEN: usize = 14;

/// Decoded JFIF (APP0) segment header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jfif {
    /// Version as "major.minor"
    pub version: String,
    /// Density unit code
    pub units: u8,
    /// Horizontal pixel density
    pub x_density: u16,
    /// Vertical pixel density
    pub y_density: u16,
    /// Thumbnail width in pixels (0 = no thumbnail)
    pub x_thumbnail: u8,
    /// Thumbnail height in pixels (0 = no thumbnail)
    pub y_thumbnail: u8,
}

impl Jfif {
    /// Decodes an APP0 body (marker and length already stripped).
    ///
    /// All multi-byte integers in a JFIF segment are big-endian.
    pub fn parse(data: &[u8]) -> ExifResult<Self> {
        if !data.starts_with(&JFIF_ID) {
            return Err(ExifError::GenericError("Missing JFIF identifier".to_string()));
        }
        if data.len() < JFIF_MIN_LEN {
            return Err(ExifError::GenericError(format!(
                "APP0 body too short for JFIF header: {} bytes", data.len())));
        }

        Ok(Jfif {
            version: format!("{}.{}", data[5], data[6]),
            units: data[7],
            x_density: BigEndian::read_u16(&data[8..10]),
            y_density: BigEndian::read_u16(&data[10..12]),
            x_thumbnail: data[12],
            y_thumbnail: data[13],
        })
    }

    /// Returns the name of the density unit
    pub fn unit_name(&self) -> &'static str {
        match self.units {
            0 => "No units",
            1 => "Dots per inch",
            2 => "Dots per cm",
            _ => "Unknown",
        }
    }

    /// Returns true when the segment declares an embedded thumbnail
    pub fn has_thumbnail(&self) -> bool {
        self.x_thumbnail != 0 && self.y_thumbnail != 0
    }
}

impl fmt::Display for Jfif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "JFIF version {}", self.version)?;
        writeln!(f, "  Density: {}x{} ({})", self.x_density, self.y_density, self.unit_name())?;
        if self.has_thumbnail() {
            writeln!(f, "  Thumbnail: {}x{} pixels", self.x_thumbnail, self.y_thumbnail)?;
        } else {
            writeln!(f, "  Thumbnail: none")?;
        }
        Ok(())
    }
}
