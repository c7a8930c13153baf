//! Exif code translators
//!
//! This module provides utilities for translating numeric Exif tag values
//! into human-readable descriptions. These functions are used when
//! displaying decoded directories to users.

use crate::exif::constants::{compression, orientation, resolution_unit};

/// Converts an Orientation tag value to its human-readable description
pub fn orientation_code_to_name(orientation_code: u32) -> &'static str {
    match orientation_code {
        code if code == orientation::TOP_LEFT as u32 => "Normal",
        code if code == orientation::TOP_RIGHT as u32 => "Mirrored horizontally",
        code if code == orientation::BOTTOM_RIGHT as u32 => "Rotated 180",
        code if code == orientation::BOTTOM_LEFT as u32 => "Mirrored vertically",
        code if code == orientation::LEFT_TOP as u32 => "Mirrored and rotated 270 CW",
        code if code == orientation::RIGHT_TOP as u32 => "Rotated 90 CW",
        code if code == orientation::RIGHT_BOTTOM as u32 => "Mirrored and rotated 90 CW",
        code if code == orientation::LEFT_BOTTOM as u32 => "Rotated 270 CW",
        _ => "Unknown",
    }
}

/// Converts a ResolutionUnit tag value to its human-readable description
pub fn resolution_unit_code_to_name(unit_code: u32) -> &'static str {
    match unit_code {
        code if code == resolution_unit::NONE as u32 => "No units",
        code if code == resolution_unit::INCH as u32 => "Inches",
        code if code == resolution_unit::CENTIMETER as u32 => "Centimeters",
        _ => "Unknown",
    }
}

/// Converts a Compression tag value to its human-readable description
pub fn compression_code_to_name(compression_code: u32) -> &'static str {
    match compression_code {
        code if code == compression::NONE as u32 => "Uncompressed",
        code if code == compression::JPEG_OLD as u32 => "JPEG (old-style, thumbnail)",
        code if code == compression::JPEG as u32 => "JPEG",
        _ => "Unknown",
    }
}
