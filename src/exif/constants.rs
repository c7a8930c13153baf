//! Exif format constants
//!
//! This module defines constants used throughout the Exif processing code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// Exif segment and TIFF header constants
pub mod header {
    /// "Exif\0\0" identifier that opens an APP1 Exif segment
    pub const EXIF_ID: [u8; 6] = [0x45, 0x78, 0x69, 0x66, 0x00, 0x00];

    /// Byte position of the TIFF header inside the segment.
    /// Every directory and value offset is relative to this base.
    pub const TIFF_HEADER_OFFSET: u32 = 6;

    /// "II" byte order code for little-endian
    pub const LITTLE_ENDIAN_CODE: u16 = 0x4949;

    /// "MM" byte order code for big-endian
    pub const BIG_ENDIAN_CODE: u16 = 0x4D4D;

    /// Fixed magic value following the byte order code (42)
    pub const TIFF_MAGIC: u16 = 0x002A;
}

/// Field types as defined in the TIFF/Exif spec
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// Exif tags the engine treats specially
pub mod tags {
    // Pointer tags: the decoded LONG is an offset to a nested directory
    pub const EXIF_IFD_POINTER: u16 = 34665;     // Exif private directory
    pub const GPS_IFD_POINTER: u16 = 34853;      // GPS info directory
    pub const INTEROP_IFD_POINTER: u16 = 40965;  // Interoperability directory

    // Tags with enum-coded values that get a readable description
    pub const ORIENTATION: u16 = 274;            // Image orientation
    pub const RESOLUTION_UNIT: u16 = 296;        // Unit for X/YResolution
    pub const COMPRESSION: u16 = 259;            // Compression scheme
}

/// JPEG marker codes (full 2-byte values, always big-endian in the file)
pub mod markers {
    pub const SOI: u16 = 0xFFD8;   // Start of image
    pub const EOI: u16 = 0xFFD9;   // End of image
    pub const SOS: u16 = 0xFFDA;   // Start of scan
    pub const APP0: u16 = 0xFFE0;  // JFIF
    pub const APP1: u16 = 0xFFE1;  // Exif/XMP
}

/// Traversal limits
pub mod limits {
    /// Maximum nesting depth for pointer-linked sub-directories.
    /// The format never legitimately nests deeper than
    /// IFD0 -> Exif IFD -> Interop IFD.
    pub const MAX_IFD_DEPTH: usize = 4;

    /// Maximum number of directories in the top-level next-IFD chain
    pub const MAX_IFD_CHAIN: usize = 8;
}

/// Orientation values
pub mod orientation {
    pub const TOP_LEFT: u16 = 1;          // 0th row = top, 0th column = left side
    pub const TOP_RIGHT: u16 = 2;         // 0th row = top, 0th column = right side
    pub const BOTTOM_RIGHT: u16 = 3;      // 0th row = bottom, 0th column = right side
    pub const BOTTOM_LEFT: u16 = 4;       // 0th row = bottom, 0th column = left side
    pub const LEFT_TOP: u16 = 5;          // 0th row = left side, 0th column = top
    pub const RIGHT_TOP: u16 = 6;         // 0th row = right side, 0th column = top
    pub const RIGHT_BOTTOM: u16 = 7;      // 0th row = right side, 0th column = bottom
    pub const LEFT_BOTTOM: u16 = 8;       // 0th row = left side, 0th column = bottom
}

/// Resolution unit values
pub mod resolution_unit {
    pub const NONE: u16 = 1;              // No meaningful units
    pub const INCH: u16 = 2;              // Inches (default)
    pub const CENTIMETER: u16 = 3;        // Centimeters
}

/// Compression values seen in Exif primary/thumbnail directories
pub mod compression {
    pub const NONE: u16 = 1;              // No compression
    pub const JPEG_OLD: u16 = 6;          // Old JPEG (used for Exif thumbnails)
    pub const JPEG: u16 = 7;              // JPEG compression
}
