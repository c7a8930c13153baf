//! Custom error types for Exif processing

use std::fmt;
use std::io;

/// Exif-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// Missing "Exif\0\0" identifier
    NotExif,
    /// Invalid byte order marker
    UnknownByteOrder(u16),
    /// TIFF header magic is not 0x002A
    InvalidHeader(u16),
    /// Directory declared more data than the segment holds
    Truncated { offset: u32, needed: usize, available: usize },
    /// Read past the end of the segment buffer
    OutOfBounds { offset: usize, length: usize, buffer_len: usize },
    /// Rational value with a zero denominator
    InvalidRational,
    /// Pointer chain nested deeper than the recursion bound
    MaxDepthExceeded(usize),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::NotExif => write!(f, "Missing Exif identifier"),
            ExifError::UnknownByteOrder(v) => write!(f, "Unknown byte order marker: {:#06x}", v),
            ExifError::InvalidHeader(v) => write!(f, "Invalid TIFF header magic: {:#06x}", v),
            ExifError::Truncated { offset, needed, available } => {
                write!(f, "Truncated directory at offset {}: needs {} bytes, {} available",
                       offset, needed, available)
            }
            ExifError::OutOfBounds { offset, length, buffer_len } => {
                write!(f, "Read of {} bytes at offset {} exceeds segment length {}",
                       length, offset, buffer_len)
            }
            ExifError::InvalidRational => write!(f, "Rational value with zero denominator"),
            ExifError::MaxDepthExceeded(depth) => {
                write!(f, "IFD pointer chain exceeds maximum depth {}", depth)
            }
            ExifError::GenericError(msg) => write!(f, "Exif error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

/// Result type for Exif operations
pub type ExifResult<T> = Result<T, ExifError>;

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}
