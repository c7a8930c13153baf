//! Byte order handling for Exif segments
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading Exif data.
//!
//! Unlike a cursor-based reader, every read takes an explicit offset into
//! the segment buffer: IFD parsing jumps to arbitrary offsets for indirect
//! values and sub-directories, so there is no position state to keep.

use byteorder::{BigEndian, ByteOrder as ByteOrderExt, LittleEndian};

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};

/// Represents the byte order of an Exif segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the 2-byte code opening the TIFF header
    pub fn detect(code: u16) -> ExifResult<Self> {
        match code {
            header::LITTLE_ENDIAN_CODE => Ok(ByteOrder::LittleEndian), // "II" (Intel)
            header::BIG_ENDIAN_CODE => Ok(ByteOrder::BigEndian),       // "MM" (Motorola)
            _ => Err(ExifError::UnknownByteOrder(code)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Checks that `length` bytes starting at `offset` fit inside the buffer
fn check_bounds(buf: &[u8], offset: usize, length: usize) -> ExifResult<()> {
    let fits = offset
        .checked_add(length)
        .map_or(false, |end| end <= buf.len());

    if fits {
        Ok(())
    } else {
        Err(ExifError::OutOfBounds {
            offset,
            length,
            buffer_len: buf.len(),
        })
    }
}

/// Trait for byte order handling strategies
///
/// All reads are bounds-checked against the buffer and fail with
/// `OutOfBounds` instead of panicking.
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value at the given offset
    fn read_u16(&self, buf: &[u8], offset: usize) -> ExifResult<u16>;

    /// Read a u32 value at the given offset
    fn read_u32(&self, buf: &[u8], offset: usize) -> ExifResult<u32>;

    /// Read an i16 value at the given offset
    fn read_i16(&self, buf: &[u8], offset: usize) -> ExifResult<i16>;

    /// Read an i32 value at the given offset
    fn read_i32(&self, buf: &[u8], offset: usize) -> ExifResult<i32>;

    /// Read an f32 value at the given offset
    fn read_f32(&self, buf: &[u8], offset: usize) -> ExifResult<f32>;

    /// Read an f64 value at the given offset
    fn read_f64(&self, buf: &[u8], offset: usize) -> ExifResult<f64>;

    /// Read a rational value (two u32 values as numerator/denominator)
    fn read_rational(&self, buf: &[u8], offset: usize) -> ExifResult<(u32, u32)>;

    /// Read a signed rational value (two i32 values as numerator/denominator)
    fn read_srational(&self, buf: &[u8], offset: usize) -> ExifResult<(i32, i32)>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, buf: &[u8], offset: usize) -> ExifResult<u16> {
        check_bounds(buf, offset, 2)?;
        Ok(LittleEndian::read_u16(&buf[offset..offset + 2]))
    }

    fn read_u32(&self, buf: &[u8], offset: usize) -> ExifResult<u32> {
        check_bounds(buf, offset, 4)?;
        Ok(LittleEndian::read_u32(&buf[offset..offset + 4]))
    }

    fn read_i16(&self, buf: &[u8], offset: usize) -> ExifResult<i16> {
        check_bounds(buf, offset, 2)?;
        Ok(LittleEndian::read_i16(&buf[offset..offset + 2]))
    }

    fn read_i32(&self, buf: &[u8], offset: usize) -> ExifResult<i32> {
        check_bounds(buf, offset, 4)?;
        Ok(LittleEndian::read_i32(&buf[offset..offset + 4]))
    }

    fn read_f32(&self, buf: &[u8], offset: usize) -> ExifResult<f32> {
        check_bounds(buf, offset, 4)?;
        Ok(LittleEndian::read_f32(&buf[offset..offset + 4]))
    }

    fn read_f64(&self, buf: &[u8], offset: usize) -> ExifResult<f64> {
        check_bounds(buf, offset, 8)?;
        Ok(LittleEndian::read_f64(&buf[offset..offset + 8]))
    }

    fn read_rational(&self, buf: &[u8], offset: usize) -> ExifResult<(u32, u32)> {
        let numerator = self.read_u32(buf, offset)?;
        let denominator = self.read_u32(buf, offset + 4)?;
        Ok((numerator, denominator))
    }

    fn read_srational(&self, buf: &[u8], offset: usize) -> ExifResult<(i32, i32)> {
        let numerator = self.read_i32(buf, offset)?;
        let denominator = self.read_i32(buf, offset + 4)?;
        Ok((numerator, denominator))
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, buf: &[u8], offset: usize) -> ExifResult<u16> {
        check_bounds(buf, offset, 2)?;
        Ok(BigEndian::read_u16(&buf[offset..offset + 2]))
    }

    fn read_u32(&self, buf: &[u8], offset: usize) -> ExifResult<u32> {
        check_bounds(buf, offset, 4)?;
        Ok(BigEndian::read_u32(&buf[offset..offset + 4]))
    }

    fn read_i16(&self, buf: &[u8], offset: usize) -> ExifResult<i16> {
        check_bounds(buf, offset, 2)?;
        Ok(BigEndian::read_i16(&buf[offset..offset + 2]))
    }

    fn read_i32(&self, buf: &[u8], offset: usize) -> ExifResult<i32> {
        check_bounds(buf, offset, 4)?;
        Ok(BigEndian::read_i32(&buf[offset..offset + 4]))
    }

    fn read_f32(&self, buf: &[u8], offset: usize) -> ExifResult<f32> {
        check_bounds(buf, offset, 4)?;
        Ok(BigEndian::read_f32(&buf[offset..offset + 4]))
    }

    fn read_f64(&self, buf: &[u8], offset: usize) -> ExifResult<f64> {
        check_bounds(buf, offset, 8)?;
        Ok(BigEndian::read_f64(&buf[offset..offset + 8]))
    }

    fn read_rational(&self, buf: &[u8], offset: usize) -> ExifResult<(u32, u32)> {
        let numerator = self.read_u32(buf, offset)?;
        let denominator = self.read_u32(buf, offset + 4)?;
        Ok((numerator, denominator))
    }

    fn read_srational(&self, buf: &[u8], offset: usize) -> ExifResult<(i32, i32)> {
        let numerator = self.read_i32(buf, offset)?;
        let denominator = self.read_i32(buf, offset + 4)?;
        Ok((numerator, denominator))
    }
}
