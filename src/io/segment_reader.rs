//! Random-access reader over one Exif segment
//!
//! IFD entries reference arbitrary offsets for indirect values and nested
//! directories, so the reader is stateless: every read names its offset
//! explicitly and is bounds-checked against the backing buffer.

use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

/// Endian-aware reader over a borrowed segment buffer
pub struct SegmentReader<'a> {
    /// Backing segment bytes
    data: &'a [u8],
    /// Byte order detected from the TIFF header
    byte_order: ByteOrder,
    /// Strategy for multi-byte reads
    handler: Box<dyn ByteOrderHandler>,
}

impl<'a> SegmentReader<'a> {
    /// Creates a reader over `data` using the given byte order
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        SegmentReader {
            data,
            byte_order,
            handler: byte_order.create_handler(),
        }
    }

    /// Returns the byte order this reader was constructed with
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Returns the length of the backing buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the backing buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads a single byte at the given offset
    pub fn read_u8(&self, offset: usize) -> ExifResult<u8> {
        self.read_bytes(offset, 1).map(|b| b[0])
    }

    /// Reads a single signed byte at the given offset
    pub fn read_i8(&self, offset: usize) -> ExifResult<i8> {
        self.read_u8(offset).map(|b| b as i8)
    }

    /// Reads a u16 at the given offset
    pub fn read_u16(&self, offset: usize) -> ExifResult<u16> {
        self.handler.read_u16(self.data, offset)
    }

    /// Reads a u32 at the given offset
    pub fn read_u32(&self, offset: usize) -> ExifResult<u32> {
        self.handler.read_u32(self.data, offset)
    }

    /// Reads an i16 at the given offset
    pub fn read_i16(&self, offset: usize) -> ExifResult<i16> {
        self.handler.read_i16(self.data, offset)
    }

    /// Reads an i32 at the given offset
    pub fn read_i32(&self, offset: usize) -> ExifResult<i32> {
        self.handler.read_i32(self.data, offset)
    }

    /// Reads an f32 at the given offset
    pub fn read_f32(&self, offset: usize) -> ExifResult<f32> {
        self.handler.read_f32(self.data, offset)
    }

    /// Reads an f64 at the given offset
    pub fn read_f64(&self, offset: usize) -> ExifResult<f64> {
        self.handler.read_f64(self.data, offset)
    }

    /// Reads an unsigned rational (numerator, denominator) at the given offset
    pub fn read_rational(&self, offset: usize) -> ExifResult<(u32, u32)> {
        self.handler.read_rational(self.data, offset)
    }

    /// Reads a signed rational (numerator, denominator) at the given offset
    pub fn read_srational(&self, offset: usize) -> ExifResult<(i32, i32)> {
        self.handler.read_srational(self.data, offset)
    }

    /// Borrows `length` raw bytes starting at the given offset
    pub fn read_bytes(&self, offset: usize, length: usize) -> ExifResult<&'a [u8]> {
        let fits = offset
            .checked_add(length)
            .map_or(false, |end| end <= self.data.len());

        if fits {
            Ok(&self.data[offset..offset + length])
        } else {
            Err(ExifError::OutOfBounds {
                offset,
                length,
                buffer_len: self.data.len(),
            })
        }
    }
}
