//! Type-driven decoding of directory entry values
//!
//! Every IFD entry carries a type code, a count, and 4 raw bytes that hold
//! either the value itself (when it fits) or an offset to it. This module
//! turns that triple into an `ExifValue`, dispatching exhaustively on the
//! known type codes with a catch-all opaque case for unknown ones.

use std::fmt;

use log::trace;

use crate::exif::constants::field_types;
use crate::exif::directory::DirectoryEntry;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::segment_reader::SegmentReader;
use crate::utils::string_utils;

/// An exact unsigned fraction (Exif RATIONAL)
///
/// Rationals are kept as numerator/denominator pairs, never collapsed to
/// floating point: the format defines them as exact ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// An exact signed fraction (Exif SRATIONAL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl fmt::Display for SRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A decoded directory entry value
#[derive(Debug, Clone, PartialEq)]
pub enum ExifValue {
    /// Type 1: 8-bit unsigned integers
    Byte(Vec<u8>),
    /// Type 2: NUL-terminated text, terminator stripped
    Ascii(String),
    /// Type 3: 16-bit unsigned integers
    Short(Vec<u16>),
    /// Type 4: 32-bit unsigned integers
    Long(Vec<u32>),
    /// Type 5: exact unsigned fractions
    Rational(Vec<Rational>),
    /// Type 6: 8-bit signed integers
    SByte(Vec<i8>),
    /// Type 7 and any unrecognized type code: opaque bytes
    Undefined(Vec<u8>),
    /// Type 8: 16-bit signed integers
    SShort(Vec<i16>),
    /// Type 9: 32-bit signed integers
    SLong(Vec<i32>),
    /// Type 10: exact signed fractions
    SRational(Vec<SRational>),
    /// Type 11: single precision floats
    Float(Vec<f32>),
    /// Type 12: double precision floats
    Double(Vec<f64>),
    /// Entry-local decode failure; decoding of the directory continues
    Undecodable(String),
}

impl ExifValue {
    /// Returns the first element as a u32 when the value is an unsigned
    /// integer type. Pointer tags are declared LONG count 1, but some
    /// writers use SHORT, so both are accepted.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            ExifValue::Long(v) => v.first().copied(),
            ExifValue::Short(v) => v.first().map(|&s| s as u32),
            ExifValue::Byte(v) => v.first().map(|&b| b as u32),
            _ => None,
        }
    }
}

/// Writes a sequence as a single scalar or a bracketed list
fn fmt_sequence<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    match items {
        [single] => write!(f, "{}", single),
        _ => {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "]")
        }
    }
}

impl fmt::Display for ExifValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifValue::Byte(v) => fmt_sequence(f, v),
            ExifValue::Ascii(s) => write!(f, "\"{}\"", s),
            ExifValue::Short(v) => fmt_sequence(f, v),
            ExifValue::Long(v) => fmt_sequence(f, v),
            ExifValue::Rational(v) => fmt_sequence(f, v),
            ExifValue::SByte(v) => fmt_sequence(f, v),
            ExifValue::Undefined(b) => write!(f, "{}", string_utils::preview_bytes(b)),
            ExifValue::SShort(v) => fmt_sequence(f, v),
            ExifValue::SLong(v) => fmt_sequence(f, v),
            ExifValue::SRational(v) => fmt_sequence(f, v),
            ExifValue::Float(v) => fmt_sequence(f, v),
            ExifValue::Double(v) => fmt_sequence(f, v),
            ExifValue::Undecodable(reason) => write!(f, "<undecodable: {}>", reason),
        }
    }
}

/// Decodes the value of one directory entry.
///
/// When the total value size fits in the entry's 4 inline bytes, the value
/// is decoded from those bytes directly; otherwise the inline field is an
/// offset relative to `base_offset` and the value bytes are fetched from
/// the segment buffer.
///
/// # Arguments
/// * `entry` - The directory entry to decode
/// * `reader` - Reader over the whole segment
/// * `base_offset` - Byte position of the TIFF header within the segment
///
/// # Returns
/// The decoded value, or an entry-local error (`OutOfBounds`,
/// `InvalidRational`, invalid text) the caller attaches to the entry
pub fn decode_entry(
    entry: &DirectoryEntry,
    reader: &SegmentReader,
    base_offset: u32,
) -> ExifResult<ExifValue> {
    let count = entry.count as usize;
    let total_size = entry.value_size();

    if entry.is_value_inline() {
        // Value lives in the entry's own 4 bytes
        let inline = SegmentReader::new(&entry.raw_value, reader.byte_order());
        decode_elements(&inline, 0, entry.field_type, count)
    } else {
        let inline = SegmentReader::new(&entry.raw_value, reader.byte_order());
        let offset = inline.read_u32(0)?;
        let start = base_offset as usize + offset as usize;

        trace!("Indirect value for tag {}: {} bytes at base+{}",
               entry.tag, total_size, offset);

        decode_elements(reader, start, entry.field_type, count)
    }
}

/// Decodes `count` elements of the given type starting at `start`
fn decode_elements(
    reader: &SegmentReader,
    start: usize,
    field_type: u16,
    count: usize,
) -> ExifResult<ExifValue> {
    match field_type {
        field_types::BYTE => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_u8(start + i)?);
            }
            Ok(ExifValue::Byte(values))
        }
        field_types::ASCII => {
            let mut buffer = reader.read_bytes(start, count)?.to_vec();
            // Count includes the NUL terminator by convention
            string_utils::trim_trailing_nulls(&mut buffer);
            match String::from_utf8(buffer) {
                Ok(s) => Ok(ExifValue::Ascii(s)),
                Err(e) => Err(ExifError::GenericError(format!("Invalid text value: {}", e))),
            }
        }
        field_types::SHORT => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_u16(start + 2 * i)?);
            }
            Ok(ExifValue::Short(values))
        }
        field_types::LONG => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_u32(start + 4 * i)?);
            }
            Ok(ExifValue::Long(values))
        }
        field_types::RATIONAL => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                let (numerator, denominator) = reader.read_rational(start + 8 * i)?;
                if denominator == 0 {
                    return Err(ExifError::InvalidRational);
                }
                values.push(Rational { numerator, denominator });
            }
            Ok(ExifValue::Rational(values))
        }
        field_types::SBYTE => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_i8(start + i)?);
            }
            Ok(ExifValue::SByte(values))
        }
        field_types::SSHORT => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_i16(start + 2 * i)?);
            }
            Ok(ExifValue::SShort(values))
        }
        field_types::SLONG => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_i32(start + 4 * i)?);
            }
            Ok(ExifValue::SLong(values))
        }
        field_types::SRATIONAL => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                let (numerator, denominator) = reader.read_srational(start + 8 * i)?;
                if denominator == 0 {
                    return Err(ExifError::InvalidRational);
                }
                values.push(SRational { numerator, denominator });
            }
            Ok(ExifValue::SRational(values))
        }
        field_types::FLOAT => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_f32(start + 4 * i)?);
            }
            Ok(ExifValue::Float(values))
        }
        field_types::DOUBLE => {
            let mut values = Vec::with_capacity(count);
            for i in 0..count {
                values.push(reader.read_f64(start + 8 * i)?);
            }
            Ok(ExifValue::Double(values))
        }
        // UNDEFINED and any future type code: surface the raw bytes
        _ => {
            let bytes = reader.read_bytes(start, count)?.to_vec();
            Ok(ExifValue::Undefined(bytes))
        }
    }
}
