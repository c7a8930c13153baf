//! Tests for the value decoding module

extern crate std;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use crate::exif::directory::DirectoryEntry;
use crate::exif::errors::ExifError;
use crate::exif::value::{decode_entry, ExifValue, Rational};
use crate::io::byte_order::ByteOrder;
use crate::io::segment_reader::SegmentReader;

fn entry(tag: u16, field_type: u16, count: u32, raw: [u8; 4]) -> DirectoryEntry {
    DirectoryEntry { tag, field_type, count, raw_value: raw }
}

#[test]
fn test_inline_short_decodes_from_entry_bytes() {
    // Total size 2 <= 4: value comes from the inline field, the segment
    // buffer is never consulted
    let buffer = [0u8; 4];
    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);

    let e = entry(274, 3, 1, [0, 6, 0, 0]);
    std::assert!(e.is_value_inline());

    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Short(vec![6]));
}

#[test]
fn test_inline_short_respects_byte_order() {
    let buffer = [0u8; 4];
    let reader = SegmentReader::new(&buffer, ByteOrder::LittleEndian);

    let e = entry(274, 3, 1, [6, 0, 0, 0]);
    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Short(vec![6]));
}

#[test]
fn test_long_pair_is_fetched_from_offset() {
    // Total size 8 > 4: the inline field is an offset relative to the base
    let mut buffer = vec![0u8; 8];
    buffer.write_u32::<BigEndian>(100).unwrap();
    buffer.write_u32::<BigEndian>(200).unwrap();

    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);

    let e = entry(273, 4, 2, 8u32.to_be_bytes());
    std::assert!(!e.is_value_inline());

    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Long(vec![100, 200]));
}

#[test]
fn test_rational_round_trip_exact_both_orders() {
    // (72, 1) encoded and decoded must stay the exact fraction 72/1
    let expected = ExifValue::Rational(vec![Rational { numerator: 72, denominator: 1 }]);

    let mut be = vec![0u8; 8];
    be.write_u32::<BigEndian>(72).unwrap();
    be.write_u32::<BigEndian>(1).unwrap();
    let reader = SegmentReader::new(&be, ByteOrder::BigEndian);
    let e = entry(282, 5, 1, 8u32.to_be_bytes());
    std::assert_eq!(decode_entry(&e, &reader, 0).unwrap(), expected);

    let mut le = vec![0u8; 8];
    le.write_u32::<LittleEndian>(72).unwrap();
    le.write_u32::<LittleEndian>(1).unwrap();
    let reader = SegmentReader::new(&le, ByteOrder::LittleEndian);
    let e = entry(282, 5, 1, 8u32.to_le_bytes());
    std::assert_eq!(decode_entry(&e, &reader, 0).unwrap(), expected);
}

#[test]
fn test_zero_denominator_is_invalid_rational() {
    let mut buffer = vec![0u8; 8];
    buffer.write_u32::<BigEndian>(72).unwrap();
    buffer.write_u32::<BigEndian>(0).unwrap();

    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);
    let e = entry(282, 5, 1, 8u32.to_be_bytes());

    std::assert!(matches!(
        decode_entry(&e, &reader, 0),
        Err(ExifError::InvalidRational)
    ));
}

#[test]
fn test_ascii_strips_trailing_nul() {
    let mut buffer = vec![0u8; 8];
    buffer.extend_from_slice(b"Hello\x00");

    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);
    // Count includes the terminator
    let e = entry(305, 2, 6, 8u32.to_be_bytes());

    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Ascii("Hello".to_string()));
}

#[test]
fn test_short_ascii_decodes_inline() {
    let buffer = [0u8; 4];
    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);

    let e = entry(305, 2, 3, [b'N', b'o', 0, 0]);
    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Ascii("No".to_string()));
}

#[test]
fn test_zero_count_is_empty_value() {
    let buffer = [0u8; 4];
    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);

    let e = entry(274, 3, 0, [0, 0, 0, 0]);
    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Short(vec![]));
}

#[test]
fn test_unknown_type_code_yields_opaque_bytes() {
    let buffer = [0u8; 4];
    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);

    let e = entry(700, 99, 3, [0xAB, 0xCD, 0xEF, 0]);
    let value = decode_entry(&e, &reader, 0).unwrap();
    std::assert_eq!(value, ExifValue::Undefined(vec![0xAB, 0xCD, 0xEF]));
}

#[test]
fn test_offset_past_buffer_end_is_out_of_bounds() {
    let buffer = [0u8; 16];
    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);

    let e = entry(273, 4, 2, 1000u32.to_be_bytes());
    std::assert!(matches!(
        decode_entry(&e, &reader, 0),
        Err(ExifError::OutOfBounds { .. })
    ));
}

#[test]
fn test_srational_keeps_sign() {
    let mut buffer = vec![0u8; 8];
    buffer.write_i32::<BigEndian>(-1).unwrap();
    buffer.write_i32::<BigEndian>(3).unwrap();

    let reader = SegmentReader::new(&buffer, ByteOrder::BigEndian);
    let e = entry(37380, 10, 1, 8u32.to_be_bytes());

    match decode_entry(&e, &reader, 0).unwrap() {
        ExifValue::SRational(v) => {
            std::assert_eq!(v[0].numerator, -1);
            std::assert_eq!(v[0].denominator, 3);
        }
        other => std::panic!("expected SRational, got {:?}", other),
    }
}

#[test]
fn test_value_display_forms() {
    std::assert_eq!(ExifValue::Short(vec![6]).to_string(), "6");
    std::assert_eq!(ExifValue::Long(vec![1, 2]).to_string(), "[1, 2]");
    std::assert_eq!(
        ExifValue::Rational(vec![Rational { numerator: 72, denominator: 1 }]).to_string(),
        "72/1"
    );
    std::assert_eq!(ExifValue::Ascii("Hi".to_string()).to_string(), "\"Hi\"");
}
