//! Tests for the Exif decoding engine

extern crate std;

use crate::exif::errors::ExifError;
use crate::exif::reader::ExifReader;
use crate::exif::tags::IfdKind;
use crate::exif::tests::test_utils::{build_segment_be, build_segment_le, value_area_offset, EntrySpec};
use crate::exif::value::ExifValue;
use crate::io::byte_order::ByteOrder;

#[test]
fn test_minimal_big_endian_segment() {
    // "Exif\0\0" + "MM" + 0x002A + offset 8 + one Orientation entry
    let segment = build_segment_be(
        &[EntrySpec { tag: 0x0112, field_type: 3, count: 1, raw: [0, 6, 0, 0] }],
        0,
        &[],
    );

    let exif = ExifReader::new().decode(&segment).unwrap();

    std::assert_eq!(exif.byte_order, ByteOrder::BigEndian);
    std::assert_eq!(exif.first_ifd_offset, 8);
    std::assert_eq!(exif.ifd_count(), 1);

    let entry = &exif.ifds[0].entries[0];
    std::assert_eq!(entry.tag_name, "Orientation");
    std::assert_eq!(entry.type_name, "SHORT");
    std::assert_eq!(entry.value, ExifValue::Short(vec![6]));
}

#[test]
fn test_minimal_little_endian_segment() {
    let segment = build_segment_le(
        &[EntrySpec { tag: 0x0112, field_type: 3, count: 1, raw: [6, 0, 0, 0] }],
        0,
        &[],
    );

    let exif = ExifReader::new().decode(&segment).unwrap();

    std::assert_eq!(exif.byte_order, ByteOrder::LittleEndian);
    std::assert_eq!(exif.ifds[0].entries[0].value, ExifValue::Short(vec![6]));
}

#[test]
fn test_missing_identifier_is_not_exif() {
    let result = ExifReader::new().decode(b"JFIF\x00\x00whatever");
    std::assert!(matches!(result, Err(ExifError::NotExif)));
}

#[test]
fn test_unknown_byte_order_code() {
    let mut segment = build_segment_be(&[], 0, &[]);
    segment[6] = 0x4D; // "MI", neither II nor MM
    segment[7] = 0x49;

    let result = ExifReader::new().decode(&segment);
    std::assert!(matches!(result, Err(ExifError::UnknownByteOrder(0x4D49))));
}

#[test]
fn test_wrong_magic_is_invalid_header() {
    let mut segment = build_segment_be(&[], 0, &[]);
    segment[9] = 0x2B; // 0x002B instead of 0x002A

    let result = ExifReader::new().decode(&segment);
    std::assert!(matches!(result, Err(ExifError::InvalidHeader(0x002B))));
}

#[test]
fn test_unknown_tag_gets_synthesized_name() {
    let segment = build_segment_be(
        &[EntrySpec { tag: 0xBEEF, field_type: 3, count: 1, raw: [0, 1, 0, 0] }],
        0,
        &[],
    );

    let exif = ExifReader::new().decode(&segment).unwrap();
    let entry = &exif.ifds[0].entries[0];

    std::assert_eq!(entry.tag_name, "Unknown tag 0xBEEF");
    std::assert_eq!(entry.value, ExifValue::Short(vec![1]));
}

#[test]
fn test_undecodable_entry_does_not_abort_directory() {
    // First entry points its LONG array past the buffer end, second is fine
    let segment = build_segment_be(
        &[
            EntrySpec { tag: 273, field_type: 4, count: 4, raw: 9000u32.to_be_bytes() },
            EntrySpec { tag: 0x0112, field_type: 3, count: 1, raw: [0, 6, 0, 0] },
        ],
        0,
        &[],
    );

    let exif = ExifReader::new().decode(&segment).unwrap();
    let entries = &exif.ifds[0].entries;

    std::assert!(matches!(entries[0].value, ExifValue::Undecodable(_)));
    std::assert_eq!(entries[1].value, ExifValue::Short(vec![6]));
}

#[test]
fn test_exif_pointer_parses_nested_directory() {
    // IFD0 with an ExifIFDPointer, nested directory in the value area
    let nested_offset = value_area_offset(1);
    let segment = {
        let mut buffer = build_segment_be(
            &[EntrySpec {
                tag: 34665,
                field_type: 4,
                count: 1,
                raw: nested_offset.to_be_bytes(),
            }],
            0,
            &[],
        );

        // Nested Exif IFD: one DateTimeOriginal entry with an inline value
        buffer.extend_from_slice(&[0, 1]);                   // entry count
        buffer.extend_from_slice(&[0x90, 0x03]);             // tag 36867
        buffer.extend_from_slice(&[0, 2]);                   // type ASCII
        buffer.extend_from_slice(&[0, 0, 0, 3]);             // count 3
        buffer.extend_from_slice(b"ok\x00\x00");             // inline text
        buffer.extend_from_slice(&[0, 0, 0, 0]);             // next offset
        buffer
    };

    let exif = ExifReader::new().decode(&segment).unwrap();
    let pointer_entry = &exif.ifds[0].entries[0];

    std::assert_eq!(pointer_entry.tag_name, "ExifIFDPointer");
    std::assert!(pointer_entry.nested_error.is_none());

    let nested = pointer_entry.nested.as_ref().unwrap();
    std::assert_eq!(nested.kind, IfdKind::Exif);
    std::assert_eq!(nested.entry_count(), 1);
    std::assert_eq!(nested.entries[0].tag_name, "DateTimeOriginal");
    std::assert_eq!(nested.entries[0].value, ExifValue::Ascii("ok".to_string()));
}

#[test]
fn test_pointer_cycle_terminates_at_depth_bound() {
    // The Exif pointer points back at IFD0 itself: an infinite chain
    // without the depth cap
    let segment = build_segment_be(
        &[EntrySpec { tag: 34665, field_type: 4, count: 1, raw: 8u32.to_be_bytes() }],
        0,
        &[],
    );

    let exif = ExifReader::new().decode(&segment).unwrap();

    let mut depth = 0;
    let mut entry = &exif.ifds[0].entries[0];
    while let Some(nested) = entry.nested.as_ref() {
        depth += 1;
        std::assert!(depth <= 4, "cycle not bounded");
        entry = &nested.entries[0];
    }

    let reason = entry.nested_error.as_ref().unwrap();
    std::assert!(reason.contains("maximum depth"));
}

#[test]
fn test_next_ifd_chain_produces_siblings() {
    let second_ifd_offset = value_area_offset(1);
    let segment = {
        let mut buffer = build_segment_be(
            &[EntrySpec { tag: 0x0112, field_type: 3, count: 1, raw: [0, 1, 0, 0] }],
            second_ifd_offset,
            &[],
        );

        // IFD1 (thumbnail directory): Compression = 6 (old-style JPEG)
        buffer.extend_from_slice(&[0, 1]);                   // entry count
        buffer.extend_from_slice(&[0x01, 0x03]);             // tag 259
        buffer.extend_from_slice(&[0, 3]);                   // type SHORT
        buffer.extend_from_slice(&[0, 0, 0, 1]);             // count 1
        buffer.extend_from_slice(&[0, 6, 0, 0]);             // inline value
        buffer.extend_from_slice(&[0, 0, 0, 0]);             // next offset
        buffer
    };

    let exif = ExifReader::new().decode(&segment).unwrap();

    std::assert_eq!(exif.ifd_count(), 2);
    std::assert_eq!(exif.ifds[0].index, 0);
    std::assert_eq!(exif.ifds[1].index, 1);
    std::assert_eq!(exif.ifds[1].entries[0].tag_name, "Compression");
}

#[test]
fn test_broken_chain_keeps_decoded_siblings() {
    // IFD0's next offset points far past the buffer: IFD1 is lost,
    // IFD0 survives
    let segment = build_segment_be(
        &[EntrySpec { tag: 0x0112, field_type: 3, count: 1, raw: [0, 1, 0, 0] }],
        4000,
        &[],
    );

    let exif = ExifReader::new().decode(&segment).unwrap();
    std::assert_eq!(exif.ifd_count(), 1);
}

#[test]
fn test_gps_pointer_resolves_names_in_gps_scope() {
    let nested_offset = value_area_offset(1);
    let segment = {
        let mut buffer = build_segment_be(
            &[EntrySpec {
                tag: 34853,
                field_type: 4,
                count: 1,
                raw: nested_offset.to_be_bytes(),
            }],
            0,
            &[],
        );

        // GPS IFD: GPSLatitudeRef = "N"
        buffer.extend_from_slice(&[0, 1]);                   // entry count
        buffer.extend_from_slice(&[0x00, 0x01]);             // tag 1
        buffer.extend_from_slice(&[0, 2]);                   // type ASCII
        buffer.extend_from_slice(&[0, 0, 0, 2]);             // count 2
        buffer.extend_from_slice(b"N\x00\x00\x00");          // inline text
        buffer.extend_from_slice(&[0, 0, 0, 0]);             // next offset
        buffer
    };

    let exif = ExifReader::new().decode(&segment).unwrap();
    let nested = exif.ifds[0].entries[0].nested.as_ref().unwrap();

    std::assert_eq!(nested.kind, IfdKind::Gps);
    // GPS tag 1 resolves against the GPS table, not the primary table
    std::assert_eq!(nested.entries[0].tag_name, "GPSLatitudeRef");
    std::assert_eq!(nested.entries[0].value, ExifValue::Ascii("N".to_string()));
}
