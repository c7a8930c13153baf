//! Tests for the tag dictionary

extern crate std;

use crate::exif::tags::{self, IfdKind};

#[test]
fn test_primary_tag_names() {
    std::assert_eq!(tags::get_tag_name(IfdKind::Primary, 274), "Orientation");
    std::assert_eq!(tags::get_tag_name(IfdKind::Primary, 34665), "ExifIFDPointer");
}

#[test]
fn test_tag_names_are_scoped_per_directory_kind() {
    // Tag code 1 means different things in different directories
    std::assert_eq!(tags::get_tag_name(IfdKind::Gps, 1), "GPSLatitudeRef");
    std::assert_eq!(tags::get_tag_name(IfdKind::Interop, 1), "InteroperabilityIndex");
    std::assert_eq!(tags::get_tag_name(IfdKind::Primary, 1), "Unknown tag 0x0001");
}

#[test]
fn test_unknown_tag_synthesizes_name() {
    std::assert_eq!(tags::get_tag_name(IfdKind::Primary, 0xBEEF), "Unknown tag 0xBEEF");
}

#[test]
fn test_type_names() {
    std::assert_eq!(tags::get_type_name(3), "SHORT");
    std::assert_eq!(tags::get_type_name(5), "RATIONAL");
    std::assert_eq!(tags::get_type_name(10), "SRATIONAL");
    std::assert_eq!(tags::get_type_name(99), "Unknown-99");
}

#[test]
fn test_type_hints() {
    std::assert_eq!(tags::get_type_hint(IfdKind::Primary, 274).as_deref(), Some("SHORT"));
    std::assert_eq!(tags::get_type_hint(IfdKind::Gps, 2).as_deref(), Some("RATIONAL"));
    std::assert_eq!(tags::get_type_hint(IfdKind::Primary, 0xBEEF), None);
}

#[test]
fn test_marker_names() {
    std::assert_eq!(tags::get_marker_name(0xFFE1), "APP1 (Exif/XMP)");
    std::assert_eq!(tags::get_marker_name(0xFF77), "Unknown marker 0xFF77");
}

#[test]
fn test_pointer_targets() {
    std::assert_eq!(tags::pointer_target(34665), Some(IfdKind::Exif));
    std::assert_eq!(tags::pointer_target(34853), Some(IfdKind::Gps));
    std::assert_eq!(tags::pointer_target(40965), Some(IfdKind::Interop));
    std::assert_eq!(tags::pointer_target(274), None);
}
