//! Exif segment decoding module
//!
//! This module provides structures and functions for decoding the
//! TIFF-style Exif metadata carried in a JPEG APP1 segment.

pub mod errors;
pub mod directory;
pub(crate) mod types;
pub mod reader;
mod tests;
pub mod tags;
pub(crate) mod constants;
pub mod value;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use directory::{DirectoryEntry, IfdDirectory};
pub use errors::{ExifError, ExifResult};
pub use reader::ExifReader;
pub use tags::{get_marker_name, get_tag_name, get_type_name, pointer_target, IfdKind};
pub use types::{EntryResult, ExifData, IfdResult};
pub use value::{ExifValue, Rational, SRational};
