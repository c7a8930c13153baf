//! Image File Directory (IFD) structures and parsing
//!
//! An IFD is a 2-byte entry count, a run of fixed 12-byte entry records,
//! and a 4-byte offset to the next directory in the chain (0 = none).
//! All offsets stored inside entries are relative to the TIFF header, not
//! to the directory that contains them.

use log::{debug, trace};

use crate::exif::constants::field_types;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::tags;
use crate::exif::tags::IfdKind;
use crate::io::segment_reader::SegmentReader;

/// Size of one directory entry record in bytes
pub const ENTRY_SIZE: usize = 12;

/// Represents one entry in an Image File Directory
///
/// Each entry describes one tagged value using a tag code, a field type,
/// an element count, and 4 raw bytes that hold either the value itself or
/// an offset to it, depending on the encoded size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tag code
    pub tag: u16,
    /// Field type code
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Inline value bytes, or an offset when the value does not fit
    pub raw_value: [u8; 4],
}

impl DirectoryEntry {
    /// Get the size in bytes of a single value of this entry's type
    pub fn element_size(&self) -> usize {
        match self.field_type {
            field_types::BYTE | field_types::ASCII
            | field_types::SBYTE | field_types::UNDEFINED => 1,
            field_types::SHORT | field_types::SSHORT => 2,
            field_types::LONG | field_types::SLONG | field_types::FLOAT => 4,
            field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => 8,
            _ => {
                debug!("Unknown field type: {}, assuming 1 byte", self.field_type);
                1
            }
        }
    }

    /// Get the total byte size of this entry's value
    pub fn value_size(&self) -> usize {
        self.element_size() * self.count as usize
    }

    /// Determines if the value is stored in the entry's own 4 bytes
    /// rather than at an offset
    pub fn is_value_inline(&self) -> bool {
        self.value_size() <= 4
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self, kind: IfdKind) -> String {
        format!("Tag: {} ({}), Type: {} ({}), Count: {}",
                self.tag, tags::get_tag_name(kind, self.tag),
                self.field_type, tags::get_type_name(self.field_type),
                self.count)
    }
}

/// One parsed directory: its entries and the link to the next one
#[derive(Debug, Clone)]
pub struct IfdDirectory {
    /// Entries in declaration order
    pub entries: Vec<DirectoryEntry>,
    /// Offset of this directory, relative to the TIFF header
    pub offset: u32,
    /// Offset of the next directory in the chain, if any
    pub next_offset: Option<u32>,
}

impl IfdDirectory {
    /// Parses one directory's entry table.
    ///
    /// Directory integrity is atomic: a declared entry count that would
    /// read past the end of the segment fails the whole directory with
    /// `Truncated` instead of yielding a partial entry list.
    ///
    /// # Arguments
    /// * `reader` - Reader over the whole segment
    /// * `offset` - Directory offset, relative to the TIFF header
    /// * `base_offset` - Byte position of the TIFF header in the segment
    pub fn parse(reader: &SegmentReader, offset: u32, base_offset: u32) -> ExifResult<Self> {
        let dir_start = base_offset as usize + offset as usize;

        let entry_count = match reader.read_u16(dir_start) {
            Ok(count) => count as usize,
            Err(_) => {
                return Err(ExifError::Truncated {
                    offset,
                    needed: 2,
                    available: reader.len().saturating_sub(dir_start),
                })
            }
        };

        // Entry table plus the trailing next-directory offset
        let needed = 2 + ENTRY_SIZE * entry_count + 4;
        let available = reader.len().saturating_sub(dir_start);
        if needed > available {
            return Err(ExifError::Truncated { offset, needed, available });
        }

        debug!("Parsing IFD at base+{}: {} entries", offset, entry_count);

        let mut entries = Vec::with_capacity(entry_count);
        for i in 0..entry_count {
            let pos = dir_start + 2 + ENTRY_SIZE * i;

            let mut raw_value = [0u8; 4];
            raw_value.copy_from_slice(reader.read_bytes(pos + 8, 4)?);

            let entry = DirectoryEntry {
                tag: reader.read_u16(pos)?,
                field_type: reader.read_u16(pos + 2)?,
                count: reader.read_u32(pos + 4)?,
                raw_value,
            };

            trace!("Entry {}: tag={}, type={}, count={}",
                   i, entry.tag, entry.field_type, entry.count);

            entries.push(entry);
        }

        let next = reader.read_u32(dir_start + 2 + ENTRY_SIZE * entry_count)?;
        let next_offset = if next == 0 { None } else { Some(next) };

        Ok(IfdDirectory { entries, offset, next_offset })
    }

    /// Gets the number of entries in this directory
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
