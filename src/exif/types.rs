//! Core Exif result structures
//!
//! Everything here is built during one decode call and immutable
//! afterwards. Nested directories reached through pointer tags hang off
//! the entry that pointed at them; the top-level next-IFD chain produces
//! siblings in `ExifData::ifds`.

use std::fmt;

use crate::exif::constants::tags;
use crate::exif::tags::IfdKind;
use crate::exif::value::ExifValue;
use crate::io::byte_order::ByteOrder;
use crate::utils::exif_code_translators;

/// One decoded directory entry with resolved names
#[derive(Debug, Clone)]
pub struct EntryResult {
    /// Tag code
    pub tag: u16,
    /// Resolved tag name, or a synthesized "Unknown tag 0xHHHH"
    pub tag_name: String,
    /// Field type code
    pub field_type: u16,
    /// Resolved field type name
    pub type_name: String,
    /// Number of values
    pub count: u32,
    /// Decoded value (Undecodable on an entry-local failure)
    pub value: ExifValue,
    /// Sub-directory parsed from a pointer tag
    pub nested: Option<IfdResult>,
    /// Why following the pointer failed, when it did
    pub nested_error: Option<String>,
}

/// One decoded directory
#[derive(Debug, Clone)]
pub struct IfdResult {
    /// Which tag table this directory resolves against
    pub kind: IfdKind,
    /// Position in the top-level chain (nested directories keep the
    /// index of the directory that pointed at them)
    pub index: usize,
    /// Offset of this directory, relative to the TIFF header
    pub offset: u32,
    /// Decoded entries in declaration order
    pub entries: Vec<EntryResult>,
}

impl IfdResult {
    /// Gets the number of entries in this directory
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Finds an entry by tag code
    pub fn get_entry(&self, tag: u16) -> Option<&EntryResult> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// Counts entries in this directory and every nested one
    pub fn deep_entry_count(&self) -> usize {
        self.entries.len()
            + self.entries.iter()
                .filter_map(|e| e.nested.as_ref())
                .map(|ifd| ifd.deep_entry_count())
                .sum::<usize>()
    }

    /// Writes this directory (and nested ones) at the given indent level
    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);

        if self.kind == IfdKind::Primary {
            writeln!(f, "{}IFD #{} (offset: {})", pad, self.index, self.offset)?;
        } else {
            writeln!(f, "{}{} (offset: {})", pad, self.kind.name(), self.offset)?;
        }
        writeln!(f, "{}  Number of entries: {}", pad, self.entries.len())?;

        for entry in &self.entries {
            // Enum-coded tags get a readable description next to the value
            let annotation = match (self.kind, entry.tag) {
                (IfdKind::Primary, tags::ORIENTATION) => entry.value.as_u32()
                    .map(|v| format!(" ({})", exif_code_translators::orientation_code_to_name(v))),
                (IfdKind::Primary, tags::RESOLUTION_UNIT) => entry.value.as_u32()
                    .map(|v| format!(" ({})", exif_code_translators::resolution_unit_code_to_name(v))),
                (IfdKind::Primary, tags::COMPRESSION) => entry.value.as_u32()
                    .map(|v| format!(" ({})", exif_code_translators::compression_code_to_name(v))),
                _ => None,
            };

            writeln!(f, "{}  {} ({}): {}{}",
                     pad, entry.tag_name, entry.type_name, entry.value,
                     annotation.unwrap_or_default())?;

            if let Some(nested) = &entry.nested {
                nested.write_indented(f, indent + 2)?;
            }
            if let Some(reason) = &entry.nested_error {
                writeln!(f, "{}    (pointer not followed: {})", pad, reason)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for IfdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Represents one fully decoded Exif segment
#[derive(Debug, Clone)]
pub struct ExifData {
    /// Byte order used by every multi-byte value in the segment
    pub byte_order: ByteOrder,
    /// Offset of IFD0, relative to the TIFF header
    pub first_ifd_offset: u32,
    /// Top-level directory chain (IFD0, then IFD1 etc.)
    pub ifds: Vec<IfdResult>,
}

impl ExifData {
    /// Creates a new empty Exif result
    pub fn new(byte_order: ByteOrder, first_ifd_offset: u32) -> Self {
        ExifData {
            byte_order,
            first_ifd_offset,
            ifds: Vec::new(),
        }
    }

    /// Byte position of the TIFF header within the segment; every
    /// directory and value offset is relative to this base
    pub fn tiff_header_offset(&self) -> u32 {
        crate::exif::constants::header::TIFF_HEADER_OFFSET
    }

    /// Returns the main (first) IFD if available
    pub fn main_ifd(&self) -> Option<&IfdResult> {
        self.ifds.first()
    }

    /// Returns the number of top-level IFDs
    pub fn ifd_count(&self) -> usize {
        self.ifds.len()
    }

    /// Counts all entries across the whole directory tree
    pub fn total_entry_count(&self) -> usize {
        self.ifds.iter().map(|ifd| ifd.deep_entry_count()).sum()
    }
}

impl fmt::Display for ExifData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exif Data:")?;
        writeln!(f, "  Byte order: {}", self.byte_order.name())?;
        writeln!(f, "  First IFD offset: {}", self.first_ifd_offset)?;
        writeln!(f, "  Number of IFDs: {}", self.ifds.len())?;

        for ifd in &self.ifds {
            ifd.write_indented(f, 0)?;
        }

        Ok(())
    }
}
