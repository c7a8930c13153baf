//! Exif segment decoding engine
//!
//! This module implements the decoder that turns one Exif (APP1) segment
//! into a tree of decoded directories:
//! 1. Verify the "Exif\0\0" identifier and TIFF header
//! 2. Detect the byte order (little/big endian)
//! 3. Parse IFD0 and walk its top-level next-IFD chain
//! 4. Follow pointer tags into nested sub-directories, depth-capped
//!
//! Failures below the segment level never abort the decode: a truncated
//! directory keeps its already-decoded siblings, and a bad value or a bad
//! pointer is recorded on the affected entry.

use log::{debug, info, warn};

use crate::exif::constants::{header, limits};
use crate::exif::directory::{DirectoryEntry, IfdDirectory};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::tags::{self, IfdKind};
use crate::exif::types::{EntryResult, ExifData, IfdResult};
use crate::exif::value::{self, ExifValue};
use crate::io::byte_order::ByteOrder;
use crate::io::segment_reader::SegmentReader;

/// Decoder for Exif segments
pub struct ExifReader {
    /// Recursion bound for pointer-linked sub-directories
    max_depth: usize,
}

impl Default for ExifReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ExifReader {
    /// Creates a new Exif reader with the standard recursion bound
    pub fn new() -> Self {
        ExifReader { max_depth: limits::MAX_IFD_DEPTH }
    }

    /// Creates a reader with a custom recursion bound
    pub fn with_max_depth(max_depth: usize) -> Self {
        ExifReader { max_depth }
    }

    /// Decodes one Exif segment.
    ///
    /// `data` must start at the "Exif\0\0" identifier (the APP1 body with
    /// marker and length already stripped by the JPEG scanner).
    ///
    /// # Returns
    /// The decoded directory tree, or a fatal error (`NotExif`,
    /// `UnknownByteOrder`, `InvalidHeader`) when the segment header is
    /// not usable at all
    pub fn decode(&self, data: &[u8]) -> ExifResult<ExifData> {
        if !data.starts_with(&header::EXIF_ID) {
            return Err(ExifError::NotExif);
        }

        // Byte order code: both valid codes repeat one byte, so the code
        // itself can be read before the order is known
        let code = match data.get(6..8) {
            Some(b) => u16::from_be_bytes([b[0], b[1]]),
            None => return Err(ExifError::GenericError(
                "Segment ends before the TIFF header".to_string())),
        };
        let byte_order = ByteOrder::detect(code)?;
        debug!("Detected byte order: {}", byte_order.name());

        let reader = SegmentReader::new(data, byte_order);
        let base = header::TIFF_HEADER_OFFSET;

        let magic = reader.read_u16(base as usize + 2)?;
        if magic != header::TIFF_MAGIC {
            return Err(ExifError::InvalidHeader(magic));
        }

        let first_ifd_offset = reader.read_u32(base as usize + 4)?;
        debug!("First IFD offset: {}", first_ifd_offset);

        let mut exif = ExifData::new(byte_order, first_ifd_offset);
        exif.ifds = self.read_ifd_chain(&reader, first_ifd_offset);

        info!("Decoded {} IFDs ({} entries) from Exif segment",
              exif.ifd_count(), exif.total_entry_count());
        Ok(exif)
    }

    /// Walks the top-level chain of directories starting at IFD0.
    ///
    /// The chain produces siblings (IFD1 is the thumbnail directory);
    /// a directory that fails to parse ends the chain but keeps the
    /// directories decoded before it.
    fn read_ifd_chain(&self, reader: &SegmentReader, first_offset: u32) -> Vec<IfdResult> {
        let mut ifds = Vec::new();
        let mut offset = first_offset;
        let mut index = 0;

        loop {
            if index >= limits::MAX_IFD_CHAIN {
                warn!("IFD chain longer than {} directories, stopping", limits::MAX_IFD_CHAIN);
                break;
            }

            match IfdDirectory::parse(reader, offset, header::TIFF_HEADER_OFFSET) {
                Ok(directory) => {
                    let next_offset = directory.next_offset;
                    ifds.push(self.decode_directory(reader, &directory, IfdKind::Primary, index, 0));

                    match next_offset {
                        Some(next) => {
                            debug!("Next IFD offset: {}", next);
                            offset = next;
                            index += 1;
                        }
                        None => break,
                    }
                }
                Err(e) => {
                    warn!("Error reading IFD {}: {}", index, e);
                    break;
                }
            }
        }

        ifds
    }

    /// Decodes all entries of one parsed directory
    fn decode_directory(
        &self,
        reader: &SegmentReader,
        directory: &IfdDirectory,
        kind: IfdKind,
        index: usize,
        depth: usize,
    ) -> IfdResult {
        let entries = directory.entries.iter()
            .map(|entry| self.decode_entry(reader, entry, kind, index, depth))
            .collect();

        IfdResult {
            kind,
            index,
            offset: directory.offset,
            entries,
        }
    }

    /// Decodes one entry, resolving names and following pointer tags
    fn decode_entry(
        &self,
        reader: &SegmentReader,
        entry: &DirectoryEntry,
        kind: IfdKind,
        index: usize,
        depth: usize,
    ) -> EntryResult {
        let value = match value::decode_entry(entry, reader, header::TIFF_HEADER_OFFSET) {
            Ok(value) => value,
            Err(e) => {
                // Entry-local failure: keep the entry, keep decoding
                warn!("Undecodable value for {}: {}", entry.description(kind), e);
                ExifValue::Undecodable(e.to_string())
            }
        };

        let mut nested = None;
        let mut nested_error = None;

        if let Some(target) = tags::pointer_target(entry.tag) {
            match value.as_u32() {
                Some(pointer) => {
                    match self.follow_pointer(reader, pointer, target, index, depth + 1) {
                        Ok(ifd) => nested = Some(ifd),
                        Err(e) => {
                            warn!("Could not follow {} pointer to base+{}: {}",
                                  target.name(), pointer, e);
                            nested_error = Some(e.to_string());
                        }
                    }
                }
                None => {
                    nested_error = Some("pointer value is not an unsigned integer".to_string());
                }
            }
        }

        EntryResult {
            tag: entry.tag,
            tag_name: tags::get_tag_name(kind, entry.tag),
            field_type: entry.field_type,
            type_name: tags::get_type_name(entry.field_type),
            count: entry.count,
            value,
            nested,
            nested_error,
        }
    }

    /// Parses the sub-directory a pointer tag links to.
    ///
    /// The depth bound guards against malformed or adversarial circular
    /// pointer chains; the format never legitimately nests deeper than
    /// Exif IFD -> Interoperability IFD.
    fn follow_pointer(
        &self,
        reader: &SegmentReader,
        offset: u32,
        kind: IfdKind,
        index: usize,
        depth: usize,
    ) -> ExifResult<IfdResult> {
        if depth >= self.max_depth {
            return Err(ExifError::MaxDepthExceeded(self.max_depth));
        }

        let directory = IfdDirectory::parse(reader, offset, header::TIFF_HEADER_OFFSET)?;
        debug!("Parsed {} with {} entries at base+{}",
               kind.name(), directory.entry_count(), offset);

        Ok(self.decode_directory(reader, &directory, kind, index, depth))
    }
}
