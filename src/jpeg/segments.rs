//! JPEG container segmentation
//!
//! A JPEG file is a concatenation of marker segments: a 2-byte marker
//! (always starting with 0xFF), a 2-byte body length that includes itself,
//! and the body. SOI and EOI are bare markers with no body. The scanner
//! splits a file into those segments and never touches the entropy-coded
//! scan data that follows SOS.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, info, warn};

use crate::exif::constants::{header, markers};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::tags;
use crate::jpeg::jfif::JFIF_ID;

/// One marker segment of a JPEG file
#[derive(Debug, Clone)]
pub struct JpegSegment {
    /// Full 2-byte marker code (e.g. 0xFFE1)
    pub marker: u16,
    /// Body bytes, marker and length field already stripped
    pub data: Vec<u8>,
}

impl JpegSegment {
    /// Returns the marker name from the marker dictionary
    pub fn marker_name(&self) -> String {
        tags::get_marker_name(self.marker)
    }

    /// Returns the body length in bytes
    pub fn body_len(&self) -> usize {
        self.data.len()
    }
}

/// A JPEG file broken into its marker segments
#[derive(Debug)]
pub struct JpegStream {
    /// Segments in file order (SOI and EOI are not stored, they carry no body)
    pub segments: Vec<JpegSegment>,
}

impl JpegStream {
    /// Loads and scans a JPEG file from the given path
    ///
    /// # Arguments
    /// * `filepath` - Path to the JPEG file to scan
    ///
    /// # Returns
    /// The segment list, or an error if the file is not a JPEG
    pub fn load(filepath: &str) -> ExifResult<Self> {
        info!("Loading JPEG file: {}", filepath);

        let file = File::open(Path::new(filepath))?;
        let mut reader = BufReader::with_capacity(64 * 1024, file);

        Self::read(&mut reader)
    }

    /// Scans a JPEG byte stream into marker segments.
    ///
    /// Scanning stops at EOI, at the first bytes that are not a marker
    /// (entropy-coded scan data after SOS), or at end of input.
    pub fn read<R: Read>(reader: &mut R) -> ExifResult<Self> {
        let soi = reader.read_u16::<BigEndian>()?;
        if soi != markers::SOI {
            return Err(ExifError::GenericError("Missing SOI marker, not a JPEG file".to_string()));
        }

        let mut segments = Vec::new();

        loop {
            let marker = match reader.read_u16::<BigEndian>() {
                Ok(marker) => marker,
                Err(e) => {
                    warn!("JPEG stream ended without EOI: {}", e);
                    break;
                }
            };

            if marker == markers::EOI {
                debug!("Reached EOI after {} segments", segments.len());
                break;
            }
            if marker <= 0xFF00 {
                // Out of sync, or entropy-coded data after SOS
                debug!("Stopping scan at non-marker bytes {:#06x}", marker);
                break;
            }

            // The length field includes its own 2 bytes
            let length = reader.read_u16::<BigEndian>()?;
            if length < 2 {
                return Err(ExifError::GenericError(format!(
                    "Invalid segment length {} for marker {:#06x}", length, marker)));
            }

            let mut data = vec![0u8; length as usize - 2];
            reader.read_exact(&mut data)?;

            debug!("Segment {:#06X} ({}): {} bytes",
                   marker, tags::get_marker_name(marker), data.len());

            segments.push(JpegSegment { marker, data });

            if marker == markers::SOS {
                // Entropy-coded data follows; the next iteration stops at it
                debug!("SOS reached, scan data follows");
            }
        }

        Ok(JpegStream { segments })
    }

    /// Gets the first segment with the given marker, if present
    pub fn segment(&self, marker: u16) -> Option<&JpegSegment> {
        self.segments.iter().find(|s| s.marker == marker)
    }

    /// Returns the number of scanned segments
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the body of the first APP1 segment carrying Exif data,
    /// starting at the "Exif\0\0" identifier
    pub fn exif_payload(&self) -> Option<&[u8]> {
        self.segments.iter()
            .find(|s| s.marker == markers::APP1 && s.data.starts_with(&header::EXIF_ID))
            .map(|s| s.data.as_slice())
    }

    /// Returns the body of the first APP0 segment carrying JFIF data
    pub fn jfif_payload(&self) -> Option<&[u8]> {
        self.segments.iter()
            .find(|s| s.marker == markers::APP0 && s.data.starts_with(&JFIF_ID))
            .map(|s| s.data.as_slice())
    }
}

impl std::fmt::Display for JpegStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "JPEG segments: {}", self.segments.len())?;
        for segment in &self.segments {
            writeln!(f, "  {:#06X} {}: {} bytes",
                     segment.marker, segment.marker_name(), segment.body_len())?;
        }
        Ok(())
    }
}
