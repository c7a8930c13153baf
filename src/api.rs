use log::info;

use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::reader::ExifReader;
use crate::exif::types::ExifData;
use crate::jpeg::jfif::Jfif;
use crate::jpeg::segments::JpegStream;
use crate::utils::logger::Logger;

/// Main interface to the exifkit library
pub struct ExifKit {
    logger: Logger,
}

impl ExifKit {
    /// Create a new ExifKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "exifkit.log"
    ///
    /// # Returns
    /// An ExifKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExifResult<Self> {
        let log_path = log_file.unwrap_or("exifkit.log");
        let logger = Logger::new(log_path)?;
        Ok(ExifKit { logger })
    }

    /// Analyze a JPEG file and return information about its structure
    ///
    /// The report lists the marker segments, the JFIF header when present,
    /// and the decoded Exif directory tree when present.
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG file to analyze
    ///
    /// # Returns
    /// String containing analysis information or an error
    pub fn analyze(&self, input_path: &str) -> ExifResult<String> {
        let stream = JpegStream::load(input_path)?;

        let mut result = stream.to_string();

        if let Some(body) = stream.jfif_payload() {
            if let Ok(jfif) = Jfif::parse(body) {
                result.push_str(&jfif.to_string());
            }
        }

        match stream.exif_payload() {
            Some(payload) => {
                let exif = ExifReader::new().decode(payload)?;
                result.push_str(&exif.to_string());
            }
            None => result.push_str("No Exif (APP1) segment found\n"),
        }

        self.logger.log(&format!("Analyzed {}", input_path))?;
        Ok(result)
    }

    /// Decode the Exif metadata of a JPEG file
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG file to decode
    ///
    /// # Returns
    /// The decoded Exif directory tree, or an error when the file has
    /// no Exif segment
    pub fn decode_file(&self, input_path: &str) -> ExifResult<ExifData> {
        info!("Decoding Exif metadata from {}", input_path);

        let stream = JpegStream::load(input_path)?;
        let payload = stream.exif_payload()
            .ok_or_else(|| ExifError::GenericError("No Exif (APP1) segment found".to_string()))?;

        ExifReader::new().decode(payload)
    }

    /// List the marker segments of a JPEG file
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG file to scan
    ///
    /// # Returns
    /// String listing each segment's marker, name and body length
    pub fn list_segments(&self, input_path: &str) -> ExifResult<String> {
        let stream = JpegStream::load(input_path)?;
        Ok(stream.to_string())
    }
}
