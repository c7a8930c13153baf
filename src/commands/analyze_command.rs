//! JPEG/Exif structure analysis command
//!
//! This module implements the default command: scan a JPEG file into
//! segments, decode the JFIF header when present, and decode the Exif
//! segment into its directory tree.

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::reader::ExifReader;
use crate::exif::types::ExifData;
use crate::jpeg::jfif::Jfif;
use crate::jpeg::segments::JpegStream;
use crate::utils::logger::Logger;

/// Command for analyzing JPEG/Exif file structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            logger,
        })
    }

    /// Display the segment table of the scanned file
    fn display_segments(&self, stream: &JpegStream) {
        info!("JPEG structure:");
        info!("  Number of segments: {}", stream.count());

        for segment in &stream.segments {
            info!("  {:#06X} {}: {} bytes",
                  segment.marker, segment.marker_name(), segment.body_len());
        }
    }

    /// Display the JFIF header when the file carries one
    fn display_jfif(&self, stream: &JpegStream) {
        let body = match stream.jfif_payload() {
            Some(body) => body,
            None => {
                debug!("No JFIF (APP0) segment found");
                return;
            }
        };

        match Jfif::parse(body) {
            Ok(jfif) => {
                for line in jfif.to_string().lines() {
                    info!("{}", line);
                }
            }
            Err(e) => warn!("APP0 segment present but not decodable: {}", e),
        }
    }

    /// Display the decoded Exif directory tree
    fn display_exif(&self, exif: &ExifData) {
        for line in exif.to_string().lines() {
            info!("{}", line);
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        info!("Analyzing file: {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let stream = JpegStream::load(&self.input_file)?;

        self.display_segments(&stream);
        self.display_jfif(&stream);

        match stream.exif_payload() {
            Some(payload) => {
                let reader = ExifReader::new();
                let exif = reader.decode(payload)?;
                self.display_exif(&exif);
            }
            None => info!("No Exif (APP1) segment found"),
        }

        debug!("Analysis completed successfully");
        self.logger.log("Analysis completed successfully")?;

        Ok(())
    }
}
