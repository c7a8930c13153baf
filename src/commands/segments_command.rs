//! JPEG segment listing command
//!
//! This module implements the command that lists a file's marker
//! segments without decoding any application payloads.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::exif::errors::{ExifError, ExifResult};
use crate::jpeg::segments::JpegStream;
use crate::utils::logger::Logger;

/// Command for listing JPEG marker segments
pub struct SegmentsCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SegmentsCommand<'a> {
    /// Create a new segments command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExifError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(SegmentsCommand { input_file, logger })
    }
}

impl<'a> Command for SegmentsCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        info!("Listing segments of: {}", self.input_file);

        let stream = JpegStream::load(&self.input_file)?;

        for line in stream.to_string().lines() {
            info!("{}", line);
        }

        let rows: Vec<(u16, String, usize)> = stream.segments.iter()
            .map(|s| (s.marker, s.marker_name(), s.body_len()))
            .collect();
        self.logger.print_segment_table(&rows)?;

        Ok(())
    }
}
