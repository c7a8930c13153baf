//! JPEG container parsing module
//!
//! This module splits a JPEG file into its marker segments and decodes
//! the JFIF (APP0) application segment. The Exif (APP1) payload it
//! produces is consumed by the `exif` module.

pub mod segments;
pub mod jfif;
mod tests;

pub use jfif::Jfif;
pub use segments::{JpegSegment, JpegStream};
