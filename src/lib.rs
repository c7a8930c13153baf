pub mod io;
pub mod exif;
pub mod jpeg;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ExifKit;

pub use exif::{ExifData, ExifReader, ExifValue};
pub use jpeg::{Jfif, JpegStream};
