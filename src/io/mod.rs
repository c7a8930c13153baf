//! I/O utilities for segment reading
//!
//! This module provides byte order strategies and the random-access
//! segment reader used by the Exif decoding engine.

pub mod byte_order;
pub mod segment_reader;
