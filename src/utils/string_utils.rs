//! String utility functions
//!
//! Utilities for working with text values and opaque byte dumps.

/// Trims trailing null characters from a byte buffer
pub fn trim_trailing_nulls(buffer: &mut Vec<u8>) {
    while !buffer.is_empty() && buffer[buffer.len() - 1] == 0 {
        buffer.pop();
    }
}

/// Number of bytes shown before an opaque dump is elided
const PREVIEW_LEN: usize = 16;

/// Formats opaque bytes as a short hex preview
pub fn preview_bytes(bytes: &[u8]) -> String {
    let hex: Vec<String> = bytes.iter()
        .take(PREVIEW_LEN)
        .map(|b| format!("{:02X}", b))
        .collect();

    if bytes.len() > PREVIEW_LEN {
        format!("[{} ...] ({} bytes)", hex.join(" "), bytes.len())
    } else {
        format!("[{}]", hex.join(" "))
    }
}
