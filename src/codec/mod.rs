//! Codec module - Binary reading and writing of the MDD point-cache format.
//!
//! # File Format
//!
//! MDD files are big-endian with 4-byte fields. There is no magic number,
//! version field, or checksum:
//!
//! ```text
//! int32   frame_count
//! int32   point_count
//! float32 frame_time[frame_count]                  // ascending
//! float32 point[frame_count][point_count][3]       // x, y, z per point
//! ```
//!
//! Total size = 8 + 4 * frame_count + 12 * frame_count * point_count bytes.
//! Files longer than that are accepted (some exporters append frames past
//! the declared count); files shorter than that fail to load.

mod file;
mod primitive;

pub use file::*;
pub use primitive::*;

use std::io;

/// Errors raised while encoding or decoding a cache file.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("fewer than 4 bytes available for a 32-bit read")]
    ReadShortfall,
    #[error("fewer than 4 bytes could be written for a 32-bit write")]
    WriteShortfall,
    #[error("file too short: expected {expected} bytes, found {actual}")]
    TooShort { expected: u64, actual: u64 },
    #[error("invalid header: negative {field} count {value}")]
    NegativeCount { field: &'static str, value: i32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}
