//! Whole-cache encode/decode and path-based load/save.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use log::{error, warn};

use super::{CodecError, read_f32_be, read_i32_be, write_f32_be, write_i32_be};
use crate::cache::{Frame, FrameCache, Point3};

const HEADER_BYTES: u64 = 8;
const TIME_BYTES: u64 = 4;
const POINT_BYTES: u64 = 12;

/// Decode a complete cache file held in memory.
///
/// Every point component is multiplied by `scale` as it is read. Trailing
/// bytes past the header-implied size are diagnosed but never parsed; only
/// the declared number of frames is read. On failure no cache is produced,
/// so a failed load never leaves partial state behind.
pub fn decode(bytes: &[u8], scale: f32) -> Result<FrameCache, CodecError> {
    let actual = bytes.len() as u64;

    // need at least 2 32-bit ints for the frame and point counts
    if actual < HEADER_BYTES {
        error!("file is too short for a header ({} bytes)", actual);
        return Err(CodecError::TooShort {
            expected: HEADER_BYTES,
            actual,
        });
    }

    let mut reader = Cursor::new(bytes);
    let frame_count = read_i32_be(&mut reader)?;
    let point_count = read_i32_be(&mut reader)?;

    if frame_count < 0 {
        error!("header declares a negative frame count ({})", frame_count);
        return Err(CodecError::NegativeCount {
            field: "frame",
            value: frame_count,
        });
    }
    if point_count < 0 {
        error!("header declares a negative point count ({})", point_count);
        return Err(CodecError::NegativeCount {
            field: "point",
            value: point_count,
        });
    }

    let frame_count = frame_count as usize;
    let point_count = point_count as usize;

    // saturating: a hostile header whose implied size overflows u64 can
    // only ever fail the size check below
    let expected = (frame_count as u64)
        .saturating_mul(point_count as u64)
        .saturating_mul(POINT_BYTES)
        .saturating_add(TIME_BYTES * frame_count as u64)
        .saturating_add(HEADER_BYTES);

    if actual < expected {
        error!(
            "file is too short: expected {} bytes, found {}",
            expected, actual
        );
        return Err(CodecError::TooShort { expected, actual });
    } else if actual > expected {
        // some exporters write more frames than there are frame times; log
        // whether the leftover splits into whole frames
        let leftover = actual - expected;
        let frame_bytes = POINT_BYTES * point_count as u64;
        if frame_bytes > 0 && leftover % frame_bytes == 0 {
            let extra = leftover / frame_bytes;
            warn!(
                "file contains {} extra {}",
                extra,
                if extra == 1 { "frame" } else { "frames" }
            );
        } else {
            warn!("file contains an odd number of extra bytes; might be corrupted");
        }
    }

    let mut times = Vec::with_capacity(frame_count);
    for _ in 0..frame_count {
        times.push(read_f32_be(&mut reader)?);
    }

    let mut frames = Vec::with_capacity(frame_count);
    for time in times {
        let mut points = Vec::with_capacity(point_count);
        for _ in 0..point_count {
            let x = read_f32_be(&mut reader)? * scale;
            let y = read_f32_be(&mut reader)? * scale;
            let z = read_f32_be(&mut reader)? * scale;
            points.push(Point3::new(x, y, z));
        }
        frames.push(Frame::new(time, points));
    }

    Ok(FrameCache::from_decoded(point_count, frames))
}

/// Encode a cache to the on-disk layout.
///
/// `scale` is applied to every point component at write time. It is an
/// output transform, not the inverse of the load-time scale: encoding with
/// the same factor used at load scales the data twice. Pass the reciprocal
/// to undo a load-time scale.
pub fn encode(cache: &FrameCache, scale: f32) -> Result<Vec<u8>, CodecError> {
    let frame_count = cache.frame_count() as u64;
    let point_count = cache.point_count() as u64;
    let size = HEADER_BYTES + TIME_BYTES * frame_count + POINT_BYTES * frame_count * point_count;

    let mut out = Vec::with_capacity(size as usize);
    write_i32_be(&mut out, cache.frame_count() as i32)?;
    write_i32_be(&mut out, cache.point_count() as i32)?;

    for frame in cache.frames() {
        write_f32_be(&mut out, frame.time())?;
    }

    for frame in cache.frames() {
        for point in frame.points() {
            write_f32_be(&mut out, point.x * scale)?;
            write_f32_be(&mut out, point.y * scale)?;
            write_f32_be(&mut out, point.z * scale)?;
        }
    }

    Ok(out)
}

/// Read and decode the cache file at `path`.
///
/// The whole file is read into memory before decoding.
pub fn load<P: AsRef<Path>>(path: P, scale: f32) -> Result<FrameCache, CodecError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        error!("can't read file {}: {}", path.display(), e);
        CodecError::Io(e)
    })?;

    decode(&bytes, scale)
}

/// Encode `cache` and write it to `path`.
pub fn save<P: AsRef<Path>>(path: P, cache: &FrameCache, scale: f32) -> Result<(), CodecError> {
    let path = path.as_ref();
    let bytes = encode(cache, scale)?;

    fs::write(path, bytes).map_err(|e| {
        error!("can't write file {}: {}", path.display(), e);
        CodecError::Io(e)
    })
}

impl FrameCache {
    /// Load a cache from an MDD file; see [`load`].
    pub fn load<P: AsRef<Path>>(path: P, scale: f32) -> Result<Self, CodecError> {
        load(path, scale)
    }

    /// Save this cache as an MDD file; see [`save`].
    pub fn save<P: AsRef<Path>>(&self, path: P, scale: f32) -> Result<(), CodecError> {
        save(path, self, scale)
    }
}
