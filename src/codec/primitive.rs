//! Big-endian 32-bit primitive reads and writes.
//!
//! Every value in the file format is a 4-byte integer or float, so all
//! conversion goes through one raw 4-byte path; `from_be_bytes` /
//! `to_be_bytes` are the identity on big-endian hosts. A read or write that
//! moves fewer than 4 bytes fails whole; no partial values are produced.

use std::io::{self, Read, Write};

use super::CodecError;

/// Read exactly 4 bytes and interpret them as a big-endian `i32`.
pub fn read_i32_be<R: Read>(reader: &mut R) -> Result<i32, CodecError> {
    Ok(i32::from_be_bytes(read4(reader)?))
}

/// Read exactly 4 bytes and interpret them as a big-endian `f32`.
pub fn read_f32_be<R: Read>(reader: &mut R) -> Result<f32, CodecError> {
    Ok(f32::from_be_bytes(read4(reader)?))
}

/// Write `value` as exactly 4 big-endian bytes.
pub fn write_i32_be<W: Write>(writer: &mut W, value: i32) -> Result<(), CodecError> {
    write4(writer, value.to_be_bytes())
}

/// Write `value` as exactly 4 big-endian bytes.
pub fn write_f32_be<W: Write>(writer: &mut W, value: f32) -> Result<(), CodecError> {
    write4(writer, value.to_be_bytes())
}

fn read4<R: Read>(reader: &mut R) -> Result<[u8; 4], CodecError> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => CodecError::ReadShortfall,
        _ => CodecError::Io(e),
    })?;
    Ok(buf)
}

fn write4<W: Write>(writer: &mut W, bytes: [u8; 4]) -> Result<(), CodecError> {
    writer.write_all(&bytes).map_err(|e| match e.kind() {
        io::ErrorKind::WriteZero => CodecError::WriteShortfall,
        _ => CodecError::Io(e),
    })
}
