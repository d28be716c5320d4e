// DEO variable-length encodings.
//
// Two unrelated mechanisms share the format:
//
// - VarLen: one byte holding 0..=254, or the escape byte 0xFF followed by
//   a u32 (little-endian). Used for entry lengths and blob lengths.
// - VarStr: u32 (little-endian) byte count followed by that many raw bytes.
//   Used for every string field.
//
// They are never interchangeable; a string is always 4-byte prefixed.

use std::io::{self, Read, Write};

use super::cursor::ByteCursor;
use super::error::Result;

/// Leading byte that announces a 4-byte VarLen payload.
pub const VAR_LEN_ESCAPE: u8 = 0xFF;

/// Maximum encoded length of a VarLen (escape + u32).
pub const MAX_VAR_LEN_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Read a VarLen.
///
/// A non-canonical escape (0xFF followed by a value below 255) is accepted.
pub fn read_var_len<R: Read>(c: &mut ByteCursor<R>) -> Result<u32> {
    let first = c.read_u8()?;
    if first == VAR_LEN_ESCAPE {
        return c.read_u32();
    }
    Ok(u32::from(first))
}

/// Read a VarStr: u32 length, then that many bytes.
pub fn read_var_str<R: Read>(c: &mut ByteCursor<R>) -> Result<Vec<u8>> {
    let len = c.read_u32()?;
    c.read_bytes(len as usize)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Encode a VarLen into `buf`. Returns the number of bytes used (1 or 5).
#[inline]
pub fn encode_var_len(num: u32, buf: &mut [u8; MAX_VAR_LEN_LEN]) -> usize {
    if num >= u32::from(VAR_LEN_ESCAPE) {
        buf[0] = VAR_LEN_ESCAPE;
        buf[1..].copy_from_slice(&num.to_le_bytes());
        MAX_VAR_LEN_LEN
    } else {
        buf[0] = num as u8;
        1
    }
}

/// Encoded byte-length of a VarLen value.
#[inline]
pub fn sizeof_var_len(num: u32) -> usize {
    if num >= u32::from(VAR_LEN_ESCAPE) {
        MAX_VAR_LEN_LEN
    } else {
        1
    }
}

/// Encode a VarLen and write it to a sink.
pub fn write_var_len<W: Write>(w: &mut W, num: u32) -> io::Result<()> {
    let mut buf = [0u8; MAX_VAR_LEN_LEN];
    let len = encode_var_len(num, &mut buf);
    w.write_all(&buf[..len])
}

/// Write a VarStr (u32 length prefix + bytes).
pub fn write_var_str<W: Write>(w: &mut W, data: &[u8]) -> io::Result<()> {
    let len = u32::try_from(data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "string longer than u32::MAX"))?;
    w.write_all(&len.to_le_bytes())?;
    w.write_all(data)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
