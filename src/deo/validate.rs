// Sentinel checks.
//
// The format carries no magic number or checksum; these constant bytes are
// the only thing separating a DEO file from arbitrary data.

use std::io::Read;

use log::trace;

use super::cursor::ByteCursor;
use super::error::{DecodeError, Result};

/// Read a u8 and fail unless it equals `expected`.
pub fn expect_u8<R: Read>(c: &mut ByteCursor<R>, field: &'static str, expected: u8) -> Result<()> {
    let offset = c.position();
    let actual = c.read_u8()?;
    check(field, offset, u32::from(expected), u32::from(actual))
}

/// Read a u32 and fail unless it equals `expected`.
pub fn expect_u32<R: Read>(
    c: &mut ByteCursor<R>,
    field: &'static str,
    expected: u32,
) -> Result<()> {
    let offset = c.position();
    let actual = c.read_u32()?;
    check(field, offset, expected, actual)
}

fn check(field: &'static str, offset: u64, expected: u32, actual: u32) -> Result<()> {
    if actual != expected {
        return Err(DecodeError::MalformedStructure {
            field,
            offset,
            expected,
            actual,
        });
    }
    trace!("{field} @ {offset:#x} ok ({expected:#x})");
    Ok(())
}
