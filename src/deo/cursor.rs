// Sequential little-endian reader over a seekable byte source.
//
// The cursor tracks its own absolute offset so decoders can report where a
// field started without issuing a seek per read.

use std::io::{self, Read, Seek};

use uuid::Uuid;

use super::error::{DecodeError, Result};

/// Upper bound on the up-front allocation for a length-prefixed read.
/// Larger payloads grow as bytes actually arrive, so a corrupt length
/// cannot force a huge allocation.
const MAX_PREALLOC: usize = 64 * 1024;

/// Forward-only reader used by every decoder in this crate.
pub struct ByteCursor<R> {
    inner: R,
    pos: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    /// Wrap a source, starting at whatever offset it is currently at.
    pub fn new(mut inner: R) -> Result<Self> {
        let pos = inner.stream_position()?;
        Ok(Self { inner, pos })
    }
}

impl<R: Read> ByteCursor<R> {
    /// Wrap a source that is known to sit at offset 0.
    pub fn at_start(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    /// Current absolute byte offset.
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Give back the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(DecodeError::UnexpectedEndOfInput {
                    offset: self.pos,
                    needed: buf.len(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `n` raw bytes. `n == 0` never touches the source.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut buf = Vec::with_capacity(n.min(MAX_PREALLOC));
        let got = (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
        if got < n {
            return Err(DecodeError::UnexpectedEndOfInput {
                offset: self.pos,
                needed: n,
            });
        }
        self.pos += n as u64;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a 16-byte GUID, bytes taken verbatim in RFC 4122 order.
    pub fn read_guid(&mut self) -> Result<Uuid> {
        Ok(Uuid::from_bytes(self.read_array()?))
    }
}
