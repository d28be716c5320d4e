// DEO file header.
//
// Fixed shape, decoded front to back with no branching. Field names that
// start with `unknown_` have no recovered meaning and are kept as opaque
// values of their on-disk width.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use log::debug;
use uuid::Uuid;

use super::cursor::ByteCursor;
use super::error::Result;
use super::validate::expect_u8;
use super::varint;

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// Follows `object_dir_len`.
pub const HDR_TAG_DIR_LEN: u8 = 9;
/// Follows `unknown_len`.
pub const HDR_TAG_UNKNOWN_LEN: u8 = 4;
/// Follows `unknown_g`.
pub const HDR_TAG_AFTER_GUID: u8 = 4;
/// Precedes the variable blob.
pub const HDR_TAG_BLOB: u8 = 1;

/// Width of the opaque `unknown_g` run.
pub const UNKNOWN_G_LEN: usize = 9;

// ---------------------------------------------------------------------------
// String and blob shapes
// ---------------------------------------------------------------------------

/// A VarStr, optionally followed by a one-byte version.
///
/// Whether the version byte is present depends on where the string sits in
/// the file, not on anything in the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedString {
    pub value: Vec<u8>,
    /// Meaningful only when `has_version` is set.
    pub version: u8,
    pub has_version: bool,
}

impl Default for VersionedString {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            version: 1,
            has_version: false,
        }
    }
}

impl VersionedString {
    /// Decode a bare VarStr.
    pub fn decode_plain<R: Read>(c: &mut ByteCursor<R>) -> Result<Self> {
        let value = varint::read_var_str(c)?;
        Ok(Self {
            value,
            ..Self::default()
        })
    }

    /// Decode a VarStr followed by its version byte.
    pub fn decode_versioned<R: Read>(c: &mut ByteCursor<R>) -> Result<Self> {
        let value = varint::read_var_str(c)?;
        let version = c.read_u8()?;
        Ok(Self {
            value,
            version,
            has_version: true,
        })
    }

    /// The string bytes as text, with invalid UTF-8 replaced.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

impl fmt::Display for VersionedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

/// Opaque payload prefixed with a VarLen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBlob {
    pub length: u32,
    pub data: Vec<u8>,
}

impl VariableBlob {
    pub fn decode<R: Read>(c: &mut ByteCursor<R>) -> Result<Self> {
        let length = varint::read_var_len(c)?;
        let data = c.read_bytes(length as usize)?;
        Ok(Self { length, data })
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Parsed DEO file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub header_str: VersionedString,
    pub unknown_a: u32,
    /// Absolute byte offset at which the object directory ends.
    pub object_dir_len: u32,
    pub unknown_len: u32,
    pub unknown_f: u8,
    pub file_name: VersionedString,
    pub transfer_agent: VersionedString,
    pub some_guid: Uuid,
    pub unknown_g: [u8; UNKNOWN_G_LEN],
    pub unknown_i: u32,
    pub unknown_blob: VariableBlob,
    pub unknown_k: u32,
}

impl Header {
    /// Decode the header from the cursor's current position.
    ///
    /// Layout:
    ///  1. header_str (VarStr + version byte)
    ///  2. unknown_a (u32)
    ///  3. object_dir_len (u32)
    ///  4. tag = 9
    ///  5. unknown_len (VarLen)
    ///  6. tag = 4
    ///  7. unknown_f (u8)
    ///  8. file_name, transfer_agent (VarStr)
    ///  9. some_guid (16 bytes)
    /// 10. unknown_g (9 bytes)
    /// 11. tag = 4
    /// 12. unknown_i (u32)
    /// 13. tag = 1
    /// 14. unknown_blob (VarLen + bytes)
    /// 15. unknown_k (u32)
    pub fn decode<R: Read>(c: &mut ByteCursor<R>) -> Result<Self> {
        let start = c.position();

        let header_str = VersionedString::decode_versioned(c)?;
        let unknown_a = c.read_u32()?;
        let object_dir_len = c.read_u32()?;
        expect_u8(c, "header tag after object_dir_len", HDR_TAG_DIR_LEN)?;
        let unknown_len = varint::read_var_len(c)?;
        expect_u8(c, "header tag after unknown_len", HDR_TAG_UNKNOWN_LEN)?;
        let unknown_f = c.read_u8()?;
        let file_name = VersionedString::decode_plain(c)?;
        let transfer_agent = VersionedString::decode_plain(c)?;
        let some_guid = c.read_guid()?;
        let unknown_g = c.read_array::<UNKNOWN_G_LEN>()?;
        expect_u8(c, "header tag after unknown_g", HDR_TAG_AFTER_GUID)?;
        let unknown_i = c.read_u32()?;
        expect_u8(c, "header tag before unknown_blob", HDR_TAG_BLOB)?;
        let unknown_blob = VariableBlob::decode(c)?;
        let unknown_k = c.read_u32()?;

        debug!(
            "header @ {start:#x}..{:#x}: \"{header_str}\" v{}, object_dir_len={object_dir_len}",
            c.position(),
            header_str.version,
        );

        Ok(Self {
            header_str,
            unknown_a,
            object_dir_len,
            unknown_len,
            unknown_f,
            file_name,
            transfer_agent,
            some_guid,
            unknown_g,
            unknown_i,
            unknown_blob,
            unknown_k,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
