// One DEO directory entry.

use std::io::Read;

use log::debug;
use uuid::Uuid;

use super::cursor::ByteCursor;
use super::error::Result;
use super::header::VersionedString;
use super::validate::{expect_u8, expect_u32};
use super::varint;

/// Leading tag of every entry.
pub const OBJ_TAG_START: u8 = 4;
/// Follows the GUID.
pub const OBJ_TAG_AFTER_GUID: u8 = 0;
/// Reserved u32 after `unknown_a`.
pub const OBJ_RESERVED: u32 = 0;
/// Precedes `data_position`.
pub const OBJ_TAG_DATA_POSITION: u8 = 4;

/// Descriptor of one named, typed object in the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Absolute offset of the entry's leading tag.
    pub offset: u64,
    pub entry_len: u32,
    pub name: VersionedString,
    pub type_name: VersionedString,
    pub guid: Uuid,
    pub unknown_a: u32,
    /// Offset of the object's payload elsewhere in the file.
    pub data_position: u32,
}

impl ObjectEntry {
    /// Decode one entry.
    ///
    /// Layout:
    ///  1. tag = 4
    ///  2. entry_len (VarLen)
    ///  3. name, type (VarStr)
    ///  4. guid (16 bytes)
    ///  5. tag = 0
    ///  6. unknown_a (u32)
    ///  7. reserved u32 = 0
    ///  8. tag = 4
    ///  9. data_position (u32)
    pub fn decode<R: Read>(c: &mut ByteCursor<R>) -> Result<Self> {
        let offset = c.position();

        expect_u8(c, "entry start tag", OBJ_TAG_START)?;
        let entry_len = varint::read_var_len(c)?;
        let name = VersionedString::decode_plain(c)?;
        let type_name = VersionedString::decode_plain(c)?;
        let guid = c.read_guid()?;
        expect_u8(c, "entry tag after guid", OBJ_TAG_AFTER_GUID)?;
        let unknown_a = c.read_u32()?;
        expect_u32(c, "entry reserved word", OBJ_RESERVED)?;
        expect_u8(c, "entry tag before data_position", OBJ_TAG_DATA_POSITION)?;
        let data_position = c.read_u32()?;

        debug!("entry @ {offset:#x}: {name} ({type_name}) {guid} -> {data_position:#x}");

        Ok(Self {
            offset,
            entry_len,
            name,
            type_name,
            guid,
            unknown_a,
            data_position,
        })
    }
}
