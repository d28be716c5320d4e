// DEO file aggregate: header followed by the object directory.

use std::io::{Cursor, Read};

use log::info;

use super::cursor::ByteCursor;
use super::directory::Directory;
use super::error::Result;
use super::header::Header;

/// A fully decoded DEO file. Only ever produced whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeoFile {
    pub header: Header,
    pub directory: Directory,
}

impl DeoFile {
    /// Decode header then directory from the cursor.
    ///
    /// Object payloads past the directory are left unread.
    pub fn decode<R: Read>(c: &mut ByteCursor<R>) -> Result<Self> {
        let header = Header::decode(c)?;
        let directory = Directory::decode(c, header.object_dir_len)?;
        info!(
            "decoded \"{}\": {} directory entries",
            header.file_name,
            directory.len()
        );
        Ok(Self { header, directory })
    }
}

/// Decode a DEO file held entirely in memory.
pub fn decode_memory(data: &[u8]) -> Result<DeoFile> {
    DeoFile::decode(&mut ByteCursor::at_start(Cursor::new(data)))
}
