// File-level helper for DEO decoding.
//
// Wraps the byte cursor in a buffered file reader, decodes header and
// directory, and reports where each part ended. The handle is closed when
// this function returns, whether decoding succeeded or not.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::deo::{ByteCursor, DecodeError, DeoFile, Directory, Header};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `parse_file()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStats {
    /// Input file size in bytes.
    pub file_size: u64,
    /// Bytes consumed by the header.
    pub header_len: u64,
    /// Offset where directory decoding stopped.
    pub directory_end: u64,
    /// Number of directory entries.
    pub entries: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file-level operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// The input could not be opened or inspected.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The contents are not a valid DEO file.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

// ---------------------------------------------------------------------------
// parse_file
// ---------------------------------------------------------------------------

/// Open `path` and decode its header and directory.
pub fn parse_file(path: &Path) -> Result<(DeoFile, ParseStats), IoError> {
    info!("Parsing file \"{}\"", path.display());

    let file = File::open(path)?;
    let file_size = file.metadata()?.len();
    let mut cursor = ByteCursor::at_start(BufReader::with_capacity(BUF_SIZE, file));

    let header = Header::decode(&mut cursor)?;
    let header_len = cursor.position();
    let directory = Directory::decode(&mut cursor, header.object_dir_len)?;
    let directory_end = cursor.position();
    info!(
        "{} directory entries, directory ends at {directory_end:#x} of {file_size:#x}",
        directory.len()
    );

    let stats = ParseStats {
        file_size,
        header_len,
        directory_end,
        entries: directory.len(),
    };
    Ok((DeoFile { header, directory }, stats))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
