// DEO decode errors.
//
// Every decoder either returns a fully valid value or one of these; no
// partially decoded record ever crosses a module boundary.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The source ran out before a field could be read in full.
    #[error("unexpected end of input at offset {offset:#x} (need {needed} bytes)")]
    UnexpectedEndOfInput { offset: u64, needed: usize },

    /// A sentinel field did not hold its required constant.
    #[error(
        "malformed structure: {field} at offset {offset:#x}: expected {expected:#x}, got {actual:#x}"
    )]
    MalformedStructure {
        field: &'static str,
        offset: u64,
        expected: u32,
        actual: u32,
    },

    /// Any other failure of the underlying source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    /// True for sentinel mismatches.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedStructure { .. })
    }

    /// True when the input was truncated.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::UnexpectedEndOfInput { .. })
    }

    /// Byte offset the error refers to, if it carries one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::UnexpectedEndOfInput { offset, .. } | Self::MalformedStructure { offset, .. } => {
                Some(*offset)
            }
            Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
