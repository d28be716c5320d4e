// DEO container format (read side).
//
// Layout is strictly sequential: a fixed-shape header followed by a flat
// directory of object descriptors, bounded by the header's
// `object_dir_len` byte offset.
//
// # Modules
//
// - `cursor`: Little-endian byte cursor over a seekable source
// - `varint`: VarLen (1 or 5 bytes) and VarStr (u32 length prefix) codecs
// - `validate`: Sentinel checks
// - `header`: File header record
// - `object`: Single directory entry
// - `directory`: Offset-bounded sequence of directory entries
// - `file`: Header + directory aggregate
// - `error`: Decode error taxonomy

pub mod cursor;
pub mod directory;
pub mod error;
pub mod file;
pub mod header;
pub mod object;
pub mod validate;
pub mod varint;

// Re-export key types for convenience.
pub use cursor::ByteCursor;
pub use directory::Directory;
pub use error::{DecodeError, Result};
pub use file::{DeoFile, decode_memory};
pub use header::{Header, VariableBlob, VersionedString};
pub use object::ObjectEntry;
