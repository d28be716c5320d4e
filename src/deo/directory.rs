// DEO object directory.
//
// Entries are variable-length and there is no count field; the only stop
// condition is the cursor reaching the header's `object_dir_len` offset.

use std::io::Read;

use log::debug;

use super::cursor::ByteCursor;
use super::error::Result;
use super::object::ObjectEntry;

/// Ordered directory entries, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<ObjectEntry>,
}

impl Directory {
    /// Decode entries until the cursor's absolute offset reaches `bound`.
    ///
    /// The bound is checked before every entry, so an entry that starts
    /// below `bound` is read in full even if it ends past it.
    pub fn decode<R: Read>(c: &mut ByteCursor<R>, bound: u32) -> Result<Self> {
        let bound = u64::from(bound);
        let start = c.position();

        let mut entries = Vec::new();
        while c.position() < bound {
            entries.push(ObjectEntry::decode(c)?);
        }

        debug!(
            "directory @ {start:#x}..{:#x}: {} entries (bound {bound:#x})",
            c.position(),
            entries.len()
        );
        Ok(Self { entries })
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[ObjectEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectEntry> {
        self.entries.iter()
    }

    /// First entry with the given name.
    pub fn find(&self, name: &[u8]) -> Option<&ObjectEntry> {
        self.entries.iter().find(|e| e.name.value == name)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a ObjectEntry;
    type IntoIter = std::slice::Iter<'a, ObjectEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
