/// A single row of a directory listing.
///
/// Entries are produced fresh by every scan and never mutated afterwards;
/// a new scan replaces the previous sequence wholesale.
use compact_str::CompactString;
use serde::Serialize;

/// Whether an entry is a plain file or a directory.
///
/// Carried explicitly so consumers never have to inspect the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Name as it appears on disk (no directory marker).
    pub name: CompactString,

    /// Own size for files; recursive sum of descendant files for directories.
    pub size: u64,

    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            kind: EntryKind::Directory,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name with a trailing `/` marker for directories.
    pub fn display_name(&self) -> CompactString {
        if self.is_dir() {
            let mut name = self.name.clone();
            name.push('/');
            name
        } else {
            self.name.clone()
        }
    }
}
