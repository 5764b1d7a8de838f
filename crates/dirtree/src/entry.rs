//! Directory entries and the directories-first ordering applied at every
//! tree level.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// How an entry renders: with the folder glyph and recursion, or as a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is not a directory, including devices, sockets and
    /// symlinks that do not resolve to a directory.
    File,
}

/// One immediate child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    /// Base name exactly as the listing returned it, without any path
    /// separator (e.g., `main.rs`).
    pub name: OsString,
}

impl Entry {
    /// Creates a directory entry.
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            kind: EntryKind::Directory,
            name: name.into(),
        }
    }

    /// Creates a file entry.
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            kind: EntryKind::File,
            name: name.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name as shown in the tree. Bytes that are not valid UTF-8 render as
    /// U+FFFD.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Returns whether `name` is one of the `.` or `..` pseudo entries.
pub fn is_dot_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Drops `.`/`..` and moves directories ahead of files.
///
/// The partition is stable: each group keeps the order in which the
/// listing produced it. No sort is applied.
pub fn partition_entries(entries: Vec<Entry>) -> Vec<Entry> {
    let (mut directories, files): (Vec<Entry>, Vec<Entry>) = entries
        .into_iter()
        .filter(|entry| !is_dot_entry(&entry.name))
        .partition(Entry::is_dir);
    directories.extend(files);

    directories
}
