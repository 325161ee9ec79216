//! Entry classification

use std::fs::FileType;

use serde::Serialize;

/// Kind of a directory entry, resolved without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EntryKind {
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "file")]
    RegularFile,
    /// Symlinks, devices, sockets, FIFOs
    #[serde(rename = "other")]
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::RegularFile
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}
