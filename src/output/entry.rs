//! Resolving walked paths into printable entries

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, WalkError};
use crate::tree::EntryKind;

/// A listed path together with its kind, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl ListingEntry {
    /// Pair `path` with the kind it was classified as during the walk and,
    /// if asked, canonicalize it.
    pub fn resolve(path: &Path, kind: EntryKind, canonicalize: bool) -> Result<Self> {
        let path = if canonicalize {
            fs::canonicalize(path).map_err(|e| WalkError::access(path, e))?
        } else {
            path.to_path_buf()
        };
        Ok(Self { path, kind })
    }
}

/// Resolve every walked entry, failing on the first one that cannot be read.
pub fn resolve_entries(
    entries: &[(PathBuf, EntryKind)],
    canonicalize: bool,
) -> Result<Vec<ListingEntry>> {
    entries
        .iter()
        .map(|(path, kind)| ListingEntry::resolve(path, *kind, canonicalize))
        .collect()
}
