//! Directory scanning primitives used by the walker.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WalkError};

use super::config::Depth;
use super::entry::EntryKind;

/// A directory waiting to be scanned, with the depth budget left at it.
#[derive(Debug)]
pub struct Pending {
    pub dir: PathBuf,
    pub depth: Depth,
}

/// Reject roots that cannot name anything on disk.
pub fn validate_root(root: &Path) -> Result<()> {
    if root.as_os_str().is_empty() {
        return Err(WalkError::InvalidArgument {
            path: root.to_path_buf(),
            reason: "path is empty",
        });
    }
    if root.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(WalkError::InvalidArgument {
            path: root.to_path_buf(),
            reason: "path contains a NUL byte",
        });
    }
    Ok(())
}

/// Read and classify every entry of `dir`.
///
/// The directory handle is drained and dropped before returning. Any error
/// while opening, iterating, or classifying aborts the scan.
pub fn read_entries(dir: &Path) -> Result<Vec<(PathBuf, EntryKind)>> {
    let entries = fs::read_dir(dir).map_err(|e| WalkError::access(dir, e))?;

    let mut scanned = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WalkError::access(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| WalkError::access(&path, e))?;
        scanned.push((path, EntryKind::from_file_type(file_type)));
    }

    tracing::trace!(dir = %dir.display(), entries = scanned.len(), "scanned directory");
    Ok(scanned)
}
