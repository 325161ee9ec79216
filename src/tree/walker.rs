//! TreeWalker - collects a sorted, depth-bounded listing of a directory

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::config::{Depth, Selection, WalkerConfig};
use super::entry::EntryKind;
use super::traversal::{Pending, read_entries, validate_root};

/// Walks a directory tree and returns every kept entry as one sorted list.
///
/// Pending directories live on an explicit stack rather than the call stack,
/// so deep trees cannot overflow it. Symlinks are classified as
/// [`EntryKind::Other`] and are neither listed nor followed.
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn walk(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        Ok(self
            .walk_entries(root)?
            .into_iter()
            .map(|(path, _)| path)
            .collect())
    }

    /// Like [`walk`](Self::walk), but keeps the kind each entry was
    /// classified as during the scan.
    pub fn walk_entries(&self, root: impl AsRef<Path>) -> Result<Vec<(PathBuf, EntryKind)>> {
        let root = root.as_ref();
        validate_root(root)?;

        tracing::debug!(
            root = %root.display(),
            depth = %self.config.depth,
            selection = ?self.config.selection,
            "walk started"
        );

        let selection = self.config.selection;
        let mut listed = Vec::new();
        let mut pending = vec![Pending {
            dir: root.to_path_buf(),
            depth: self.config.depth,
        }];

        while let Some(Pending { dir, depth }) = pending.pop() {
            for (path, kind) in read_entries(&dir)? {
                match kind {
                    EntryKind::Directory => {
                        if let Some(next) = depth.descend() {
                            pending.push(Pending {
                                dir: path.clone(),
                                depth: next,
                            });
                        }
                        if selection.keeps_directories() {
                            listed.push((path, kind));
                        }
                    }
                    EntryKind::RegularFile => {
                        if selection.keeps_files() {
                            listed.push((path, kind));
                        }
                    }
                    EntryKind::Other => {
                        tracing::trace!(path = %path.display(), "skipping non-regular entry");
                    }
                }
            }
        }

        listed.sort();
        tracing::debug!(root = %root.display(), entries = listed.len(), "walk finished");
        Ok(listed)
    }
}

fn walk_with(root: &Path, depth: Depth, selection: Selection) -> Result<Vec<PathBuf>> {
    TreeWalker::new(WalkerConfig { depth, selection }).walk(root)
}

/// Every directory and regular file under `root`, descending `depth` levels.
///
/// Negative depths descend without limit.
pub fn get_objects(root: impl AsRef<Path>, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    walk_with(root.as_ref(), depth.into(), Selection::Objects)
}

/// Every regular file under `root`, descending `depth` levels.
pub fn get_files(root: impl AsRef<Path>, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    walk_with(root.as_ref(), depth.into(), Selection::Files)
}

/// Every directory under `root`, descending `depth` levels.
pub fn get_directories(root: impl AsRef<Path>, depth: impl Into<Depth>) -> Result<Vec<PathBuf>> {
    walk_with(root.as_ref(), depth.into(), Selection::Directories)
}
