//! Error types for directory walking

use std::io;
use std::path::{Path, PathBuf};

/// Errors returned by the walker and the comparison helpers.
///
/// No partial results accompany an error: the first failure aborts the call.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The root or a nested entry could not be read: missing, not a directory,
    /// permission denied, or an I/O failure during the scan.
    #[error("cannot access '{}': {source}", path.display())]
    FilesystemAccess { path: PathBuf, source: io::Error },
    /// The root path itself is malformed.
    #[error("invalid path '{}': {reason}", path.display())]
    InvalidArgument { path: PathBuf, reason: &'static str },
}

impl WalkError {
    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WalkError::FilesystemAccess {
            path: path.into(),
            source,
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            WalkError::FilesystemAccess { path, .. } => path,
            WalkError::InvalidArgument { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
