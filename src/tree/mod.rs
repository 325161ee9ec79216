//! Directory tree walking logic
//!
//! A walk lists the entries beneath a root directory, descending a bounded
//! number of levels, and returns them as a single sorted `Vec<PathBuf>`.
//! `get_objects`, `get_files` and `get_directories` are the usual entry
//! points; `TreeWalker` takes an explicit `WalkerConfig`.

mod config;
mod entry;
mod traversal;
mod walker;

pub use config::{Depth, Selection, WalkerConfig};
pub use entry::EntryKind;
pub use walker::{TreeWalker, get_directories, get_files, get_objects};
