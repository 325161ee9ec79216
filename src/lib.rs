//! libsync - depth-bounded directory listings
//!
//! ```no_run
//! let files = libsync::get_files("music", 1)?;
//! for file in files {
//!     println!("{}", file.display());
//! }
//! # Ok::<(), libsync::WalkError>(())
//! ```

pub mod compare;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use compare::{Report, changed, compare, created, deleted};
pub use error::{Result, WalkError};
pub use output::{ListingEntry, ListingFormatter, OutputConfig, print_json, resolve_entries};
pub use tree::{
    Depth, EntryKind, Selection, TreeWalker, WalkerConfig, get_directories, get_files, get_objects,
};
