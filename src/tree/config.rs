//! Configuration types for tree walkers

use std::fmt;

/// How many levels below the root a walk may descend.
///
/// `Limited(0)` lists only the root's immediate children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Limited(u32),
    Unbounded,
}

impl Depth {
    /// The budget for a directory one level further down, or `None` if the
    /// walk must not descend from here.
    pub fn descend(self) -> Option<Depth> {
        match self {
            Depth::Limited(0) => None,
            Depth::Limited(n) => Some(Depth::Limited(n - 1)),
            Depth::Unbounded => Some(Depth::Unbounded),
        }
    }
}

/// Negative values mean unbounded.
impl From<i32> for Depth {
    fn from(depth: i32) -> Self {
        u32::try_from(depth).map_or(Depth::Unbounded, Depth::Limited)
    }
}

/// `None` means unbounded.
impl From<Option<u32>> for Depth {
    fn from(depth: Option<u32>) -> Self {
        depth.map_or(Depth::Unbounded, Depth::Limited)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Limited(n) => write!(f, "{}", n),
            Depth::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Which entry kinds a walk keeps in its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Directories and regular files
    #[default]
    Objects,
    Files,
    Directories,
}

impl Selection {
    pub fn keeps_files(self) -> bool {
        matches!(self, Selection::Objects | Selection::Files)
    }

    pub fn keeps_directories(self) -> bool {
        matches!(self, Selection::Objects | Selection::Directories)
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    pub depth: Depth,
    pub selection: Selection,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            depth: Depth::Limited(0),
            selection: Selection::Objects,
        }
    }
}
