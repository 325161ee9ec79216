//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Resolve each path to its canonical, symlink-free absolute form before printing
    pub canonicalize: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            canonicalize: true,
        }
    }
}
