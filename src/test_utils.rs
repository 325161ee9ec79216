//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a tree `depth` levels deep with `width` subdirectories and
    /// `files` files in every directory.
    pub fn generated(depth: usize, width: usize, files: usize) -> Self {
        let tree = Self::new();
        tree.fill(Path::new(""), depth, width, files);
        tree
    }

    fn fill(&self, rel: &Path, depth: usize, width: usize, files: usize) {
        for i in 0..files {
            self.add_file(&rel.join(format!("file_{}.txt", i)).to_string_lossy(), "x");
        }
        if depth == 0 {
            return;
        }
        for i in 0..width {
            let sub = rel.join(format!("dir_{}", i));
            self.add_dir(&sub.to_string_lossy());
            self.fill(&sub, depth - 1, width, files);
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
