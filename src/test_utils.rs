//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Paths are given relative to the root; parent directories are created as
/// needed. The tree is removed when dropped.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// Create a new empty temporary tree.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Root path of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given contents, creating parents as needed.
    pub fn add_file(&self, path: &str, contents: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, contents).expect("Failed to write file");
        full_path
    }

    /// Create a (possibly nested) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
