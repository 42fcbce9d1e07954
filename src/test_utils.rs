//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
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

    /// Create a symlink at `link` pointing to `target` (taken verbatim).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: impl AsRef<Path>, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Populate `width` files and `width` subdirectories per level, `depth` levels deep.
    pub fn add_fanout(&self, root: &str, width: usize, depth: usize) -> PathBuf {
        let root_path = self.add_dir(root);
        let mut level = vec![root.to_string()];
        for _ in 0..depth {
            let mut next = Vec::new();
            for dir in &level {
                for i in 0..width {
                    self.add_file(&format!("{}/file_{}.txt", dir, i), "content");
                    let sub = format!("{}/dir_{}", dir, i);
                    self.add_dir(&sub);
                    next.push(sub);
                }
            }
            level = next;
        }
        root_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
