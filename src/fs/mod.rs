//! Filesystem queries used by the tree builder and renderer
//!
//! Traversal never touches `std::fs` directly. It goes through the
//! [`FileSystem`] trait so the traversal policy can be exercised against an
//! in-memory filesystem in tests.

mod local;

#[cfg(test)]
pub(crate) mod fake;

use std::io;
use std::path::{Path, PathBuf};

use crate::metadata::FileMetadata;

pub use local::LocalFs;

/// Classification of a single path, queried once per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathFlags {
    /// The path itself is a symbolic link (dangling or not).
    pub is_symlink: bool,
    /// The path is a directory, following symlinks.
    pub is_dir: bool,
}

/// The filesystem capabilities tree building and rendering depend on.
pub trait FileSystem {
    /// Classify `path` without following a trailing symlink for `is_symlink`.
    ///
    /// Returns `NotFound` only when nothing exists at `path`; a dangling
    /// symlink classifies successfully.
    fn classify(&self, path: &Path) -> io::Result<PathFlags>;

    /// List the direct entries of a directory in the order the platform yields them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Size and modification time of a file, following symlinks.
    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadata>;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn classify(&self, path: &Path) -> io::Result<PathFlags> {
        (**self).classify(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_dir(path)
    }

    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        (**self).file_metadata(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}
