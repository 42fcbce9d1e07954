//! `std::fs` backed filesystem

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::metadata::FileMetadata;

use super::{FileSystem, PathFlags};

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn classify(&self, path: &Path) -> io::Result<PathFlags> {
        let meta = fs::symlink_metadata(path)?;
        let is_symlink = meta.file_type().is_symlink();
        let is_dir = if is_symlink {
            // Dangling or unreadable targets are not directories
            fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            meta.is_dir()
        };
        Ok(PathFlags { is_symlink, is_dir })
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        Ok(FileMetadata {
            size: meta.len(),
            modified: meta.modified()?,
        })
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}
