//! In-memory filesystem for unit tests
//!
//! Paths are absolute. Symlink targets are absolute and are resolved through
//! every component, so listing a directory through a symlink yields paths
//! below the link, like the real filesystem does.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::metadata::FileMetadata;

use super::{FileSystem, PathFlags};

const MAX_SYMLINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum FakeEntry {
    File { size: u64, modified: SystemTime },
    Dir { children: Vec<OsString> },
    Symlink { target: PathBuf },
}

#[derive(Debug, Clone)]
pub(crate) struct FakeFs {
    entries: HashMap<PathBuf, FakeEntry>,
    denied: HashSet<PathBuf>,
    failing_listings: HashSet<PathBuf>,
    failing_metadata: HashSet<PathBuf>,
}

impl FakeFs {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            PathBuf::from("/"),
            FakeEntry::Dir {
                children: Vec::new(),
            },
        );
        Self {
            entries,
            denied: HashSet::new(),
            failing_listings: HashSet::new(),
            failing_metadata: HashSet::new(),
        }
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.insert(
            Path::new(path),
            FakeEntry::Dir {
                children: Vec::new(),
            },
        );
        self
    }

    pub fn file(mut self, path: &str, size: u64) -> Self {
        let modified = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        self.insert(Path::new(path), FakeEntry::File { size, modified });
        self
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        self.insert(
            Path::new(path),
            FakeEntry::Symlink {
                target: PathBuf::from(target),
            },
        );
        self
    }

    /// Make classification of `path` fail with `PermissionDenied`.
    pub fn deny(mut self, path: &str) -> Self {
        self.denied.insert(PathBuf::from(path));
        self
    }

    /// Remove `path` while keeping its name in the parent's listing, as if it
    /// was deleted between listing and classification.
    pub fn vanish(mut self, path: &str) -> Self {
        self.entries.remove(Path::new(path));
        self
    }

    pub fn fail_listing(mut self, path: &str) -> Self {
        self.failing_listings.insert(PathBuf::from(path));
        self
    }

    pub fn fail_metadata(mut self, path: &str) -> Self {
        self.failing_metadata.insert(PathBuf::from(path));
        self
    }

    /// Insert an entry, creating missing parents and appending it to its
    /// parent's listing in insertion order.
    fn insert(&mut self, path: &Path, entry: FakeEntry) {
        let is_new = !self.entries.contains_key(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if !self.entries.contains_key(parent) {
                self.insert(
                    parent,
                    FakeEntry::Dir {
                        children: Vec::new(),
                    },
                );
            }
            if let Some(FakeEntry::Dir { children }) = self.entries.get_mut(parent) {
                if is_new {
                    children.push(name.to_os_string());
                }
            }
        }
        self.entries.insert(path.to_path_buf(), entry);
    }

    fn resolve(&self, path: &Path, follow_last: bool) -> io::Result<PathBuf> {
        let components: Vec<_> = path.components().collect();
        let mut resolved = PathBuf::new();
        let mut hops = 0;
        for (i, component) in components.iter().enumerate() {
            resolved.push(component);
            if i + 1 == components.len() && !follow_last {
                break;
            }
            while let Some(FakeEntry::Symlink { target }) = self.entries.get(&resolved) {
                hops += 1;
                if hops > MAX_SYMLINK_HOPS {
                    return Err(io::Error::other("too many levels of symbolic links"));
                }
                resolved = target.clone();
            }
        }
        Ok(resolved)
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        )
    }
}

impl FileSystem for FakeFs {
    fn classify(&self, path: &Path) -> io::Result<PathFlags> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let link = self.resolve(path, false)?;
        let entry = self.entries.get(&link).ok_or_else(|| Self::not_found(path))?;
        let is_symlink = matches!(entry, FakeEntry::Symlink { .. });
        let is_dir = self
            .resolve(path, true)
            .ok()
            .and_then(|real| self.entries.get(&real))
            .is_some_and(|e| matches!(e, FakeEntry::Dir { .. }));
        Ok(PathFlags { is_symlink, is_dir })
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if self.failing_listings.contains(path) {
            return Err(io::Error::other("entry vanished during listing"));
        }
        let real = self.resolve(path, true)?;
        match self.entries.get(&real) {
            Some(FakeEntry::Dir { children }) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            Some(_) => Err(io::Error::other("not a directory")),
            None => Err(Self::not_found(path)),
        }
    }

    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        if self.failing_metadata.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "file was removed",
            ));
        }
        let real = self.resolve(path, true)?;
        match self.entries.get(&real) {
            Some(FakeEntry::File { size, modified }) => Ok(FileMetadata {
                size: *size,
                modified: *modified,
            }),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )),
            None => Err(Self::not_found(path)),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let real = self.resolve(path, true)?;
        if self.entries.contains_key(&real) {
            Ok(real)
        } else {
            Err(Self::not_found(path))
        }
    }
}
