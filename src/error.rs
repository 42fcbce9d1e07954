//! Error taxonomy for tree building and rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

/// Failures that can occur while building or rendering a tree.
///
/// Every variant is contained at the smallest scope it applies to: a single
/// entry (`PathNotFound`, `Access`), a single subtree (`Listing`) or a single
/// node's metadata suffix (`Metadata`).
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("path does not exist: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("cannot access {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot list {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read metadata of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Map a failed classification of `path` to the matching variant.
    pub fn from_classify(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            TreeError::PathNotFound { path }
        } else {
            TreeError::Access { path, source }
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            TreeError::PathNotFound { path }
            | TreeError::Access { path, .. }
            | TreeError::Listing { path, .. }
            | TreeError::Metadata { path, .. } => path,
        }
    }
}
