//! The in-memory tree

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::fs::PathFlags;

/// Classification of a node, decided once when the node is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
    Symlink,
}

impl NodeKind {
    /// A symlink is always `Symlink`, even when it resolves to a directory.
    pub fn from_flags(flags: PathFlags) -> Self {
        if flags.is_symlink {
            NodeKind::Symlink
        } else if flags.is_dir {
            NodeKind::Directory
        } else {
            NodeKind::File
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::File => "[FILE]",
            NodeKind::Directory => "[DIR]",
            NodeKind::Symlink => "[SYMLINK]",
        }
    }
}

/// One filesystem path and the nodes below it.
///
/// Each node owns its children. Only directories, and symlinks whose target
/// is a followed directory, have children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    /// Path the node was built from, used to fetch metadata at print time.
    pub path: PathBuf,
    /// Whether the path resolves to a directory (set for directories and
    /// for symlinks pointing at one).
    pub target_is_dir: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(path: &Path, flags: PathFlags) -> Self {
        Self {
            name: display_name(path),
            kind: NodeKind::from_flags(flags),
            path: path.to_path_buf(),
            target_is_dir: flags.is_dir,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == NodeKind::Symlink
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// Number of levels below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// Final path component, or the whole path when there is none (`.`, `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
