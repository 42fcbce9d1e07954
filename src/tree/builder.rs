//! TreeBuilder - builds the full tree in memory
//!
//! Traversal is depth-first in listing order. Failures are contained at the
//! smallest scope: an entry that cannot be classified is skipped, a directory
//! that cannot be listed is dropped with its subtree, and neither affects its
//! siblings.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, TreeError};
use crate::fs::{FileSystem, LocalFs, PathFlags};

use super::config::BuilderConfig;
use super::node::TreeNode;

/// Recursively mirrors a directory subtree into a [`TreeNode`].
pub struct TreeBuilder<F: FileSystem = LocalFs> {
    config: BuilderConfig,
    fs: F,
}

impl TreeBuilder<LocalFs> {
    pub fn new(config: BuilderConfig) -> Self {
        Self::with_fs(config, LocalFs)
    }
}

impl<F: FileSystem> TreeBuilder<F> {
    pub fn with_fs(config: BuilderConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build the tree rooted at `root`, reporting a root failure and returning `None`.
    pub fn build(&self, root: &Path) -> Option<TreeNode> {
        self.build_at(root, 0)
    }

    /// Like [`build`](Self::build), starting the depth count at `depth`.
    pub fn build_at(&self, path: &Path, depth: usize) -> Option<TreeNode> {
        self.try_build_at(path, depth).unwrap_or_else(|err| {
            report(&err);
            None
        })
    }

    pub fn try_build(&self, root: &Path) -> Result<Option<TreeNode>> {
        self.try_build_at(root, 0)
    }

    /// Build the node for `path` at `depth`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `depth` is past
    /// the depth limit. Errors concern `path` itself; failures of descendants
    /// are reported and skipped.
    pub fn try_build_at(&self, path: &Path, depth: usize) -> Result<Option<TreeNode>> {
        let mut ancestors = Vec::new();
        self.build_node(path, depth, &mut ancestors)
    }

    fn build_node(
        &self,
        path: &Path,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Option<TreeNode>> {
        if self.config.past_max_depth(depth) {
            return Ok(None);
        }

        let flags = self
            .fs
            .classify(path)
            .map_err(|source| TreeError::from_classify(path.to_path_buf(), source))?;
        let mut node = TreeNode::new(path, flags);

        // Children would all be cut off, so don't list at all
        if !self.should_descend(flags)
            || self.config.past_max_depth(depth.saturating_add(1))
        {
            return Ok(Some(node));
        }

        let tracked = if self.config.detect_cycles {
            match self.fs.canonicalize(path) {
                Ok(canonical) if ancestors.contains(&canonical) => {
                    warn!(
                        path = %path.display(),
                        target = %canonical.display(),
                        "symlink cycle detected, not descending"
                    );
                    return Ok(Some(node));
                }
                Ok(canonical) => {
                    ancestors.push(canonical);
                    true
                }
                Err(_) => false,
            }
        } else {
            false
        };

        let result = self.attach_children(&mut node, depth, ancestors);
        if tracked {
            ancestors.pop();
        }
        result.map(|()| Some(node))
    }

    fn attach_children(
        &self,
        node: &mut TreeNode,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let entries = self
            .fs
            .list_dir(&node.path)
            .map_err(|source| TreeError::Listing {
                path: node.path.clone(),
                source,
            })?;

        for entry in entries {
            match self.build_node(&entry, depth.saturating_add(1), ancestors) {
                Ok(Some(child)) => node.children.push(child),
                Ok(None) => {}
                Err(err) => report(&err),
            }
        }
        Ok(())
    }

    /// Plain directories always; symlinks only when their target is a directory.
    fn should_descend(&self, flags: PathFlags) -> bool {
        if flags.is_symlink {
            self.config.follow_symlinks && flags.is_dir
        } else {
            flags.is_dir
        }
    }
}

fn report(err: &TreeError) {
    warn!(path = %err.path().display(), "{}", err);
}
