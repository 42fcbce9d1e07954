//! Configuration for tree building

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Deepest level (root = 0) that is still attached to the tree.
    pub max_depth: Option<usize>,
    /// Descend into symlinks that resolve to directories.
    pub follow_symlinks: bool,
    /// Stop at directory symlinks that point back into the current descent path.
    pub detect_cycles: bool,
}

impl BuilderConfig {
    /// Check if `depth` lies beyond the depth limit
    pub fn past_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: true,
            detect_cycles: false,
        }
    }
}
