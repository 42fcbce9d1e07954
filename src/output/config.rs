//! Output configuration types

const DEFAULT_INDENT_WIDTH: usize = 3;

/// Configuration for tree rendering.
///
/// The depth values here are independent of the builder's depth limit: a tree
/// can be built deep and rendered shallow, or the other way around.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Indentation level of the root line
    pub start_depth: usize,
    /// Deepest level still printed; compared against the indentation level.
    pub max_depth: Option<usize>,
    /// Spaces per indentation level
    pub indent_width: usize,
    pub use_color: bool,
}

impl RenderConfig {
    /// Check if a node at `depth` is cut off
    pub fn past_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }

    /// Number of spaces before a node at `depth`, `None` on overflow.
    pub fn indent(&self, depth: usize) -> Option<usize> {
        depth.checked_mul(self.indent_width)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            start_depth: 0,
            max_depth: None,
            indent_width: DEFAULT_INDENT_WIDTH,
            use_color: true,
        }
    }
}
