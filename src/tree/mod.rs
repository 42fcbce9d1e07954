//! Directory tree building
//!
//! - `node` - the in-memory `TreeNode` and its `NodeKind`
//! - `config` - builder configuration
//! - `builder` - `TreeBuilder`, the recursive traversal

mod builder;
mod config;
mod node;

pub use builder::TreeBuilder;
pub use config::BuilderConfig;
pub use node::{NodeKind, TreeNode, display_name};
