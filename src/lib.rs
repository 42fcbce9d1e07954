//! fstree - mirror a directory subtree in memory and print it as an indented tree

pub mod error;
pub mod fs;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use fs::{FileSystem, LocalFs, PathFlags};
pub use metadata::FileMetadata;
pub use output::{RenderConfig, TreeRenderer, print_json};
pub use tree::{BuilderConfig, NodeKind, TreeBuilder, TreeNode};
