//! Tree rendering
//!
//! - `config` - render configuration
//! - `tree` - indented text renderer with per-file metadata
//! - `json` - JSON output of the built tree

mod config;
mod json;
mod tree;

pub use config::RenderConfig;
pub use json::{print_json, to_json, write_json};
pub use tree::TreeRenderer;
