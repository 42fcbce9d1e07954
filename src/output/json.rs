//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TreeNode;

/// Print the built tree as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(&mut lock, node)?;
    lock.flush()
}

/// Write the built tree as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, node: &TreeNode) -> io::Result<()> {
    writeln!(out, "{}", to_json(node)?)
}

pub fn to_json(node: &TreeNode) -> io::Result<String> {
    serde_json::to_string_pretty(node).map_err(io::Error::other)
}
