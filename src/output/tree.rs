//! Indented tree renderer
//!
//! Depth-first, pre-order. Each line is `<indent><TAG> <name>`; plain files
//! also get their size and modification time, fetched when the line is
//! written. A metadata failure only drops that suffix.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};
use tracing::warn;

use crate::error::TreeError;
use crate::fs::{FileSystem, LocalFs};
use crate::tree::{NodeKind, TreeNode};

use super::config::RenderConfig;

/// Renderer for a built tree.
pub struct TreeRenderer<F: FileSystem = LocalFs> {
    config: RenderConfig,
    fs: F,
}

impl TreeRenderer<LocalFs> {
    pub fn new(config: RenderConfig) -> Self {
        Self::with_fs(config, LocalFs)
    }
}

impl<F: FileSystem> TreeRenderer<F> {
    pub fn with_fs(config: RenderConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render to a plain string, without colors.
    pub fn format(&self, node: &TreeNode) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, node)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut lock = stdout.lock();
        self.write(&mut lock, node)?;
        lock.flush()
    }

    /// Render starting at the configured start depth.
    pub fn write<W: WriteColor>(&self, out: &mut W, node: &TreeNode) -> io::Result<()> {
        self.render_at(out, node, self.config.start_depth)
    }

    /// Render `node` as if it sat at `depth`; its children go one level deeper.
    pub fn render_at<W: WriteColor>(
        &self,
        out: &mut W,
        node: &TreeNode,
        depth: usize,
    ) -> io::Result<()> {
        if self.config.past_max_depth(depth) {
            return Ok(());
        }

        let indent = self.config.indent(depth).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("indentation for depth {} is too large", depth),
            )
        })?;
        // Padding streams fill chars; the indent is never allocated
        write!(out, "{:indent$}", "")?;
        out.set_color(&tag_color(node.kind))?;
        write!(out, "{}", node.kind.tag())?;
        out.reset()?;
        write!(out, " {}", node.name)?;

        if node.is_file() {
            if let Some(summary) = self.file_summary(node) {
                write!(out, ": {}", summary)?;
            }
        }
        writeln!(out)?;

        for child in &node.children {
            self.render_at(out, child, depth.saturating_add(1))?;
        }
        Ok(())
    }

    fn file_summary(&self, node: &TreeNode) -> Option<String> {
        match self.fs.file_metadata(&node.path) {
            Ok(meta) => Some(meta.summary()),
            Err(source) => {
                let err = TreeError::Metadata {
                    path: node.path.clone(),
                    source,
                };
                warn!(path = %node.path.display(), "{}", err);
                None
            }
        }
    }
}

fn tag_color(kind: NodeKind) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match kind {
        NodeKind::Directory => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
        }
        NodeKind::Symlink => {
            spec.set_fg(Some(Color::Cyan));
        }
        NodeKind::File => {}
    }
    spec
}
