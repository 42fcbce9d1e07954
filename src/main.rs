//! CLI entry point for fstree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use fstree::logging::init_logging;
use fstree::{BuilderConfig, RenderConfig, TreeBuilder, TreeRenderer, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(about = "Print a directory subtree with file sizes and modification times")]
#[command(version)]
struct Args {
    /// Root path to display
    path: PathBuf,

    /// Indentation level of the root line
    #[arg(default_value_t = 0)]
    start_depth: usize,

    /// Deepest indentation level printed, start depth included
    /// (unbounded when omitted or negative)
    #[arg(allow_negative_numbers = true)]
    depth_limit: Option<i64>,

    /// Stop building the tree N levels below the root
    #[arg(short = 'L', long = "build-depth", value_name = "N")]
    build_depth: Option<usize>,

    /// Do not descend into symlinks that point at directories
    #[arg(long = "no-follow")]
    no_follow: bool,

    /// Do not descend into directory symlinks that loop back to an ancestor
    #[arg(long = "detect-cycles")]
    detect_cycles: bool,

    /// Spaces per indentation level
    #[arg(long = "indent", value_name = "N", default_value = "3")]
    indent: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output the built tree as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version go to stdout and succeed
        if !e.use_stderr() {
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });

    init_logging();

    let builder = TreeBuilder::new(BuilderConfig {
        max_depth: args.build_depth,
        follow_symlinks: !args.no_follow,
        detect_cycles: args.detect_cycles,
    });

    let root = match builder.try_build(&args.path) {
        Ok(Some(root)) => root,
        Ok(None) => {
            eprintln!("fstree: failed to build the file system tree");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("fstree: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&root)
    } else {
        let renderer = TreeRenderer::new(RenderConfig {
            start_depth: args.start_depth,
            max_depth: args.depth_limit.and_then(|limit| usize::try_from(limit).ok()),
            indent_width: args.indent,
            use_color: should_use_color(args.color),
        });
        renderer.print(&root)
    };

    if let Err(e) = result {
        eprintln!("fstree: error writing output: {}", e);
        process::exit(1);
    }
}
