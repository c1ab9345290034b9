//! snipdoc — render documentation blocks from a tree of code snippets.
//!
//! Subcommands:
//!
//! - **parse**: `snipdoc parse < file.ts` or `snipdoc parse src/*.ts`
//! - **show**: `snipdoc show snippets hooks/useScroll.ts`
//! - **tree**: `snipdoc tree snippets --json`
//! - **build**: `snipdoc build snippets -o docs/snippets`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use snipdoc::loader;
use snipdoc::parser::{ParseOptions, DEFAULT_LANGUAGE};
use snipdoc::render::{self, tree, Renderer};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "snipdoc",
    version,
    about = "Extract and render documentation blocks from code snippets"
)]
struct Cli {
    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown", global = true)]
    format: String,

    /// Language tag for fenced example and source blocks
    #[arg(long, default_value = DEFAULT_LANGUAGE, global = true)]
    lang: String,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse files (glob patterns supported) or stdin and print the result
    Parse {
        /// Input files. If omitted, reads from stdin.
        files: Vec<String>,
    },

    /// Load one snippet by its path relative to ROOT and print it
    Show {
        /// Snippet root directory
        root: PathBuf,
        /// Snippet path relative to the root
        path: String,
    },

    /// List the snippet tree under ROOT
    Tree {
        /// Snippet root directory
        root: PathBuf,
        /// Print as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Render every snippet under ROOT into an output directory
    Build {
        /// Snippet root directory
        root: PathBuf,
        /// Output directory
        #[arg(short = 'o', long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let options = ParseOptions {
        language: cli.lang.clone(),
    };

    match &cli.command {
        Commands::Parse { files } => parse_cmd(&cli, &options, files),
        Commands::Show { root, path } => show_cmd(&cli, &options, root, path),
        Commands::Tree { root, json } => tree_cmd(root, *json),
        Commands::Build { root, output } => build_cmd(&cli, &options, root, output),
    }
}

/// parse: render stdin, or each matched file, to stdout.
fn parse_cmd(cli: &Cli, options: &ParseOptions, files: &[String]) -> Result<()> {
    let renderer = render::create_renderer(&cli.format, &cli.lang)?;

    if files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let snippet = loader::parse_snippet("stdin", &input, options);
        print!("{}", renderer.render(&snippet)?);
        return Ok(());
    }

    for path in expand_globs(files)? {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let snippet = loader::parse_snippet(&path.to_string_lossy(), &content, options);
        print!("{}", renderer.render(&snippet)?);
    }
    Ok(())
}

/// show: one snippet from the tree.
fn show_cmd(cli: &Cli, options: &ParseOptions, root: &Path, path: &str) -> Result<()> {
    let renderer = render::create_renderer(&cli.format, &cli.lang)?;
    let snippet = loader::load_snippet(root, path, options)?;
    print!("{}", renderer.render(&snippet)?);
    Ok(())
}

/// tree: the directory listing, as outline or JSON.
fn tree_cmd(root: &Path, json: bool) -> Result<()> {
    let entries = loader::list_tree(root)
        .with_context(|| format!("failed to list {}", root.display()))?;
    if json {
        print!("{}", tree::render_json(&entries)?);
    } else {
        print!("{}", tree::render_outline(&entries));
    }
    Ok(())
}

/// build: render every file of the tree, mirroring its layout under `output`.
fn build_cmd(cli: &Cli, options: &ParseOptions, root: &Path, output: &Path) -> Result<()> {
    let renderer = render::create_renderer(&cli.format, &cli.lang)?;

    let entries = loader::list_tree(root)
        .with_context(|| format!("failed to list {}", root.display()))?;

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory: {}", output.display()))?;

    let mut written = 0usize;
    for rel in loader::file_paths(&entries) {
        let snippet = match loader::load_snippet(root, &rel, options) {
            Ok(s) => s,
            Err(e) => {
                warn!("skipping {}: {}", rel, e);
                continue;
            }
        };

        let out_path = output_path(output, &rel, renderer.as_ref());
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&out_path, renderer.render(&snippet)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        debug!("wrote {}", out_path.display());
        written += 1;
    }

    info!("rendered {} snippets into {}", written, output.display());
    Ok(())
}

/// "hooks/useScroll.ts" → "<output>/hooks/useScroll.ts.md"
///
/// The source extension is kept so `list.ts` and `list.tsx` stay distinct.
fn output_path(output: &Path, rel: &str, renderer: &dyn Renderer) -> PathBuf {
    output.join(format!("{}.{}", rel, renderer.file_extension()))
}

/// File extensions picked up when a bare directory is passed to `parse`.
const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Resolve `parse` arguments to files: directories are scanned one level
/// deep for supported sources, everything else is a glob pattern.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let dir = Path::new(pattern);
        let matched: Vec<PathBuf> = if dir.is_dir() {
            fs::read_dir(dir)
                .with_context(|| format!("failed to read directory: {}", dir.display()))?
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| is_supported(p))
                .collect()
        } else {
            glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?
                .filter_map(|r| r.ok())
                .collect()
        };

        let before = files.len();
        files.extend(matched.into_iter().filter(|p| p.is_file()));
        if files.len() == before {
            warn!(pattern = pattern.as_str(), "no files matched");
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
