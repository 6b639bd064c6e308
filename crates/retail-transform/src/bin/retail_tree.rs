//! Print a directory tree to stdout.
//!
//! ```bash
//! cargo run --bin retail-tree -- .
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use retail_common::logging::{init_logging, LogConfig, LogLevel};
use retail_transform::tree::write_tree;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "retail-tree")]
#[command(author, version, about = "Print a directory tree")]
struct Cli {
    /// Directory to print
    directory: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::builder()
        .level(LogLevel::Warn)
        .log_file_prefix("retail-tree")
        .build()
        .merge_env()?;
    let _guard = init_logging(&log_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, &cli.directory).context("Failed to write tree")?;
    out.flush()?;

    Ok(())
}
