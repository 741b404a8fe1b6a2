use clap::Parser;
use std::path::{Path, PathBuf};

pub mod command;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: command::Commands,
}

/// The directory an EPUB is extracted into when `--out` is not given.
pub fn default_work_dir(epub: &Path) -> PathBuf {
    let stem = epub
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    std::env::temp_dir().join(format!("epub-preview_{stem}_{}", std::process::id()))
}
