//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vpkx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the VPK archive; files are extracted to ./<name>_dir
    #[arg(value_name = "VPK_FILE")]
    pub archive: PathBuf,

    /// Enable verbose output and per-entry logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Skip entries placed directly in the output directory instead of
    /// only skipping their directory creation
    #[arg(long)]
    pub skip_colliding_entries: bool,
}
