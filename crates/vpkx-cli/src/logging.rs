//! Log initialisation.
//!
//! `RUST_LOG` takes precedence; otherwise `--verbose` shows per-entry
//! messages and `--quiet` keeps only errors.

use env_logger::Env;
use log::LevelFilter;

fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

pub fn init(verbose: bool, quiet: bool) {
    let level = default_level(verbose, quiet).to_string().to_lowercase();
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
