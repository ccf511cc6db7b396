//! Extract command implementation.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use vpkx_core::CollisionPolicy;
use vpkx_core::ExtractConfig;
use vpkx_core::extract_archive;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let base_dir = env::current_dir().context("failed to get current directory")?;

    let collision_policy = if args.skip_colliding_entries {
        CollisionPolicy::SkipEntry
    } else {
        CollisionPolicy::SkipDirectories
    };
    let config = ExtractConfig {
        collision_policy,
        ..Default::default()
    };

    let report = add_archive_context(
        extract_archive(&args.archive, &base_dir, &config),
        &args.archive,
    )?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}
