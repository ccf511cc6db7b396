//! Error conversion utilities for CLI.
//!
//! Converts vpkx-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use vpkx_core::ExtractionError;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::ArchiveOpen { path, reason } => {
            anyhow!(
                "Failed to open VPK file '{}': {}\n\
                 HINT: For multi-part archives pass the *_dir.vpk file.",
                path.display(),
                reason
            )
        }
        ExtractionError::InvalidArchivePath { path } => {
            anyhow!(
                "Cannot derive an output directory name from '{}'\n\
                 HINT: Pass the path of the .vpk file itself.",
                path.display()
            )
        }
        ExtractionError::PathTooLong { path, len, max } => {
            anyhow!(
                "Path too long while extracting '{}': {} ({len} characters, limit {max})\n\
                 HINT: Rename the archive to shorten the output directory name.",
                archive.display(),
                path
            )
        }
        ExtractionError::DirectoryCreate { path, source } => {
            anyhow!(
                "Failed to create directory '{}': {}\n\
                 HINT: Check that the current directory is writable.",
                path.display(),
                source
            )
        }
        ExtractionError::EntryRead { path, reason } => {
            anyhow!(
                "Failed to read '{}' from '{}': {}\n\
                 HINT: The archive may be corrupted or a data file (*_000.vpk) may be missing.",
                path,
                archive.display(),
                reason
            )
        }
        ExtractionError::OutputWrite { path, source } => {
            anyhow!("Failed to write '{}': {}", path.display(), source)
        }
        // Skipped inside the extractor, never returned.
        skipped @ (ExtractionError::EmptyPath | ExtractionError::PathTraversal { .. }) => {
            anyhow::Error::from(skipped)
                .context(format!("Error processing archive '{}'", archive.display()))
        }
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}
