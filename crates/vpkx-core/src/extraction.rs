//! Sequential extraction of archive entries.
//!
//! Every entry either ends in an [`EntryOutcome`] (written or skipped) or
//! in an error that aborts the run. Skips are decided here and never
//! surface as `Err`.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::info;
use log::warn;

use crate::CollisionPolicy;
use crate::ExtractConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::SkipReason;
use crate::materialize::create_nested_directories;
use crate::materialize::materialize;
use crate::pak::PakArchive;
use crate::types::OutputRoot;

/// Result of processing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry was written.
    Extracted {
        /// Filesystem path of the written file.
        destination: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
    /// The entry was skipped and extraction continues.
    Skipped(SkipReason),
}

/// Extracts the entries of one archive under `base/<root>`.
///
/// The output root must already exist; [`crate::extract_pak`] creates it
/// before constructing an `Extractor`.
#[derive(Debug)]
pub struct Extractor<'a, A: PakArchive + ?Sized> {
    archive: &'a A,
    root: &'a OutputRoot,
    base: &'a Path,
    config: &'a ExtractConfig,
    report: ExtractionReport,
}

impl<'a, A: PakArchive + ?Sized> Extractor<'a, A> {
    /// Creates an extractor writing under `base`.
    pub fn new(
        archive: &'a A,
        root: &'a OutputRoot,
        base: &'a Path,
        config: &'a ExtractConfig,
    ) -> Self {
        let report = ExtractionReport {
            output_root: root.as_str().to_owned(),
            ..ExtractionReport::default()
        };
        Self {
            archive,
            root,
            base,
            config,
            report,
        }
    }

    /// Seeds the report, e.g. with the directories created for the root.
    #[must_use]
    pub fn with_report(mut self, report: ExtractionReport) -> Self {
        self.report = report;
        self
    }

    /// Processes every entry in archive order.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error; files written before it stay on
    /// disk.
    pub fn run(mut self) -> Result<ExtractionReport> {
        let archive = self.archive;
        for raw in archive.entry_paths() {
            if let EntryOutcome::Skipped(reason) = self.extract_entry(raw)? {
                self.report.add_skipped(raw, reason);
            }
        }
        Ok(self.report)
    }

    /// Processes a single entry.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::PathTooLong` for over-long destinations
    /// - `ExtractionError::DirectoryCreate` if a parent cannot be created
    /// - `ExtractionError::EntryRead` if entry data cannot be read
    /// - `ExtractionError::OutputWrite` if the file cannot be written
    pub fn extract_entry(&mut self, raw: &str) -> Result<EntryOutcome> {
        let materialized = match materialize(raw, self.root, self.config) {
            Ok(m) => m,
            Err(err) => {
                let Some(reason) = err.skip_reason() else {
                    return Err(err);
                };
                if reason == SkipReason::EmptyPath {
                    info!("skipping empty file path");
                } else {
                    warn!("skipping entry: {err}");
                }
                return Ok(EntryOutcome::Skipped(reason));
            }
        };

        if materialized.is_collision() {
            self.report.collisions += 1;
            if self.config.collision_policy == CollisionPolicy::SkipEntry {
                info!("skipping entry in output root: {}", materialized.entry());
                return Ok(EntryOutcome::Skipped(SkipReason::Collision));
            }
            debug!(
                "parent of {} is the output root, not creating directories",
                materialized.entry()
            );
        } else {
            self.report.directories_created +=
                create_nested_directories(self.base, materialized.parent_dir())?;
        }

        let entry = materialized.entry().as_str();
        let Some(mut file) = self.archive.open_file(entry)? else {
            info!("skipping non-file or failed to open: {entry}");
            return Ok(EntryOutcome::Skipped(SkipReason::NotAFile));
        };

        if file.is_empty() {
            info!("skipping empty file: {entry}");
            return Ok(EntryOutcome::Skipped(SkipReason::EmptyEntry));
        }

        let data = file
            .read_to_vec()
            .map_err(|e| ExtractionError::EntryRead {
                path: entry.to_owned(),
                reason: e.to_string(),
            })?;
        drop(file);

        let destination = materialized.resolve(self.base);
        write_file(&destination, &data)?;

        let bytes = data.len() as u64;
        self.report.files_extracted += 1;
        self.report.bytes_written += bytes;
        info!("extracted file: {}", materialized.destination());

        Ok(EntryOutcome::Extracted { destination, bytes })
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let output_write = |source| ExtractionError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_write)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data).map_err(output_write)?;
    writer.flush().map_err(output_write)?;
    Ok(())
}
