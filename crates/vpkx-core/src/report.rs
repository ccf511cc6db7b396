//! Extraction operation reporting.

use std::time::Duration;

/// Why an entry was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The path was empty after trimming.
    EmptyPath,
    /// The path would leave the output root.
    PathTraversal,
    /// The archive refused to open the entry.
    NotAFile,
    /// The entry has no data.
    EmptyEntry,
    /// The entry sits directly in the output root and the collision policy
    /// skips such entries.
    Collision,
}

impl SkipReason {
    /// Short lowercase label, stable for machine-readable output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyPath => "empty-path",
            Self::PathTraversal => "path-traversal",
            Self::NotAFile => "not-a-file",
            Self::EmptyEntry => "empty-entry",
            Self::Collision => "collision",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry that was skipped, with the raw path as stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Archive-internal path.
    pub path: String,
    /// Reason the entry was skipped.
    pub reason: SkipReason,
}

/// Report of an extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Name of the output root directory.
    pub output_root: String,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directories created, including the output root.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Number of entries whose parent is the output root, whether they were
    /// written or skipped.
    pub collisions: usize,

    /// Entries that were not written.
    pub skipped: Vec<SkippedEntry>,

    /// Duration of the run.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a skipped entry.
    pub fn add_skipped(&mut self, path: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedEntry {
            path: path.into(),
            reason,
        });
    }

    /// Number of skipped entries.
    #[must_use]
    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }

    /// Number of skipped entries with the given reason.
    #[must_use]
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// Returns whether any entry was skipped.
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
