//! Error types for VPK extraction operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::SkipReason;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur during VPK extraction.
///
/// Some variants only ever cause the current entry to be skipped; use
/// [`ExtractionError::skip_reason`] to tell them apart from the ones that
/// abort the run.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The archive library could not load the archive.
    #[error("failed to open archive {path}: {reason}")]
    ArchiveOpen {
        /// Path of the archive file.
        path: PathBuf,
        /// Message reported by the archive library.
        reason: String,
    },

    /// The archive path has no usable file name to derive the output root.
    #[error("cannot derive output directory name from archive path: {path}")]
    InvalidArchivePath {
        /// Path of the archive file.
        path: PathBuf,
    },

    /// Entry path is empty after trimming whitespace and one separator.
    #[error("empty entry path")]
    EmptyPath,

    /// Destination path reached the maximum length.
    #[error("path too long ({len} >= {max}): {path}")]
    PathTooLong {
        /// The candidate destination path.
        path: String,
        /// Length of the candidate in characters.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Entry path contains a component that would leave the output root.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending entry path.
        path: String,
    },

    /// A directory could not be created for a reason other than existing.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The archive library failed to read entry data.
    #[error("failed to read entry {path}: {reason}")]
    EntryRead {
        /// Archive-internal path of the entry.
        path: String,
        /// Message reported by the archive library.
        reason: String,
    },

    /// Creating, writing or flushing an output file failed.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        /// Destination file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// The skip recorded in the report for errors that only skip the
    /// current entry, `None` for errors that abort the run.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::EmptyPath => Some(SkipReason::EmptyPath),
            Self::PathTraversal { .. } => Some(SkipReason::PathTraversal),
            _ => None,
        }
    }

    /// Returns `true` if the error only skips the current entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpkx_core::ExtractionError;
    ///
    /// assert!(ExtractionError::EmptyPath.is_skippable());
    ///
    /// let err = ExtractionError::PathTooLong {
    ///     path: "x".repeat(300),
    ///     len: 300,
    ///     max: 260,
    /// };
    /// assert!(!err.is_skippable());
    /// ```
    #[must_use]
    pub const fn is_skippable(&self) -> bool {
        self.skip_reason().is_some()
    }

    /// Returns `true` if this error aborts the whole extraction.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_skippable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ExtractionError::EmptyPath.to_string(), "empty entry path");
    }

    #[test]
    fn test_path_too_long_display() {
        let err = ExtractionError::PathTooLong {
            path: "root_dir/long".into(),
            len: 270,
            max: 260,
        };
        let display = err.to_string();
        assert!(display.contains("path too long"));
        assert!(display.contains("270 >= 260"));
        assert!(display.contains("root_dir/long"));
    }

    #[test]
    fn test_skip_reason() {
        assert_eq!(
            ExtractionError::EmptyPath.skip_reason(),
            Some(SkipReason::EmptyPath)
        );
        let traversal = ExtractionError::PathTraversal {
            path: "../x".into(),
        };
        assert_eq!(traversal.skip_reason(), Some(SkipReason::PathTraversal));

        let too_long = ExtractionError::PathTooLong {
            path: "x".into(),
            len: 300,
            max: 260,
        };
        assert_eq!(too_long.skip_reason(), None);
    }

    #[test]
    fn test_skippable_classification() {
        assert!(ExtractionError::EmptyPath.is_skippable());
        assert!(
            ExtractionError::PathTraversal {
                path: "../x".into()
            }
            .is_skippable()
        );

        let fatal = [
            ExtractionError::ArchiveOpen {
                path: PathBuf::from("a.vpk"),
                reason: "bad signature".into(),
            },
            ExtractionError::EntryRead {
                path: "a.txt".into(),
                reason: "eof".into(),
            },
            ExtractionError::DirectoryCreate {
                path: PathBuf::from("a_dir/b"),
                source: std::io::Error::other("denied"),
            },
            ExtractionError::OutputWrite {
                path: PathBuf::from("a_dir/b.txt"),
                source: std::io::Error::other("disk full"),
            },
        ];
        for err in fatal {
            assert!(err.is_fatal(), "{err} should be fatal");
        }
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = ExtractionError::DirectoryCreate {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "inner"),
        };
        assert!(err.source().is_some());
    }
}
