//! Output root directory name derived from the archive file name.

use std::path::Path;

use crate::ExtractionError;
use crate::Result;

const VPK_EXTENSION: &str = ".vpk";
const ROOT_SUFFIX: &str = "_dir";

/// Name of the top-level directory an archive is extracted into.
///
/// Derived as `<archive-stem>_dir`, where the stem is the archive's file
/// name with an exact, case-sensitive `.vpk` suffix removed. Computed once
/// per run.
///
/// # Examples
///
/// ```
/// use vpkx_core::OutputRoot;
///
/// let root = OutputRoot::from_archive_path("games/hl2/pak01.vpk").unwrap();
/// assert_eq!(root.as_str(), "pak01_dir");
///
/// let root = OutputRoot::from_archive_path("pak01.VPK").unwrap();
/// assert_eq!(root.as_str(), "pak01.VPK_dir");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputRoot(String);

impl OutputRoot {
    /// Derives the output root from the archive path.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidArchivePath` if the path has no file
    /// name or the file name is not valid UTF-8.
    pub fn from_archive_path(archive: impl AsRef<Path>) -> Result<Self> {
        let archive = archive.as_ref();
        let name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ExtractionError::InvalidArchivePath {
                path: archive.to_path_buf(),
            })?;

        let stem = match name.strip_suffix(VPK_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem,
            _ => name,
        };

        Ok(Self(format!("{stem}{ROOT_SUFFIX}")))
    }

    /// Returns the directory name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OutputRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OutputRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
