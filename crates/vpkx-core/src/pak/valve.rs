//! VPK archives read through the `vpk` crate.

use std::path::Path;

use log::debug;
use ::vpk::VPK;

use super::PakArchive;
use super::PakFile;
use crate::ExtractionError;
use crate::Result;

/// A VPK directory file opened with the `vpk` crate.
///
/// Entry paths are listed in sorted order so repeated runs over the same
/// archive process entries identically. Entry data is loaded on demand.
pub struct VpkArchive {
    archive: VPK,
    paths: Vec<String>,
}

impl VpkArchive {
    /// Loads the archive directory.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::InvalidArchivePath` if the path is not UTF-8
    /// - `ExtractionError::ArchiveOpen` if the `vpk` crate rejects the file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| ExtractionError::InvalidArchivePath {
                path: path.to_path_buf(),
            })?;

        let archive = ::vpk::from_path(path_str).map_err(|e| ExtractionError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut paths: Vec<String> = archive.tree.keys().cloned().collect();
        paths.sort_unstable();
        debug!("loaded {} with {} entries", path.display(), paths.len());

        Ok(Self { archive, paths })
    }
}

impl PakArchive for VpkArchive {
    fn entry_paths(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.paths.iter().map(String::as_str))
    }

    fn entry_count(&self) -> usize {
        self.paths.len()
    }

    fn open_file(&self, path: &str) -> Result<Option<PakFile<'_>>> {
        let Some(entry) = self.archive.tree.get(path) else {
            return Ok(None);
        };
        let data = entry.get().map_err(|e| ExtractionError::EntryRead {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Some(PakFile::from_bytes(data)))
    }
}

impl std::fmt::Debug for VpkArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VpkArchive")
            .field("entries", &self.paths.len())
            .finish_non_exhaustive()
    }
}
