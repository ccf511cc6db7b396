//! In-memory archive.

use std::io::Cursor;

use super::PakArchive;
use super::PakFile;
use crate::Result;

#[derive(Debug, Clone)]
enum MemoryEntry {
    File(Vec<u8>),
    Truncated { data: Vec<u8>, declared_len: u64 },
    Refused,
}

/// An archive held entirely in memory.
///
/// Entries keep their insertion order and are opened by exact path match.
/// Besides regular files it can hold entries the archive refuses to open
/// and entries whose data is shorter than their declared length.
///
/// # Examples
///
/// ```
/// use vpkx_core::MemoryPak;
/// use vpkx_core::PakArchive;
///
/// let pak = MemoryPak::new()
///     .with_file("bar/baz.txt", b"hello")
///     .with_refused("materials/");
///
/// assert_eq!(pak.entry_count(), 2);
/// assert!(pak.open_file("materials/").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPak {
    entries: Vec<(String, MemoryEntry)>,
}

impl MemoryPak {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regular file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, data: impl AsRef<[u8]>) -> Self {
        self.entries
            .push((path.into(), MemoryEntry::File(data.as_ref().to_vec())));
        self
    }

    /// Adds an entry that cannot be opened, like a directory marker.
    #[must_use]
    pub fn with_refused(mut self, path: impl Into<String>) -> Self {
        self.entries.push((path.into(), MemoryEntry::Refused));
        self
    }

    /// Adds an entry that reports `declared_len` bytes but only holds
    /// `data`, so reading it fails.
    #[must_use]
    pub fn with_truncated(
        mut self,
        path: impl Into<String>,
        data: impl AsRef<[u8]>,
        declared_len: u64,
    ) -> Self {
        self.entries.push((
            path.into(),
            MemoryEntry::Truncated {
                data: data.as_ref().to_vec(),
                declared_len,
            },
        ));
        self
    }
}

impl PakArchive for MemoryPak {
    fn entry_paths(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.iter().map(|(path, _)| path.as_str()))
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn open_file(&self, path: &str) -> Result<Option<PakFile<'_>>> {
        let Some((_, entry)) = self.entries.iter().find(|(p, _)| p == path) else {
            return Ok(None);
        };

        Ok(match entry {
            MemoryEntry::File(data) => Some(PakFile::from_bytes(data.as_slice())),
            MemoryEntry::Truncated { data, declared_len } => {
                Some(PakFile::new(*declared_len, Cursor::new(data.as_slice())))
            }
            MemoryEntry::Refused => None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_order_preserved() {
        let pak = MemoryPak::new()
            .with_file("z.txt", b"z")
            .with_file("a.txt", b"a")
            .with_refused("m/");
        let paths: Vec<_> = pak.entry_paths().collect();
        assert_eq!(paths, vec!["z.txt", "a.txt", "m/"]);
    }

    #[test]
    fn test_open_unknown_path() {
        let pak = MemoryPak::new().with_file("a.txt", b"a");
        assert!(pak.open_file("b.txt").unwrap().is_none());
    }

    #[test]
    fn test_open_regular_file() {
        let pak = MemoryPak::new().with_file("a.txt", b"abc");
        let mut file = pak.open_file("a.txt").unwrap().unwrap();
        assert_eq!(file.len(), 3);
        assert_eq!(file.read_to_vec().unwrap(), b"abc");
    }

    #[test]
    fn test_truncated_entry_fails_to_read() {
        let pak = MemoryPak::new().with_truncated("a.txt", b"ab", 8);
        let mut file = pak.open_file("a.txt").unwrap().unwrap();
        assert_eq!(file.len(), 8);
        assert!(file.read_to_vec().is_err());
    }
}
