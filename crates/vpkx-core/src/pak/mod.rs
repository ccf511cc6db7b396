//! Access to archive entries.
//!
//! Extraction only needs forward iteration over entry paths and
//! open-by-path with a known length. [`PakArchive`] captures exactly that so
//! the driver does not depend on how the archive is decoded.

mod memory;
mod valve;

use std::borrow::Cow;
use std::io;
use std::io::Cursor;
use std::io::Read;

pub use memory::MemoryPak;
pub use valve::VpkArchive;

use crate::Result;

/// Read access to the entries of an archive.
pub trait PakArchive {
    /// Entry paths in iteration order, exactly as stored in the archive.
    fn entry_paths(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Number of entries.
    fn entry_count(&self) -> usize;

    /// Opens an entry by path.
    ///
    /// Returns `Ok(None)` when the archive refuses to open the path, e.g.
    /// directory markers or unknown paths.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::EntryRead` if the entry exists but its
    /// data cannot be loaded.
    fn open_file(&self, path: &str) -> Result<Option<PakFile<'_>>>;
}

/// An opened archive entry with a length known up front.
pub struct PakFile<'a> {
    len: u64,
    reader: Box<dyn Read + 'a>,
}

impl<'a> PakFile<'a> {
    /// Creates an entry that yields `len` bytes from `reader`.
    pub fn new(len: u64, reader: impl Read + 'a) -> Self {
        Self {
            len,
            reader: Box::new(reader),
        }
    }

    /// Creates an entry backed by a byte buffer.
    pub fn from_bytes(data: impl Into<Cow<'a, [u8]>>) -> Self {
        let data = data.into();
        Self::new(data.len() as u64, Cursor::new(data))
    }

    /// Length of the entry data in bytes.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` for zero-length entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the whole entry into a buffer of exactly `len()` bytes.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot be allocated or the reader ends early.
    pub fn read_to_vec(&mut self) -> io::Result<Vec<u8>> {
        let len = usize::try_from(self.len)
            .map_err(|_| io::Error::new(io::ErrorKind::OutOfMemory, "entry too large"))?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        buf.resize(len, 0);
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}

impl std::fmt::Debug for PakFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PakFile").field("len", &self.len).finish_non_exhaustive()
    }
}
