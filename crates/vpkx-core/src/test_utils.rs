//! Test utilities for building VPK files.
//!
//! [`VpkTestBuilder`] writes a version 1 directory file whose entries are
//! stored entirely as preload data, so a single `*.vpk` file is a complete
//! archive.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors or oversized
//! entries since they are designed for test use only.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::collections::BTreeMap;
use std::path::Path;

const SIGNATURE: u32 = 0x55AA_1234;
const VERSION: u32 = 1;
const ARCHIVE_INDEX_DIR: u16 = 0x7FFF;
const ENTRY_TERMINATOR: u16 = 0xFFFF;
/// Placeholder used for an empty directory or extension.
const BLANK: &str = " ";

type Files = Vec<(String, Vec<u8>)>;

/// Builder for single-file VPK archives.
///
/// # Examples
///
/// ```
/// use vpkx_core::test_utils::VpkTestBuilder;
///
/// let data = VpkTestBuilder::new()
///     .add_file("bar/baz.txt", b"hello")
///     .build();
/// assert_eq!(&data[..4], &[0x34, 0x12, 0xAA, 0x55]);
/// ```
#[derive(Debug, Default)]
pub struct VpkTestBuilder {
    // extension -> directory -> files
    tree: BTreeMap<String, BTreeMap<String, Files>>,
}

impl VpkTestBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file. `path` uses `/` separators; its data is stored as
    /// preload bytes and must fit in a `u16`.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let (dir, file) = path.rsplit_once('/').unwrap_or((BLANK, path));
        let (name, ext) = file.rsplit_once('.').unwrap_or((file, BLANK));
        self.tree
            .entry(ext.to_owned())
            .or_default()
            .entry(dir.to_owned())
            .or_default()
            .push((name.to_owned(), data.to_vec()));
        self
    }

    /// Serializes the archive.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let mut tree = Vec::new();
        for (ext, dirs) in &self.tree {
            push_str(&mut tree, ext);
            for (dir, files) in dirs {
                push_str(&mut tree, dir);
                for (name, data) in files {
                    push_str(&mut tree, name);
                    let preload = u16::try_from(data.len()).expect("preload data too large");
                    tree.extend_from_slice(&crc32(data).to_le_bytes());
                    tree.extend_from_slice(&preload.to_le_bytes());
                    tree.extend_from_slice(&ARCHIVE_INDEX_DIR.to_le_bytes());
                    tree.extend_from_slice(&0u32.to_le_bytes()); // offset
                    tree.extend_from_slice(&0u32.to_le_bytes()); // length
                    tree.extend_from_slice(&ENTRY_TERMINATOR.to_le_bytes());
                    tree.extend_from_slice(data);
                }
                tree.push(0);
            }
            tree.push(0);
        }
        tree.push(0);

        let tree_size = u32::try_from(tree.len()).expect("tree too large");
        let mut out = Vec::with_capacity(12 + tree.len());
        out.extend_from_slice(&SIGNATURE.to_le_bytes());
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&tree_size.to_le_bytes());
        out.extend_from_slice(&tree);
        out
    }

    /// Serializes the archive into `path`.
    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build()).expect("failed to write test archive");
    }
}

fn push_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_known_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_header() {
        let data = VpkTestBuilder::new().add_file("a.txt", b"x").build();
        let tree_size = u32::from_le_bytes(data[8..12].try_into().unwrap());
        assert_eq!(tree_size as usize, data.len() - 12);
    }

    #[test]
    fn test_tree_layout() {
        let data = VpkTestBuilder::new().add_file("bar/baz.txt", b"hello").build();
        let tree = &data[12..];
        assert!(tree.starts_with(b"txt\0bar\0baz\0"));
        assert!(tree.ends_with(b"hello\0\0\0"));
    }
}
