//! Destination path derivation and nested directory creation.
//!
//! [`materialize`] is a pure function: it turns a raw entry path into the
//! destination string `<root>/<entry>` and its parent directory without
//! touching the filesystem. [`create_nested_directories`] then makes sure
//! every level of that parent exists.

use std::fs;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use log::debug;

use crate::ExtractConfig;
use crate::ExtractionError;
use crate::Result;
use crate::types::EntryPath;
use crate::types::OutputRoot;
use crate::types::is_separator;

/// Destination of a single archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    entry: EntryPath,
    destination: String,
    parent_len: usize,
    collision: bool,
}

impl Materialized {
    /// The normalized entry path, used to open the entry in the archive.
    #[must_use]
    pub fn entry(&self) -> &EntryPath {
        &self.entry
    }

    /// The destination path, `<root>/<entry>`.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The destination up to its final separator.
    #[must_use]
    pub fn parent_dir(&self) -> &str {
        &self.destination[..self.parent_len]
    }

    /// Whether the parent directory is literally the output root name.
    ///
    /// The comparison is plain string equality. A parent spelled with a
    /// different separator or case does not match.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        self.collision
    }

    /// Resolves the destination against `base` as a filesystem path.
    #[must_use]
    pub fn resolve(&self, base: &Path) -> PathBuf {
        resolve_under(base, &self.destination)
    }
}

/// Computes the destination of an archive entry.
///
/// Leading whitespace and exactly one leading separator are removed from
/// `raw`, the result is appended to `root` and the length limit is checked.
///
/// # Errors
///
/// - `ExtractionError::EmptyPath` if nothing remains after trimming
/// - `ExtractionError::PathTooLong` if the destination has
///   `config.max_path_length` characters or more
/// - `ExtractionError::PathTraversal` if a segment is `..` or not a plain
///   file name on this platform
///
/// # Examples
///
/// ```
/// use vpkx_core::ExtractConfig;
/// use vpkx_core::OutputRoot;
/// use vpkx_core::materialize;
///
/// let root = OutputRoot::from_archive_path("foo.vpk").unwrap();
/// let config = ExtractConfig::default();
///
/// let m = materialize(" /bar/baz.txt", &root, &config).unwrap();
/// assert_eq!(m.destination(), "foo_dir/bar/baz.txt");
/// assert_eq!(m.parent_dir(), "foo_dir/bar");
/// assert!(!m.is_collision());
///
/// let m = materialize("readme.txt", &root, &config).unwrap();
/// assert!(m.is_collision());
/// ```
pub fn materialize(raw: &str, root: &OutputRoot, config: &ExtractConfig) -> Result<Materialized> {
    let entry = EntryPath::normalize(raw)?;
    let destination = format!("{root}/{entry}");

    let len = destination.chars().count();
    if len >= config.max_path_length {
        return Err(ExtractionError::PathTooLong {
            path: destination,
            len,
            max: config.max_path_length,
        });
    }

    check_segments(&entry)?;

    // The root is always followed by '/', so a separator exists.
    let parent_len = destination
        .rfind(is_separator)
        .unwrap_or(root.as_str().len());
    let collision = &destination[..parent_len] == root.as_str();

    Ok(Materialized {
        entry,
        destination,
        parent_len,
        collision,
    })
}

fn check_segments(entry: &EntryPath) -> Result<()> {
    for segment in entry.segments() {
        if segment == "." {
            continue;
        }
        let mut components = Path::new(segment).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain {
            return Err(ExtractionError::PathTraversal {
                path: entry.as_str().to_owned(),
            });
        }
    }
    Ok(())
}

/// Creates `dir` and every ancestor of it under `base`.
///
/// The path is walked left to right; at each separator (`/` or `\`) the
/// prefix seen so far is created unless it already exists, then `dir`
/// itself is created. A separator at the very start and a single trailing
/// separator are ignored. Existing directories are not an error, so calling
/// this twice with the same path succeeds both times. An existing file with
/// the name of a level is an error.
///
/// Returns the number of directories that were actually created.
///
/// # Errors
///
/// Returns `ExtractionError::DirectoryCreate` if a level cannot be created
/// for any reason other than already existing.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vpkx_core::create_nested_directories;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let created = create_nested_directories(Path::new("."), "foo_dir/a/b")?;
/// assert_eq!(created, 3);
/// assert_eq!(create_nested_directories(Path::new("."), "foo_dir/a/b")?, 0);
/// # Ok(())
/// # }
/// ```
pub fn create_nested_directories(base: &Path, dir: &str) -> Result<usize> {
    let dir = dir.strip_suffix(is_separator).unwrap_or(dir);
    let mut created = 0;

    for (idx, c) in dir.char_indices().skip(1) {
        if is_separator(c) && create_directory(base, &dir[..idx])? {
            created += 1;
        }
    }
    if !dir.is_empty() && create_directory(base, dir)? {
        created += 1;
    }

    Ok(created)
}

fn create_directory(base: &Path, dir: &str) -> Result<bool> {
    let path = resolve_under(base, dir);
    if path.is_dir() {
        return Ok(false);
    }

    match fs::create_dir(&path) {
        Ok(()) => {
            debug!("created directory {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(source) => Err(ExtractionError::DirectoryCreate { path, source }),
    }
}

/// Joins the segments of `path` (split on both separator kinds) onto
/// `base`, dropping empty and `.` segments.
pub(crate) fn resolve_under(base: &Path, path: &str) -> PathBuf {
    let mut resolved = base.to_path_buf();
    for segment in path.split(is_separator) {
        if !segment.is_empty() && segment != "." {
            resolved.push(segment);
        }
    }
    resolved
}
