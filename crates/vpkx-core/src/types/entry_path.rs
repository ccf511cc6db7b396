//! Normalized archive entry path.

use crate::ExtractionError;
use crate::Result;

/// Returns `true` for the separators VPK tools emit (`/` and `\`).
#[inline]
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns `true` for the ASCII whitespace characters trimmed from the
/// front of entry paths, including vertical tab.
#[inline]
#[must_use]
pub const fn is_leading_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// An archive entry path with leading ASCII whitespace and one leading
/// separator removed.
///
/// Only a single separator is stripped: `"//a"` becomes `"/a"`. Separators
/// inside the path are kept as they appear in the archive.
///
/// # Examples
///
/// ```
/// use vpkx_core::EntryPath;
///
/// let path = EntryPath::normalize("  /materials/brick.vtf").unwrap();
/// assert_eq!(path.as_str(), "materials/brick.vtf");
///
/// assert!(EntryPath::normalize(" \\").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryPath(String);

impl EntryPath {
    /// Normalizes a raw archive path.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::EmptyPath` if nothing remains after
    /// trimming.
    pub fn normalize(raw: &str) -> Result<Self> {
        let trimmed = raw.trim_start_matches(is_leading_space);
        let stripped = trimmed.strip_prefix(is_separator).unwrap_or(trimmed);

        if stripped.is_empty() {
            return Err(ExtractionError::EmptyPath);
        }

        Ok(Self(stripped.to_owned()))
    }

    /// Returns the normalized path.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the non-empty segments between separators.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(is_separator).filter(|s| !s.is_empty())
    }
}

impl AsRef<str> for EntryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
