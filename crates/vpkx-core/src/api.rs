//! High-level public API for VPK extraction.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::extraction::Extractor;
use crate::materialize::create_nested_directories;
use crate::pak::PakArchive;
use crate::pak::VpkArchive;
use crate::types::OutputRoot;

/// Extracts a VPK archive into `<base_dir>/<stem>_dir`.
///
/// The archive is opened first, so a missing or invalid archive leaves the
/// filesystem untouched. The output root name is derived once from the
/// archive's file name.
///
/// # Arguments
///
/// * `archive_path` - Path to the VPK directory file
/// * `base_dir` - Directory the output root is created in
/// * `config` - Extraction configuration
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened
/// - The output root or an entry's parent directory cannot be created
/// - A destination path is too long
/// - Entry data cannot be read or written
///
/// # Examples
///
/// ```no_run
/// use vpkx_core::ExtractConfig;
/// use vpkx_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("pak01_dir.vpk", "/tmp/out", &ExtractConfig::default())?;
/// println!("Extracted {} files to {}", report.files_extracted, report.output_root);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    base_dir: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    let archive_path = archive_path.as_ref();
    let archive = VpkArchive::open(archive_path)?;
    let root = OutputRoot::from_archive_path(archive_path)?;
    extract_pak(&archive, &root, base_dir, config)
}

/// Extracts an already opened archive into `<base_dir>/<root>`.
///
/// # Errors
///
/// Same as [`extract_archive`], minus archive opening.
///
/// # Examples
///
/// ```
/// use vpkx_core::ExtractConfig;
/// use vpkx_core::MemoryPak;
/// use vpkx_core::OutputRoot;
/// use vpkx_core::extract_pak;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let pak = MemoryPak::new().with_file("bar/baz.txt", b"hello");
/// let root = OutputRoot::from_archive_path("foo.vpk")?;
///
/// let report = extract_pak(&pak, &root, dir.path(), &ExtractConfig::default())?;
/// assert_eq!(report.files_extracted, 1);
/// assert_eq!(std::fs::read(dir.path().join("foo_dir/bar/baz.txt"))?, b"hello");
/// # Ok(())
/// # }
/// ```
pub fn extract_pak<A: PakArchive + ?Sized, Q: AsRef<Path>>(
    archive: &A,
    root: &OutputRoot,
    base_dir: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    let start = Instant::now();
    let base_dir = base_dir.as_ref();

    info!(
        "extracting {} entries into {root}",
        archive.entry_count()
    );
    let mut report = ExtractionReport {
        output_root: root.as_str().to_owned(),
        ..ExtractionReport::default()
    };
    report.directories_created = create_nested_directories(base_dir, root.as_str())?;

    let mut report = Extractor::new(archive, root, base_dir, config)
        .with_report(report)
        .run()?;
    report.duration = start.elapsed();

    info!(
        "extraction complete: {} files, {} skipped",
        report.files_extracted,
        report.files_skipped()
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ExtractionError;
    use crate::MemoryPak;
    use tempfile::TempDir;

    #[test]
    fn test_extract_archive_missing_file_writes_nothing() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let archive = temp.path().join("missing.vpk");
        let result = extract_archive(&archive, temp.path(), &ExtractConfig::default());

        assert!(matches!(result, Err(ExtractionError::ArchiveOpen { .. })));
        assert!(!temp.path().join("missing_dir").exists());
    }

    #[test]
    fn test_extract_pak_creates_root() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let root = OutputRoot::from_archive_path("empty.vpk").unwrap();
        let report = extract_pak(
            &MemoryPak::new(),
            &root,
            temp.path(),
            &ExtractConfig::default(),
        )
        .unwrap();

        assert!(temp.path().join("empty_dir").is_dir());
        assert_eq!(report.output_root, "empty_dir");
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.files_extracted, 0);
    }

    #[test]
    fn test_extract_pak_existing_root() {
        let temp = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir(temp.path().join("foo_dir")).unwrap();
        let root = OutputRoot::from_archive_path("foo.vpk").unwrap();
        let pak = MemoryPak::new().with_file("a/b.txt", b"x");

        let report = extract_pak(&pak, &root, temp.path(), &ExtractConfig::default()).unwrap();
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.files_extracted, 1);
    }

    #[test]
    fn test_extract_pak_root_blocked_by_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        std::fs::write(temp.path().join("foo_dir"), b"not a dir").unwrap();
        let root = OutputRoot::from_archive_path("foo.vpk").unwrap();
        let pak = MemoryPak::new().with_file("a/b.txt", b"x");

        let result = extract_pak(&pak, &root, temp.path(), &ExtractConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_pak_empty_archive_root_blocked_by_file() {
        let temp = TempDir::new().expect("failed to create temp dir");
        std::fs::write(temp.path().join("foo_dir"), b"not a dir").unwrap();
        let root = OutputRoot::from_archive_path("foo.vpk").unwrap();

        let result = extract_pak(
            &MemoryPak::new(),
            &root,
            temp.path(),
            &ExtractConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ExtractionError::DirectoryCreate { .. })
        ));
    }
}
