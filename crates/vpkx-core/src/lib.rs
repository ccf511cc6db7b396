//! Path sanitization and directory materialization for VPK extraction.
//!
//! `vpkx-core` turns the untrusted entry paths of a Valve Pak (VPK) archive
//! into destination paths under a single output root, creates the parent
//! directories each entry needs exactly once, and writes the entry data.
//! Archive decoding is delegated to the [`vpk`] crate behind the
//! [`PakArchive`] trait.
//!
//! # Examples
//!
//! ```no_run
//! use vpkx_core::ExtractConfig;
//! use vpkx_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractConfig::default();
//! let report = extract_archive("pak01_dir.vpk", ".", &config)?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod extraction;
pub mod materialize;
pub mod pak;
pub mod report;
#[doc(hidden)]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_pak;
pub use config::CollisionPolicy;
pub use config::ExtractConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use materialize::Materialized;
pub use materialize::create_nested_directories;
pub use materialize::materialize;
pub use pak::MemoryPak;
pub use pak::PakArchive;
pub use pak::PakFile;
pub use pak::VpkArchive;
pub use report::ExtractionReport;
pub use report::SkipReason;

pub use types::EntryPath;
pub use types::OutputRoot;
