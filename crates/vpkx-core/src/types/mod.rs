//! Newtypes for the strings that flow through extraction.
//!
//! Both types are only constructed through their normalizing constructors,
//! so an `EntryPath` is never empty and an `OutputRoot` always carries the
//! `_dir` suffix.

pub mod entry_path;
pub mod output_root;

pub use entry_path::EntryPath;
pub use entry_path::is_separator;
pub use output_root::OutputRoot;
