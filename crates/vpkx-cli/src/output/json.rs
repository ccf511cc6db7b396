//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use vpkx_core::ExtractionReport;

pub struct JsonFormatter;

#[derive(Serialize)]
struct SkippedOutput<'a> {
    path: &'a str,
    reason: &'static str,
}

#[derive(Serialize)]
struct ExtractionOutput<'a> {
    output_root: &'a str,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    collisions: usize,
    files_skipped: usize,
    skipped: Vec<SkippedOutput<'a>>,
    duration_ms: u128,
}

impl<'a> From<&'a ExtractionReport> for ExtractionOutput<'a> {
    fn from(report: &'a ExtractionReport) -> Self {
        Self {
            output_root: &report.output_root,
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            collisions: report.collisions,
            files_skipped: report.files_skipped(),
            skipped: report
                .skipped
                .iter()
                .map(|s| SkippedOutput {
                    path: &s.path,
                    reason: s.reason.as_str(),
                })
                .collect(),
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(&self, report: &ExtractionReport) -> Result<()> {
        let output = JsonOutput::success("extract", ExtractionOutput::from(report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("extract", format!("{error:?}"));
        let _ = Self::output(&output);
    }
}
