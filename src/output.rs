//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a scan. When the `--json` flag is passed, these
//! structures are serialized to stdout as a single JSON object, replacing
//! all human-readable output.

use serde::Serialize;

use crate::report::{FolderMatch, ScanReport};
use crate::utils::format_bytes;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize)]
pub struct JsonOutput {
    /// Matched folders in presentation order (largest first).
    pub matches: Vec<JsonMatchEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single matched folder in the JSON output.
#[derive(Serialize)]
pub struct JsonMatchEntry {
    /// Name of the top-level project directory.
    pub project: String,

    /// The matched folder's own name, as found on disk.
    pub target: String,

    /// Absolute path of the matched folder.
    pub full_path: String,

    /// Path relative to the scan root.
    pub relative_path: String,

    /// Final (adjusted) size in bytes.
    pub size_bytes: i64,

    /// Human-readable formatted size (e.g. `"1.95 KB"`).
    pub size_formatted: String,
}

/// Aggregated summary across all matches.
#[derive(Serialize)]
pub struct JsonSummary {
    /// Total number of matched folders.
    pub total_matches: usize,

    /// Grand total of all final sizes, in bytes.
    pub total_size: i64,

    /// Human-readable formatted grand total.
    pub total_size_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished scan report.
    #[must_use]
    pub fn from_report(report: &ScanReport) -> Self {
        Self {
            matches: report
                .as_slice()
                .iter()
                .map(JsonMatchEntry::from_record)
                .collect(),
            summary: JsonSummary {
                total_matches: report.len(),
                total_size: report.grand_total(),
                total_size_formatted: format_bytes(report.grand_total()),
            },
        }
    }
}

impl JsonMatchEntry {
    /// Convert a `FolderMatch` into a `JsonMatchEntry`.
    #[must_use]
    pub fn from_record(record: &FolderMatch) -> Self {
        Self {
            project: record.project_name.clone(),
            target: record.target_name.clone(),
            full_path: record.full_path.display().to_string(),
            relative_path: record.relative_path.display().to_string(),
            size_bytes: record.size_bytes,
            size_formatted: record.size_display.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn sample_report() -> ScanReport {
        ScanReport::from(vec![
            FolderMatch::new(
                "project2",
                PathBuf::from("/root/project2/build"),
                Path::new("/root"),
                2000,
            ),
            FolderMatch::new(
                "project1",
                PathBuf::from("/root/project1/node_modules"),
                Path::new("/root"),
                100,
            ),
        ])
    }

    #[test]
    fn test_json_output_from_report() {
        let output = JsonOutput::from_report(&sample_report());

        assert_eq!(output.matches.len(), 2);
        assert_eq!(output.matches[0].project, "project2");
        assert_eq!(output.matches[0].size_bytes, 2000);
        assert_eq!(output.matches[0].size_formatted, "1.95 KB");
        assert_eq!(output.summary.total_matches, 2);
        assert_eq!(output.summary.total_size, 2100);
        assert_eq!(output.summary.total_size_formatted, "2.05 KB");
    }

    #[test]
    fn test_json_output_serializes() {
        let output = JsonOutput::from_report(&sample_report());
        let json = serde_json::to_string_pretty(&output).unwrap();

        assert!(json.contains("\"project\": \"project2\""));
        assert!(json.contains("\"total_size\": 2100"));
        assert!(json.contains("\"relative_path\": \"project1/node_modules\""));
    }
}
