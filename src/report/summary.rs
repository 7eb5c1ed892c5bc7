//! Scan result collection and console reporting.
//!
//! This module provides the [`ScanReport`] struct which wraps the final,
//! adjusted match records and offers the operations the presentation layer
//! needs: descending-size ordering, the grand total, and the summary table.

use colored::Colorize;

use crate::utils::format_bytes;

use super::FolderMatch;

/// The final, ordered result set of one scan.
///
/// Construction sorts the records by final size descending; ties keep their
/// discovery order (the sort is stable). The grand total is the sum of all
/// final (adjusted) sizes.
#[derive(Debug)]
pub struct ScanReport {
    records: Vec<FolderMatch>,
    grand_total: i64,
}

impl From<Vec<FolderMatch>> for ScanReport {
    fn from(mut records: Vec<FolderMatch>) -> Self {
        records.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        let grand_total = records.iter().map(|record| record.size_bytes).sum();

        Self {
            records,
            grand_total,
        }
    }
}

impl ScanReport {
    /// The records in presentation order (largest first).
    #[must_use]
    pub fn as_slice(&self) -> &[FolderMatch] {
        &self.records
    }

    /// Sum of all final sizes, in bytes.
    #[must_use]
    pub const fn grand_total(&self) -> i64 {
        self.grand_total
    }

    /// Number of matched folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scan found no target folders at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Print the summary table to stdout.
    ///
    /// One row per record in descending size order, followed by a TOTAL row
    /// with the grand total. Warnings never appear here; they go to stderr.
    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!(" {}", "Directory Size Analysis Summary".bold());
        println!("{}", "=".repeat(80));

        if self.records.is_empty() {
            println!("{}", "No target folders found in any project.".green());
            return;
        }

        let header = format!(
            "| {:<20} | {:<15} | {:>20} | {:<50} |",
            "Project Root", "Target Folder", "Total Size", "Relative Path"
        );
        let separator = format!(
            "|{}|{}|{}|{}|",
            "-".repeat(22),
            "-".repeat(17),
            "-".repeat(22),
            "-".repeat(52)
        );

        println!("{header}");
        println!("{separator}");

        for record in &self.records {
            println!(
                "| {:<20} | {:<15} | {:>20} | {:<50} |",
                record.project_name,
                record.target_name,
                record.size_display,
                record.relative_path.display()
            );
        }

        println!("{separator}");
        println!(
            "| {:<20} | {:<15} | {:>20} | {:<50} |",
            "TOTAL".bold(),
            "",
            format_bytes(self.grand_total).bold(),
            ""
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn record(project: &str, path: &str, size: u64) -> FolderMatch {
        FolderMatch::new(project, PathBuf::from(path), Path::new("/root"), size)
    }

    #[test]
    fn test_report_sorts_by_size_descending() {
        let report = ScanReport::from(vec![
            record("p1", "/root/p1/node_modules", 100),
            record("p2", "/root/p2/build", 2000),
            record("p2", "/root/p2/dist", 0),
        ]);

        let sizes: Vec<i64> = report.as_slice().iter().map(|r| r.size_bytes).collect();
        assert_eq!(sizes, vec![2000, 100, 0]);
    }

    #[test]
    fn test_report_sort_is_stable_on_ties() {
        let report = ScanReport::from(vec![
            record("p1", "/root/p1/Incoming", 500),
            record("p2", "/root/p2/Outgoing", 500),
            record("p3", "/root/p3/Email", 500),
        ]);

        let projects: Vec<&str> = report
            .as_slice()
            .iter()
            .map(|r| r.project_name.as_str())
            .collect();
        assert_eq!(projects, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_grand_total_sums_final_sizes() {
        let report = ScanReport::from(vec![
            record("p1", "/root/p1/node_modules", 100),
            record("p2", "/root/p2/build", 2000),
        ]);

        assert_eq!(report.grand_total(), 2100);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_empty_report() {
        let report = ScanReport::from(Vec::new());

        assert!(report.is_empty());
        assert_eq!(report.grand_total(), 0);
        assert_eq!(report.len(), 0);
    }
}
