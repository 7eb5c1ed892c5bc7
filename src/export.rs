//! CSV export of scan results.
//!
//! The export file is a plain UTF-8 CSV with a header row and one row per
//! matched folder, in the same (descending size) order as the console table.
//! The file is overwritten on every run; a failed export is reported by the
//! caller but never affects the scan result itself.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use csv::Writer;

use crate::report::ScanReport;

/// Column headers, in stable order.
const CSV_HEADERS: [&str; 5] = ["project", "target", "size_bytes", "size", "relative_path"];

/// Write the scan results to a CSV file at `path`.
///
/// Creates the parent directory if it does not exist, then writes a header
/// row followed by one row per record. Any existing file at `path` is
/// replaced.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written (permission denied, disk full, invalid path).
pub fn write_csv_report(report: &ScanReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create export directory {}", parent.display())
        })?;
    }

    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;

    writer.write_record(CSV_HEADERS)?;

    for record in report.as_slice() {
        writer.write_record([
            record.project_name.as_str(),
            record.target_name.as_str(),
            &record.size_bytes.to_string(),
            record.size_display.as_str(),
            &record.relative_path.display().to_string(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write export file {}", path.display()))?;

    Ok(())
}
