//! Core match data structures.
//!
//! This module defines the record produced for every target folder discovered
//! during a scan, carrying its location, ownership and measured size.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::utils::format_bytes;

/// One discovered target folder instance.
///
/// A record is created during traversal with its provisional raw size, mutated
/// exactly once by the nested-size adjustment (which subtracts the raw sizes
/// of all strict descendant matches), and read-only thereafter for sorting and
/// export.
#[derive(Clone, Debug, Serialize)]
pub struct FolderMatch {
    /// Name of the top-level project directory the match belongs to.
    pub project_name: String,

    /// The matched folder's own name, as it appears on disk (not normalized).
    pub target_name: String,

    /// Absolute path of the matched folder; unique within one scan.
    pub full_path: PathBuf,

    /// Path relative to the scan root; used only for display and export.
    pub relative_path: PathBuf,

    /// Size in bytes.
    ///
    /// Signed so that a containment bug would surface as a negative value
    /// instead of wrapping; after adjustment this is always >= 0.
    pub size_bytes: i64,

    /// Human-readable rendering of `size_bytes` (e.g. `"1.95 KB"`).
    ///
    /// Recomputed after the nested-size adjustment so it always reflects
    /// the final value.
    pub size_display: String,
}

impl FolderMatch {
    /// Create a record for a matched folder with its raw (unadjusted) size.
    ///
    /// The target name is taken from the last component of `full_path`;
    /// `relative_path` is `full_path` stripped of the scan root.
    #[must_use]
    pub fn new(project_name: &str, full_path: PathBuf, scan_root: &Path, raw_size: u64) -> Self {
        let target_name = full_path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

        let relative_path = full_path
            .strip_prefix(scan_root)
            .map_or_else(|_| full_path.clone(), Path::to_path_buf);

        let size_bytes = i64::try_from(raw_size).unwrap_or(i64::MAX);

        Self {
            project_name: project_name.to_string(),
            target_name,
            full_path,
            relative_path,
            size_bytes,
            size_display: format_bytes(size_bytes),
        }
    }

    /// Refresh `size_display` from the current `size_bytes`.
    pub fn refresh_size_display(&mut self) {
        self.size_display = format_bytes(self.size_bytes);
    }
}

impl Display for FolderMatch {
    /// Format the match for display: folder name, owning project and size.
    ///
    /// Example: `Data in (project1) -> 1.00 KB`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({}) -> {}",
            self.target_name, self.project_name, self.size_display
        )
    }
}
