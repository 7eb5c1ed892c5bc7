//! Directory scanning and target-folder discovery.
//!
//! This module provides the core scanning pipeline: project discovery under
//! the scan root, depth-first target-folder matching inside each project,
//! size aggregation for every match, and the nested-size adjustment over the
//! merged result set. Recoverable access errors never abort a scan; they are
//! collected and reported on stderr.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::{
    adjust::adjust_nested_sizes,
    config::ScanOptions,
    report::{FolderMatch, ScanReport},
    targets::TargetSet,
    utils::calculate_dir_size,
};

/// Directory scanner for locating and measuring target folders.
///
/// The `Scanner` struct drives the whole pipeline for one scan: it discovers
/// the top-level project directories under the root, walks each project tree
/// matching subdirectory names against the normalized target set, measures
/// every match, and produces the adjusted, ordered result set.
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// Normalized target names to match folder names against
    targets: TargetSet,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options and target set.
    #[must_use]
    pub const fn new(scan_options: ScanOptions, targets: TargetSet) -> Self {
        Self {
            scan_options,
            targets,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    ///
    /// When quiet mode is active the scanning spinner is hidden, which is
    /// required for `--json` output so that only the final JSON is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Scan the projects root and produce the final result set.
    ///
    /// Steps:
    /// 1. Validate the root (must exist and be a listable directory).
    /// 2. List its immediate subdirectories as the project set, in filesystem
    ///    listing order. Project discovery is one level deep only.
    /// 3. For each project, find every target folder and measure it. Matches
    ///    within one project are sized on the rayon pool; discovery order is
    ///    preserved when the results are merged.
    /// 4. Run the nested-size adjustment once over the merged global list.
    /// 5. Sort descending by final size (stable on ties).
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal configuration problems: the root does
    /// not exist, is not a directory, or its own listing is denied. Access
    /// errors deeper in the tree degrade to warnings.
    ///
    /// # Panics
    ///
    /// This method may panic if the progress bar template string is invalid,
    /// though this should not occur under normal circumstances as the template
    /// is hardcoded and valid.
    pub fn scan_root(&self, root: &Path) -> Result<ScanReport> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Projects root not found: {}", root.display()))?;

        if !root.is_dir() {
            bail!("Projects root is not a directory: {}", root.display());
        }

        let warnings = Arc::new(Mutex::new(Vec::<String>::new()));
        let project_dirs = Self::list_project_dirs(&root, &warnings)?;

        let progress = self.build_progress_bar();

        let mut all_records = Vec::new();
        for project_dir in project_dirs {
            let project_name = project_dir
                .file_name()
                .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

            if self.scan_options.verbose {
                progress.println(format!("Processing project: {project_name}"));
            }

            let candidates = self.find_target_dirs(&project_dir, &warnings);

            // Independent subtrees; sized in parallel, merged in discovery
            // order (par_iter collect preserves order).
            let records: Vec<FolderMatch> = candidates
                .into_par_iter()
                .map(|path| {
                    let size = calculate_dir_size(&path, &warnings);
                    FolderMatch::new(&project_name, path, &root, size)
                })
                .collect();

            if self.scan_options.verbose {
                for record in &records {
                    progress.println(format!("  Found {record}"));
                }
            }

            all_records.extend(records);
            progress.set_message(format!("Scanning... {} matches", all_records.len()));
        }

        progress.finish_and_clear();

        // The adjustment needs the complete cross-project snapshot.
        adjust_nested_sizes(&mut all_records);

        Self::report_warnings(&warnings);

        Ok(ScanReport::from(all_records))
    }

    /// List the immediate subdirectories of the root, in filesystem order.
    ///
    /// Symbolic links are not treated as project directories. A failure to
    /// list the root itself is fatal; nothing is scanned in that case. An
    /// entry that cannot be stat'd (vanished mid-scan, permission denied) is
    /// skipped with a warning and enumeration continues with its siblings.
    fn list_project_dirs(root: &Path, warnings: &Arc<Mutex<Vec<String>>>) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(root)
            .with_context(|| format!("Cannot list projects root: {}", root.display()))?;

        let mut project_dirs = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("Cannot list projects root: {}", root.display()))?;

            match entry.file_type() {
                Ok(file_type) => {
                    if file_type.is_dir() {
                        project_dirs.push(entry.path());
                    }
                }
                Err(e) => {
                    if let Ok(mut warnings) = warnings.lock() {
                        warnings.push(format!("Cannot stat {}: {e}", entry.path().display()));
                    }
                }
            }
        }

        Ok(project_dirs)
    }

    /// Find every target folder inside one project directory.
    ///
    /// Performs a depth-first, top-down traversal. A subdirectory matches when
    /// its normalized name is in the target set. Matched directories are still
    /// descended into, since a target folder may contain further nested
    /// targets and all of them must be discovered; parents therefore always
    /// precede their children in the returned list. Symbolic links are never
    /// walked or matched. Directories that cannot be listed are skipped with
    /// a warning.
    fn find_target_dirs(
        &self,
        project_dir: &Path,
        warnings: &Arc<Mutex<Vec<String>>>,
    ) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for entry in WalkDir::new(project_dir).min_depth(1).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_dir()
                        && self.targets.matches(&entry.file_name().to_string_lossy())
                    {
                        found.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let location = e.path().map_or_else(
                        || project_dir.display().to_string(),
                        |p| p.display().to_string(),
                    );
                    if let Ok(mut warnings) = warnings.lock() {
                        warnings.push(format!("Cannot access {location}: {e}"));
                    }
                }
            }
        }

        found
    }

    /// Build the scanning spinner, hidden in quiet mode.
    fn build_progress_bar(&self) -> ProgressBar {
        if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Scanning...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        }
    }

    /// Emit all collected access warnings to stderr.
    ///
    /// Warnings go to the error stream only, never into the result data.
    fn report_warnings(warnings: &Arc<Mutex<Vec<String>>>) {
        if let Ok(warnings) = warnings.lock() {
            for warning in warnings.iter() {
                eprintln!("{} {warning}", "Warning:".yellow());
            }
        }
    }
}
