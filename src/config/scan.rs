//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directories are scanned
//! and what information is reported while the scan runs.

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Whether to print per-project progress lines while scanning
    pub verbose: bool,

    /// Number of threads to use for size calculation (0 = all cores)
    pub threads: usize,
}
