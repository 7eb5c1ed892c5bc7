//! Configuration types and loading.
//!
//! This module groups the configuration surfaces of the application:
//!
//! - [`FileConfig`] - Persistent settings from `config.toml`
//! - [`ScanOptions`] - Runtime options controlling a scan

pub mod file;
pub mod scan;

pub use file::FileConfig;
pub use scan::ScanOptions;
