//! Match records and scan results.
//!
//! This module contains the data structures produced by a scan:
//!
//! - [`FolderMatch`] - One discovered target folder with its adjusted size
//! - [`ScanReport`] - The ordered result set with its grand total

pub mod record;
pub mod summary;

pub use record::FolderMatch;
pub use summary::ScanReport;
