//! # dir-size-audit (library)
//!
//! Core library behind the `dir-size-audit` CLI: target-name normalization,
//! directory traversal and matching, size aggregation, nested-size
//! adjustment, and the result/reporting data structures.

pub mod adjust;
pub mod config;
pub mod export;
pub mod output;
pub mod report;
pub mod scanner;
pub mod targets;
pub mod utils;

pub use config::ScanOptions;
pub use report::{FolderMatch, ScanReport};
pub use scanner::Scanner;
pub use targets::TargetSet;
