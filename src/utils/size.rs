//! Directory size measurement and byte formatting.
//!
//! This module provides the byte-accurate size aggregation used for every
//! matched folder, and the human-readable size formatting shared by the
//! console table and the export file.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use walkdir::WalkDir;

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Recursively traverses the subtree with `walkdir` and sums the sizes of
/// all regular files. Symbolic links are never followed and never counted,
/// regardless of what they point to; a symlink entry reports its own file
/// type, so the `is_file()` check excludes it.
///
/// The function never fails. Entries that cannot be listed or stat'd
/// (permission denied, vanished mid-scan) are skipped with a warning pushed
/// onto `warnings`, and accumulation continues with the rest of the tree.
/// An unreadable top-level directory therefore yields the partial total
/// accumulated so far, possibly 0.
#[must_use]
pub fn calculate_dir_size(path: &Path, warnings: &Arc<Mutex<Vec<String>>>) -> u64 {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(false) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    match entry.metadata() {
                        Ok(metadata) => total += metadata.len(),
                        Err(e) => push_warning(
                            warnings,
                            format!("Cannot stat {}: {e}", entry.path().display()),
                        ),
                    }
                }
            }
            Err(e) => {
                let location = e
                    .path()
                    .map_or_else(|| path.display().to_string(), |p| p.display().to_string());
                push_warning(warnings, format!("Cannot access {location}: {e}"));
            }
        }
    }

    total
}

/// Push a warning onto the shared collector, ignoring a poisoned lock.
fn push_warning(warnings: &Arc<Mutex<Vec<String>>>, message: String) {
    if let Ok(mut warnings) = warnings.lock() {
        warnings.push(message);
    }
}

/// Format a byte count as a human-readable string.
///
/// Values below 1024 are rendered as plain bytes (`"512 B"`); larger values
/// are divided through KB, MB, GB, TB and PB (base 1024) and rendered with
/// exactly two decimal places (`"1.00 KB"`, `"1.95 KB"`, `"1.00 MB"`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: i64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64;
    for unit in ["KB", "MB", "GB", "TB"] {
        size /= 1024.0;
        if size < 1024.0 {
            return format!("{size:.2} {unit}");
        }
    }

    size /= 1024.0;
    format!("{size:.2} PB")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_warnings() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn test_format_bytes_plain_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_two_decimal_places() {
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(2000), "1.95 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
        assert_eq!(format_bytes(1_099_511_627_776), "1.00 TB");
        assert_eq!(format_bytes(1_125_899_906_842_624), "1.00 PB");
    }

    #[test]
    fn test_calculate_dir_size_sums_nested_files() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("folder");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("file1.txt"), "12345").unwrap();
        fs::write(folder.join("file2.txt"), "1234567890").unwrap();
        fs::create_dir(folder.join("sub")).unwrap();
        fs::write(folder.join("sub").join("file3.txt"), "12345").unwrap();

        assert_eq!(calculate_dir_size(&folder, &no_warnings()), 20);
    }

    #[test]
    fn test_calculate_dir_size_empty_dir() {
        let temp = TempDir::new().unwrap();

        assert_eq!(calculate_dir_size(temp.path(), &no_warnings()), 0);
    }

    #[test]
    fn test_calculate_dir_size_missing_dir_warns_and_returns_zero() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let warnings = no_warnings();

        assert_eq!(calculate_dir_size(&missing, &warnings), 0);
        assert_eq!(warnings.lock().unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_calculate_dir_size_ignores_symlinks() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("folder");
        fs::create_dir(&folder).unwrap();

        // 1000-byte file outside the measured folder, linked from inside it.
        let outside = temp.path().join("outside.bin");
        fs::write(&outside, vec![0u8; 1000]).unwrap();
        std::os::unix::fs::symlink(&outside, folder.join("link.bin")).unwrap();

        assert_eq!(calculate_dir_size(&folder, &no_warnings()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_calculate_dir_size_does_not_follow_dir_symlinks() {
        let temp = TempDir::new().unwrap();
        let folder = temp.path().join("folder");
        fs::create_dir(&folder).unwrap();

        let outside = temp.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("big.bin"), vec![0u8; 4096]).unwrap();
        std::os::unix::fs::symlink(&outside, folder.join("linked-dir")).unwrap();

        assert_eq!(calculate_dir_size(&folder, &no_warnings()), 0);
    }
}
