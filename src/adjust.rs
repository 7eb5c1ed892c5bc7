//! Nested-match size correction.
//!
//! When one matched folder sits inside another (e.g. an "Email" folder inside
//! a "Data in" folder, both targets), the raw sizes double-count the nested
//! bytes: the ancestor's recursive total already includes everything under
//! the descendant. This module subtracts descendant totals from ancestor
//! totals so the final sizes partition the bytes instead of overlapping.

use std::path::{Path, PathBuf};

use crate::report::FolderMatch;

/// Correct the sizes of records whose paths nest inside one another.
///
/// For every record, the raw sizes of all of its strict descendants in
/// `records` are subtracted from its size. All subtractions read from an
/// immutable snapshot of the raw sizes taken before any mutation, so the
/// processing order does not matter and no byte is subtracted twice.
/// Records whose paths are disjoint are left untouched.
///
/// Containment is decided on path segments, not string prefixes:
/// `/root/ab` does not contain `/root/abc`.
///
/// Each record's human-readable size string is refreshed afterwards.
pub fn adjust_nested_sizes(records: &mut [FolderMatch]) {
    let raw_sizes: Vec<(PathBuf, i64)> = records
        .iter()
        .map(|record| (record.full_path.clone(), record.size_bytes))
        .collect();

    for record in records.iter_mut() {
        let nested_total: i64 = raw_sizes
            .iter()
            .filter(|(path, _)| is_strict_descendant(path, &record.full_path))
            .map(|(_, size)| size)
            .sum();

        record.size_bytes -= nested_total;
        record.refresh_size_display();
    }
}

/// Whether `path` is a strict descendant of `ancestor` (segment-wise).
fn is_strict_descendant(path: &Path, ancestor: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, raw_size: i64) -> FolderMatch {
        let mut record = FolderMatch::new(
            "project",
            PathBuf::from(path),
            Path::new("/root"),
            u64::try_from(raw_size).unwrap(),
        );
        record.size_bytes = raw_size;
        record
    }

    #[test]
    fn test_is_strict_descendant_respects_segments() {
        assert!(is_strict_descendant(
            Path::new("/root/a/b"),
            Path::new("/root/a")
        ));
        assert!(!is_strict_descendant(
            Path::new("/root/a"),
            Path::new("/root/a")
        ));
        // String prefix but not a path prefix.
        assert!(!is_strict_descendant(
            Path::new("/root/abc"),
            Path::new("/root/ab")
        ));
    }

    #[test]
    fn test_parent_child_pair() {
        // Parent raw = own 1024 B file + the nested target's 512 B file.
        let mut records = vec![
            record("/root/project/Data in", 1536),
            record("/root/project/Data in/Email", 512),
        ];

        adjust_nested_sizes(&mut records);

        assert_eq!(records[0].size_bytes, 1024);
        assert_eq!(records[0].size_display, "1.00 KB");
        assert_eq!(records[1].size_bytes, 512);
        assert_eq!(records[1].size_display, "512 B");
        assert_eq!(records.iter().map(|r| r.size_bytes).sum::<i64>(), 1536);
    }

    #[test]
    fn test_multiple_independent_descendants() {
        let mut records = vec![
            record("/root/project/Incoming", 3000),
            record("/root/project/Incoming/Email", 1000),
            record("/root/project/Incoming/FTP Upload", 500),
        ];

        adjust_nested_sizes(&mut records);

        assert_eq!(records[0].size_bytes, 1500);
        assert_eq!(records[1].size_bytes, 1000);
        assert_eq!(records[2].size_bytes, 500);
    }

    #[test]
    fn test_subtractions_use_raw_snapshot_regardless_of_order() {
        let make = || {
            vec![
                record("/root/project/A", 1536),
                record("/root/project/A/B", 512),
            ]
        };

        let mut forward = make();
        adjust_nested_sizes(&mut forward);

        let mut reversed = make();
        reversed.reverse();
        adjust_nested_sizes(&mut reversed);

        assert_eq!(forward[0].size_bytes, reversed[1].size_bytes);
        assert_eq!(forward[1].size_bytes, reversed[0].size_bytes);
    }

    #[test]
    fn test_three_level_chain_subtracts_all_raw_descendants() {
        // A contains B contains C, own contributions 1500/1000/500. Every
        // strict descendant's raw size is subtracted, so A loses both B's
        // raw (which already includes C) and C's raw again: A ends up at
        // its own bytes minus C's own bytes.
        let mut records = vec![
            record("/root/project/A", 3000),
            record("/root/project/A/B", 1500),
            record("/root/project/A/B/C", 500),
        ];

        adjust_nested_sizes(&mut records);

        assert_eq!(records[0].size_bytes, 1000);
        assert_eq!(records[1].size_bytes, 1000);
        assert_eq!(records[2].size_bytes, 500);
        assert!(records.iter().all(|r| r.size_bytes >= 0));
    }

    #[test]
    fn test_disjoint_records_untouched() {
        let mut records = vec![
            record("/root/project1/Incoming", 100),
            record("/root/project2/Outgoing", 2000),
        ];

        adjust_nested_sizes(&mut records);

        assert_eq!(records[0].size_bytes, 100);
        assert_eq!(records[1].size_bytes, 2000);
    }

    #[test]
    fn test_final_sizes_non_negative_for_parent_child() {
        // Child raw equals parent raw: parent's own contribution is zero.
        let mut records = vec![
            record("/root/project/Incoming", 512),
            record("/root/project/Incoming/Email", 512),
        ];

        adjust_nested_sizes(&mut records);

        assert_eq!(records[0].size_bytes, 0);
        assert_eq!(records[1].size_bytes, 512);
        assert!(records.iter().all(|r| r.size_bytes >= 0));
    }
}
