//! Target-folder name matching.
//!
//! Folder names in real project trees are wildly inconsistent: "E-MAIL IN",
//! "e-mail_in" and "05 Email In" all refer to the same thing. This module
//! reduces names to a canonical comparison key and holds the set of
//! normalized target names a scan matches against.

use std::collections::HashSet;

/// Built-in target folder names used when none are supplied on the command
/// line or in the config file.
///
/// These are deliberately redundant naming variants; duplicates collapse
/// once normalized.
pub const DEFAULT_TARGET_NAMES: [&str; 49] = [
    "Incoming",
    "05 Incoming",
    "Outgoing",
    "06 Outgoing",
    "Transmittals",
    "Transmittal",
    "Transmittals In",
    "Transmittals Out",
    "Data In",
    "Data Out",
    "Data Transfer",
    "Data Transfers",
    "Project Data",
    "B. Project Data",
    "Email",
    "E-mail",
    "E-mail In",
    "E-mail Out",
    "Email In",
    "Email Out",
    "Emails",
    "Mail In",
    "Mail Out",
    "Mail Inbox",
    "Mail Outbox",
    "Correspondence",
    "Correspondence In",
    "Correspondence Out",
    "FTP",
    "FTP Upload",
    "FTP Uploads",
    "FTP Download",
    "FTP Downloads",
    "For FTP",
    "File Transfers",
    "File Transfer",
    "Uploads",
    "Downloads",
    "Received",
    "Sent",
    "Incoming Mail",
    "Outgoing Mail",
    "Incoming Files",
    "Outgoing Files",
    "Shared In",
    "Shared Out",
    "Exchange",
    "Drop Box",
    "Dropbox",
];

/// Reduce a folder name to its canonical comparison key.
///
/// Lowercases the input and removes every character that is not an ASCII
/// letter or digit: spaces, punctuation, dashes, underscores and non-ASCII
/// characters all disappear. Two folder names refer to the same target iff
/// their normalized forms are equal.
///
/// The function is pure and total: any input produces a (possibly empty)
/// output, and it is idempotent.
///
/// # Examples
///
/// ```
/// # use dir_size_audit::targets::normalize_name;
/// assert_eq!(normalize_name("FTP Upload"), "ftpupload");
/// assert_eq!(normalize_name("ftp-upload"), "ftpupload");
/// assert_eq!(normalize_name("E-MAIL IN"), "emailin");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// An immutable set of normalized target names, derived once per scan.
#[derive(Debug, Clone)]
pub struct TargetSet(HashSet<String>);

impl TargetSet {
    /// Build a target set from raw (non-normalized) names.
    ///
    /// Names that normalize to the empty string (pure punctuation) are
    /// dropped: an empty key would match nothing meaningful.
    #[must_use]
    pub fn from_raw_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| normalize_name(name.as_ref()))
                .filter(|key| !key.is_empty())
                .collect(),
        )
    }

    /// Build the default target set from [`DEFAULT_TARGET_NAMES`].
    #[must_use]
    pub fn default_targets() -> Self {
        Self::from_raw_names(DEFAULT_TARGET_NAMES)
    }

    /// Whether the given raw folder name matches a target.
    #[must_use]
    pub fn matches(&self, folder_name: &str) -> bool {
        self.0.contains(&normalize_name(folder_name))
    }

    /// Number of distinct normalized names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
