//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. It provides structured access
//! to user input and handles argument defaults.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dir_size_audit::config::file::{FileConfig, expand_tilde};
use dir_size_audit::config::ScanOptions;
use dir_size_audit::targets::TargetSet;

/// Command-line arguments for controlling directory scanning behavior.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads to use for folder size calculation
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    /// Higher values can improve performance on systems with fast storage.
    #[arg(long)]
    threads: Option<usize>,

    /// Print per-project progress while scanning
    ///
    /// When enabled, prints one line per project and one per discovered target
    /// folder. Access warnings are reported on stderr regardless of this flag.
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// This struct defines the complete command-line interface for the
/// dir-size-audit tool. Helper methods accept a [`FileConfig`] reference so
/// that config-file values act as defaults when the corresponding CLI
/// argument is not provided.
#[derive(Parser)]
#[command(name = "dir-size-audit")]
#[command(
    about = "Scan project directories for fuzzily-named target folders (Incoming, Transmittals, ...) and report their disk usage sorted by size"
)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Root directory containing the project directories to scan
    ///
    /// Its immediate subdirectories are treated as projects. Defaults to the
    /// current directory if not specified here or in the config file.
    dir: Option<PathBuf>,

    /// Target folder name to match (repeatable)
    ///
    /// Names are matched case- and punctuation-insensitively: `--target "Data in"`
    /// also matches "DATA-IN" and "data_in". When no targets are given, a
    /// built-in list of 49 common naming variants is used.
    #[arg(short = 't', long = "target", action = clap::ArgAction::Append)]
    targets: Vec<String>,

    /// Export the results to a CSV file at the given path
    ///
    /// The file is overwritten on each run; its parent directory is created
    /// if absent. An export failure does not fail the scan.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress spinner,
    /// summary table) is suppressed and a single JSON document is printed
    /// to stdout.
    #[arg(long)]
    json: bool,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the projects root directory from CLI args, config file, or default.
    ///
    /// Priority: CLI argument > config file `dir` > current directory (`.`).
    /// Tilde expansion is applied to paths originating from the config file.
    #[must_use]
    pub fn directory(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref dir) = self.dir {
            return dir.clone();
        }

        if let Some(ref dir) = config.dir {
            return expand_tilde(dir);
        }

        PathBuf::from(".")
    }

    /// Build the normalized target set from CLI args, config file, or the built-in list.
    ///
    /// Priority: CLI `--target` arguments > config file `targets` > built-in defaults.
    #[must_use]
    pub fn target_set(&self, config: &FileConfig) -> TargetSet {
        if !self.targets.is_empty() {
            return TargetSet::from_raw_names(&self.targets);
        }

        if let Some(ref targets) = config.targets
            && !targets.is_empty()
        {
            return TargetSet::from_raw_names(targets);
        }

        TargetSet::default_targets()
    }

    /// Resolve the optional CSV export path from CLI args or config file.
    ///
    /// Priority: CLI `--csv` > config file `csv` > none (no export).
    #[must_use]
    pub fn csv_path(&self, config: &FileConfig) -> Option<PathBuf> {
        self.csv
            .clone()
            .or_else(|| config.csv.as_ref().map(|p| expand_tilde(p)))
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **verbose**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
        }
    }
}
