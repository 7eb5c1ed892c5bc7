//! # dir-size-audit
//!
//! A CLI tool that scans a projects root for target folders with fuzzily-matched
//! names (e.g. "Incoming", "Data in", "E-mail Out") and reports their disk usage
//! sorted by size.
//!
//! Each immediate subdirectory of the root is treated as a project. Every project
//! tree is searched for folders whose names match the configured targets after
//! normalization (lowercased, punctuation and whitespace stripped), so "Data in",
//! "DATA-IN", and "data_in" all match. Sizes of nested matches are subtracted
//! from their ancestors so the grand total never double-counts bytes.
//!
//! ## Features
//!
//! - Fuzzy, punctuation-insensitive target name matching
//! - Built-in list of 49 common project-document folder names
//! - Nested-match size adjustment (no double counting)
//! - Parallel folder size calculation
//! - Sorted console summary table with grand total
//! - CSV export and JSON output for scripting
//! - Persistent configuration via `~/.config/dir-size-audit/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! dir-size-audit
//!
//! # Scan a specific root with custom targets and a CSV export
//! dir-size-audit /srv/projects -t "Data in" -t Transmittals --csv report.csv
//!
//! # Machine-readable output
//! dir-size-audit --json
//! ```

mod cli;

use anyhow::{Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use dir_size_audit::{
    config::FileConfig, export::write_csv_report, output::JsonOutput, scanner::Scanner,
};
use std::process::exit;

/// Entry point for the dir-size-audit application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function orchestrates the full pipeline: parse arguments, scan the
/// projects root for target folders, adjust nested sizes, and print or export
/// the report.
///
/// # Errors
///
/// Returns errors from thread-pool configuration, root directory validation,
/// project enumeration, or JSON serialization. CSV export failures are
/// reported on stderr but do not fail the run.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    let dir = args.directory(&file_config);
    let targets = args.target_set(&file_config);
    let csv_path = args.csv_path(&file_config);
    let scan_options = args.scan_options(&file_config);

    if targets.is_empty() {
        bail!("No usable target folder names (all names normalize to empty strings)");
    }

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    if !json_mode {
        println!("Scanning projects in: {}", dir.display());
    }

    let scanner = Scanner::new(scan_options, targets).with_quiet(json_mode);
    let report = scanner.scan_root(&dir)?;

    if json_mode {
        let output = JsonOutput::from_report(&report);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report.print_summary();
    }

    if let Some(path) = csv_path {
        match write_csv_report(&report, &path) {
            std::result::Result::Ok(()) => {
                if !json_mode {
                    println!("CSV report written to: {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("{} {e}", "Error: failed to write CSV export:".red());
            }
        }
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dir-size-audit configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default projects root to scan (defaults to current directory when not set)
# dir = "."

# Target folder names to match (replaces the built-in list of 49 names)
# targets = ["Incoming", "Transmittals", "Data in"]

# Write a CSV report to this path on every scan
# csv = "~/reports/folder-sizes.csv"

[scanning]
# Number of threads to use for size calculation (0 = all CPU cores)
# threads = 0

# Print per-project progress while scanning
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let dir_str = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    let csv_str = config.csv.as_ref().map_or_else(
        || "(none)  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    let targets_str = match &config.targets {
        Some(t) if !t.is_empty() => {
            let items: Vec<String> = t.iter().map(|name| format!("\"{name}\"")).collect();
            format!("[{}]", items.join(", "))
        }
        _ => "(built-in list of 49 names)  (default)".to_string(),
    };

    format!(
        "\
dir      = {dir}
targets  = {targets}
csv      = {csv}

[scanning]
threads  = {threads}
verbose  = {verbose}",
        dir = dir_str,
        targets = targets_str,
        csv = csv_str,
        threads = show_usize(config.scanning.threads, "0 (all cores)"),
        verbose = show_bool(config.scanning.verbose, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        std::result::Result::Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
