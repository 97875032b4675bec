//! CLI binary for RIB Parser
//!
//! Converts each input RIB file to `<input>.gpx`. A failure in one file is
//! reported and the remaining files are still processed.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use glob::glob;
use rib_parser::{export_to_gpx, has_exportable_tracks, parse_rib_file, ExportOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Git metadata emitted by build.rs
fn build_info() -> String {
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    let date = option_env!("VERGEN_GIT_COMMIT_DATE").unwrap_or("unknown");
    format!("{sha} {date}")
}

/// Version plus git metadata, shown by `--version`
fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| format!("{} ({})", env!("CARGO_PKG_VERSION"), build_info()))
}

fn build_command() -> Command {
    Command::new("RIB Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version())
        .about("Convert Recon Instruments flight HUD .RIB track logs to GPX.")
        .arg(
            Arg::new("files")
                .help("RIB files to convert (supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and per-record decoding details")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for GPX output files (default: same as input file)")
                .value_name("DIR"),
        )
}

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--debug`
fn log_filter(debug: bool) -> EnvFilter {
    let default_level = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn init_logging(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Expand glob patterns and drop paths that do not exist
fn collect_input_paths(patterns: &[&String]) -> Vec<PathBuf> {
    let mut valid_paths = Vec::new();
    for pattern in patterns {
        let paths: Vec<PathBuf> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        debug!("Glob pattern '{pattern}' matched {} files", paths.len());
                        paths
                    }
                    Err(e) => {
                        eprintln!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![PathBuf::from(pattern.as_str())]
        };

        for path in paths {
            if !path.is_file() {
                eprintln!("Warning: File does not exist: {path:?}");
                continue;
            }
            valid_paths.push(path);
        }
    }
    valid_paths
}

/// Convert a single file. `Ok(false)` means no tracks were found.
fn convert_file(path: &Path, export_options: &ExportOptions) -> Result<bool> {
    let log = match parse_rib_file(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
    {
        Some(log) => log,
        None => return Ok(false),
    };

    debug!(
        tracks = log.track_count(),
        points = log.point_count(),
        "Decoded {}",
        path.display()
    );

    if !has_exportable_tracks(&log) {
        println!(
            "All {} tracks in {} are empty, writing GPX without tracks",
            log.track_count(),
            path.display()
        );
    }

    let out_path = rib_parser::compute_export_path(path, export_options);
    println!("Writing {}", out_path.display());
    export_to_gpx(&log, path, export_options)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    Ok(true)
}

fn run(matches: &ArgMatches) -> i32 {
    let export_options = ExportOptions {
        output_dir: matches.get_one::<String>("output-dir").cloned(),
    };
    let file_patterns: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();

    let valid_paths = collect_input_paths(&file_patterns);
    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Input patterns were: {file_patterns:?}");
        return 1;
    }

    let mut processed_files = 0;
    for path in &valid_paths {
        println!();
        println!("Reading {}", path.display());

        match convert_file(path, &export_options) {
            Ok(true) => processed_files += 1,
            Ok(false) => {
                println!("No tracks found in {}", path.display());
                processed_files += 1;
            }
            Err(e) => {
                eprintln!("Error: {e:#}");
                eprintln!("Continuing with next file...");
            }
        }
    }
    println!("Done");

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        return 1;
    }
    0
}

fn main() {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("debug"));
    debug!(
        "RIB Parser v{} ({})",
        env!("CARGO_PKG_VERSION"),
        build_info()
    );
    std::process::exit(run(&matches));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition() {
        build_command().debug_assert();
    }

    #[test]
    fn test_parses_flags() {
        let matches = build_command()
            .try_get_matches_from(["rib_parser", "--debug", "--output-dir", "out", "a.RIB", "b.RIB"])
            .unwrap();
        assert!(matches.get_flag("debug"));
        assert_eq!(matches.get_one::<String>("output-dir").unwrap(), "out");
        assert_eq!(matches.get_many::<String>("files").unwrap().count(), 2);
    }

    #[test]
    fn test_long_version_carries_build_info() {
        let version = long_version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(&build_info()));
    }

    #[test]
    fn test_requires_files() {
        assert!(build_command().try_get_matches_from(["rib_parser"]).is_err());
    }
}
