//! Export functionality for decoded RIB logs
//!
//! Writes GPX documents next to the input file or into a chosen directory.

use crate::filters::should_skip_track;
use crate::gpx::write_gpx;
use crate::types::RibLog;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Export options for controlling output location
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Directory for GPX files (default: same directory as the input file)
    pub output_dir: Option<String>,
}

/// Result of a GPX export
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub gpx_path: Option<PathBuf>,
    pub tracks_written: usize,
    pub points_written: usize,
    pub tracks_skipped: usize,
}

/// Compute the GPX output path for an input file
///
/// The full input file name is kept and `.gpx` appended, so `FLIGHT.RIB`
/// becomes `FLIGHT.RIB.gpx`.
pub fn compute_export_path(input_path: &Path, export_options: &ExportOptions) -> PathBuf {
    let mut file_name = input_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "unknown".into());
    file_name.push(".gpx");

    match export_options.output_dir.as_deref() {
        Some(dir) => Path::new(dir).join(file_name),
        None => input_path.with_file_name(file_name),
    }
}

/// Export a decoded log to a GPX file
///
/// The document is rendered in memory and written in one call. The output
/// directory is created if it does not exist.
pub fn export_to_gpx(
    log: &RibLog,
    input_path: &Path,
    export_options: &ExportOptions,
) -> Result<ExportReport> {
    let gpx_path = compute_export_path(input_path, export_options);

    let mut report = ExportReport::default();
    for track in &log.tracks {
        let (skip, reason) = should_skip_track(track);
        if skip {
            debug!("Skipping {reason}");
            report.tracks_skipped += 1;
        } else {
            report.tracks_written += 1;
            report.points_written += track.point_count();
        }
    }

    if let Some(parent) = gpx_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&gpx_path, write_gpx(&log.tracks))?;
    info!(
        path = %gpx_path.display(),
        tracks = report.tracks_written,
        points = report.points_written,
        "Exported GPX"
    );

    report.gpx_path = Some(gpx_path);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_export_path_next_to_input() {
        let path = compute_export_path(Path::new("logs/FLIGHT.RIB"), &ExportOptions::default());
        assert_eq!(path, Path::new("logs/FLIGHT.RIB.gpx"));

        let path = compute_export_path(Path::new("FLIGHT.RIB"), &ExportOptions::default());
        assert_eq!(path, Path::new("FLIGHT.RIB.gpx"));
    }

    #[test]
    fn test_compute_export_path_with_output_dir() {
        let options = ExportOptions {
            output_dir: Some("out".to_string()),
        };
        let path = compute_export_path(Path::new("logs/FLIGHT.RIB"), &options);
        assert_eq!(path, Path::new("out/FLIGHT.RIB.gpx"));
    }
}
