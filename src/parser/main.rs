use crate::error::{Result, RibError};
use crate::parser::record::{decode_record, LogRecord};
use crate::parser::stream::RibDataStream;
use crate::types::{RecordStats, RibLog, Track};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Parse a RIB file from disk
///
/// Returns `Ok(None)` when the file is structurally valid but contains no
/// track-boundary records.
pub fn parse_rib_file(file_path: &Path) -> Result<Option<RibLog>> {
    let file_data = std::fs::read(file_path)?;
    debug!(
        path = %file_path.display(),
        bytes = file_data.len(),
        "Read RIB file"
    );
    parse_rib_bytes(&file_data)
}

/// Parse RIB data from memory
///
/// Tracks are returned in file order, each holding its points in file order.
/// Any structural error aborts the whole decode; nothing decoded so far is
/// returned. `Ok(None)` means no track-boundary record was seen.
pub fn parse_rib_bytes(data: &[u8]) -> Result<Option<RibLog>> {
    let mut stream = RibDataStream::new(data);
    let header = stream.read_header()?;
    debug!(header = %header.hex(), "RIB header");

    let mut stats = RecordStats {
        total_bytes: data.len() as u64,
        ..RecordStats::default()
    };
    let mut tracks: Vec<Track> = Vec::new();
    let mut record_index = 0usize;

    while let Some(raw) = stream.read_record() {
        match decode_record(&raw) {
            LogRecord::TrackStart { year, month, day } => {
                stats.boundary_records += 1;
                debug!("Reading track {}", stats.boundary_records);
                tracks.push(Track::new(stats.boundary_records, year, month, day));
            }
            LogRecord::Telemetry(point) => {
                // The last pushed track is the current one
                let current = tracks
                    .last_mut()
                    .ok_or(RibError::TelemetryBeforeTrack { record_index })?;
                trace!("{}", point);
                stats.telemetry_records += 1;
                current.points.push(point);
            }
        }
        record_index += 1;
    }

    stats.trailing_bytes = stream.remaining();
    if stats.trailing_bytes > 0 {
        warn!(
            bytes = stats.trailing_bytes,
            "Discarding partial record at end of stream"
        );
    }

    if tracks.is_empty() {
        return Ok(None);
    }

    Ok(Some(RibLog {
        header,
        tracks,
        stats,
    }))
}
