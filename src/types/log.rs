use crate::types::{RibHeader, Track};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record statistics gathered during a decode
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordStats {
    pub boundary_records: u32,
    pub telemetry_records: u32,
    pub total_bytes: u64,
    /// Bytes of a partial record at the end of the stream (0..=19)
    pub trailing_bytes: usize,
}

/// Complete decoded RIB log
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibLog {
    pub header: RibHeader,
    pub tracks: Vec<Track>,
    pub stats: RecordStats,
}

impl RibLog {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total points across all tracks
    pub fn point_count(&self) -> usize {
        self.tracks.iter().map(Track::point_count).sum()
    }
}
