//! Export filtering for decoded tracks
//!
//! A boundary record may be followed directly by another boundary record,
//! leaving a track with no points. Such tracks are kept in the decoded log
//! but never written to GPX.

use crate::types::{RibLog, Track};

/// Determines if a track should be left out of the GPX output
///
/// # Returns
/// Tuple of (should_skip, reason_description)
pub fn should_skip_track(track: &Track) -> (bool, String) {
    if track.is_empty() {
        return (
            true,
            format!("{} ({}) has no track points", track, track.date_description()),
        );
    }
    (false, String::new())
}

/// True if at least one track would be written
pub fn has_exportable_tracks(log: &RibLog) -> bool {
    log.tracks.iter().any(|track| !should_skip_track(track).0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecordStats, RibHeader, TrackPoint};

    fn point() -> TrackPoint {
        TrackPoint {
            latitude: 1.0,
            longitude: 2.0,
            altitude: 3,
            speed_kmh: 4.0,
            hour: 5,
            minute: 6,
            second: 7,
        }
    }

    #[test]
    fn test_should_skip_empty_track() {
        let track = Track::new(2, 2013, 6, 15);
        let (skip, reason) = should_skip_track(&track);
        assert!(skip);
        assert_eq!(reason, "Track 2 (06-15-2013) has no track points");

        let mut track = track;
        track.points.push(point());
        assert_eq!(should_skip_track(&track), (false, String::new()));
    }

    #[test]
    fn test_has_exportable_tracks() {
        let mut log = RibLog {
            header: RibHeader::default(),
            tracks: vec![Track::new(1, 2013, 1, 1)],
            stats: RecordStats::default(),
        };
        assert!(!has_exportable_tracks(&log));

        log.tracks[0].points.push(point());
        assert!(has_exportable_tracks(&log));
    }
}
