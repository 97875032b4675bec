use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One telemetry sample from a RIB telemetry record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters. Decoded as an unsigned halfword, so never negative.
    pub altitude: u16,
    pub speed_kmh: f64,
    /// Time of day as recorded by the device. Raw signed octets, not validated.
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
}

impl fmt::Display for TrackPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}  speed: {:.1} km/h  alt: {}   {:.6}  {:.6}",
            self.hour,
            self.minute,
            self.second,
            self.speed_kmh,
            self.altitude,
            self.latitude,
            self.longitude
        )
    }
}

/// One recording session, started by a track-boundary record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    /// 1-based, in order of discovery in the file
    pub sequence_number: u32,
    pub year: u16,
    /// Raw signed octet, not range-checked
    pub month: i8,
    /// Raw signed octet, not range-checked
    pub day: i8,
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(sequence_number: u32, year: u16, month: i8, day: i8) -> Self {
        Self {
            sequence_number,
            year,
            month,
            day,
            points: Vec::new(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Track name as written to GPX
    pub fn name(&self) -> String {
        format!("Track {}", self.sequence_number)
    }

    /// Start date formatted as `MM-DD-YYYY`
    pub fn date_description(&self) -> String {
        format!("{:02}-{:02}-{:04}", self.month, self.day, self.year)
    }

    /// Combine the track date with a point's time of day.
    ///
    /// RIB files carry no timezone; the result is always marked UTC.
    pub fn timestamp_of(&self, point: &TrackPoint) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, point.hour, point.minute, point.second
        )
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Track {}", self.sequence_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point() -> TrackPoint {
        TrackPoint {
            latitude: 45.088333,
            longitude: -122.5,
            altitude: 1234,
            speed_kmh: 30.0,
            hour: 9,
            minute: 5,
            second: 7,
        }
    }

    #[test]
    fn test_track_formatting() {
        let track = Track::new(3, 2013, 6, 15);
        assert_eq!(track.name(), "Track 3");
        assert_eq!(track.to_string(), "Track 3");
        assert_eq!(track.date_description(), "06-15-2013");
        assert_eq!(track.timestamp_of(&sample_point()), "2013-06-15T09:05:07Z");
    }

    #[test]
    fn test_out_of_range_fields_pass_through() {
        let track = Track::new(1, 2127, -3, 40);
        let mut point = sample_point();
        point.hour = 77;
        point.second = -1;
        assert_eq!(track.date_description(), "-3-40-2127");
        assert_eq!(track.timestamp_of(&point), "2127--3-40T77:05:-1Z");
    }

    #[test]
    fn test_point_summary() {
        assert_eq!(
            sample_point().to_string(),
            "09:05:07  speed: 30.0 km/h  alt: 1234   45.088333  -122.500000"
        );
    }

    #[test]
    fn test_track_point_count() {
        let mut track = Track::new(1, 2013, 1, 1);
        assert!(track.is_empty());
        track.points.push(sample_point());
        assert_eq!(track.point_count(), 1);
        assert!(!track.is_empty());
    }
}
