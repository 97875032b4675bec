//! Record dispatch for RIB log records
//!
//! Byte layout of a telemetry record:
//!
//! | offset | field                         |
//! |--------|-------------------------------|
//! | 0..3   | hour, minute, second          |
//! | 3..7   | latitude (degrees+minutes)    |
//! | 7..11  | longitude (degrees+minutes)   |
//! | 11..13 | speed, 0.1 km/h               |
//! | 13..15 | altitude, meters              |
//! | 15..20 | reserved                      |
//!
//! A track-boundary record carries `0x80 | (year - 2000)`, month and day in
//! its first three bytes; the rest is unused.

use crate::conversion::{convert_speed_kmh, decode_coordinate, decode_halfword};
use crate::parser::stream::RawRecord;
use crate::types::TrackPoint;

/// Base year added to the 7-bit year of a boundary record
pub const YEAR_BASE: u16 = 2000;

/// A decoded log record
#[derive(Debug, Clone, PartialEq)]
pub enum LogRecord {
    TrackStart { year: u16, month: i8, day: i8 },
    Telemetry(TrackPoint),
}

/// Decode a raw record based on its tag bit
pub fn decode_record(record: &RawRecord) -> LogRecord {
    if record.is_track_boundary() {
        LogRecord::TrackStart {
            year: YEAR_BASE + u16::from(record.octet(0) & 0x7f),
            month: record.signed_octet(1),
            day: record.signed_octet(2),
        }
    } else {
        LogRecord::Telemetry(decode_telemetry(record))
    }
}

fn decode_telemetry(record: &RawRecord) -> TrackPoint {
    TrackPoint {
        hour: record.signed_octet(0),
        minute: record.signed_octet(1),
        second: record.signed_octet(2),
        latitude: decode_coordinate(record.octets(3)),
        longitude: decode_coordinate(record.octets(7)),
        speed_kmh: convert_speed_kmh(decode_halfword(record.octets(11))),
        altitude: decode_halfword(record.octets(13)),
    }
}
