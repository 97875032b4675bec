//! Field conversion utilities for RIB decoding
//!
//! RIB telemetry stores coordinates as whole degrees plus decimal minutes,
//! with the sign carried in the high bit of the minutes byte, and speed and
//! altitude as big-endian unsigned halfwords.

/// Decode a 4-byte degrees+minutes coordinate to signed decimal degrees
///
/// Layout: `b0` whole degrees, `b1 & 0x7f` whole minutes with bit 7 as the
/// sign, `b2` hundredths and `b3` ten-thousandths of a minute.
pub fn decode_coordinate(bytes: [u8; 4]) -> f64 {
    let [b0, b1, b2, b3] = bytes;

    let degrees = f64::from(b0);
    let minutes = f64::from(b1 & 0x7f) + f64::from(b2) * 0.01 + f64::from(b3) * 0.0001;
    let value = degrees + minutes / 60.0;

    if b1 & 0x80 != 0 {
        -value
    } else {
        value
    }
}

/// Decode a big-endian unsigned 16-bit value
pub fn decode_halfword(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Convert raw speed (tenths of km/h) to km/h
pub fn convert_speed_kmh(raw_value: u16) -> f64 {
    f64::from(raw_value) * 0.1
}
