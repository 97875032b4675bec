use std::fmt;

/// Errors raised while decoding a RIB track log
#[derive(Debug)]
pub enum RibError {
    /// I/O errors
    Io(std::io::Error),
    /// Fewer than the 9 header bytes were present
    TruncatedHeader { available: usize },
    /// A telemetry record appeared before any track-boundary record
    TelemetryBeforeTrack { record_index: usize },
}

impl fmt::Display for RibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RibError::Io(err) => write!(f, "I/O error: {}", err),
            RibError::TruncatedHeader { available } => write!(
                f,
                "Error reading header: expected {} bytes, found {}",
                crate::types::HEADER_SIZE,
                available
            ),
            RibError::TelemetryBeforeTrack { record_index } => write!(
                f,
                "No current track at record {} - malformed file?",
                record_index
            ),
        }
    }
}

impl std::error::Error for RibError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RibError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RibError {
    fn from(err: std::io::Error) -> Self {
        RibError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, RibError>;
