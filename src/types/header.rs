#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of the RIB file header in bytes
pub const HEADER_SIZE: usize = 9;

/// RIB file header
///
/// The header carries no fields the converter interprets. The raw bytes are
/// kept so they can be inspected when debugging unfamiliar files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibHeader {
    pub raw: [u8; HEADER_SIZE],
}

impl RibHeader {
    pub fn new(raw: [u8; HEADER_SIZE]) -> Self {
        Self { raw }
    }

    /// Hex dump of the header bytes, e.g. `00 1f a2 ...`
    pub fn hex(&self) -> String {
        self.raw
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
