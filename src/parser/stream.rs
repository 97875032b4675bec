use crate::error::{Result, RibError};
use crate::types::{RibHeader, HEADER_SIZE};

/// Size of a single log record in bytes
pub const RECORD_SIZE: usize = 20;

/// A single 20-byte log record
///
/// All field reads go through [`RawRecord::octet`] or
/// [`RawRecord::signed_octet`] so arithmetic always sees 0..=255 unless a
/// field is explicitly defined as a signed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord {
    bytes: [u8; RECORD_SIZE],
}

impl RawRecord {
    pub fn new(bytes: [u8; RECORD_SIZE]) -> Self {
        Self { bytes }
    }

    /// Unsigned octet at `index`
    pub fn octet(&self, index: usize) -> u8 {
        self.bytes[index]
    }

    /// Octet at `index` reinterpreted as a signed byte
    pub fn signed_octet(&self, index: usize) -> i8 {
        self.bytes[index] as i8
    }

    /// `N` consecutive unsigned octets starting at `offset`
    pub fn octets<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0u8; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.octet(offset + i);
        }
        out
    }

    /// High bit of the first byte marks the start of a new track
    pub fn is_track_boundary(&self) -> bool {
        self.octet(0) & 0x80 != 0
    }
}

/// RIB data stream for reading the header and fixed-size records
pub struct RibDataStream<'a> {
    data: &'a [u8],
    pub pos: usize,
    end: usize,
}

impl<'a> RibDataStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    /// Read exactly `N` bytes, or nothing if fewer remain
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.remaining() < N {
            return None;
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Some(out)
    }

    /// Read the 9-byte file header
    pub fn read_header(&mut self) -> Result<RibHeader> {
        let available = self.remaining();
        self.read_array::<HEADER_SIZE>()
            .map(RibHeader::new)
            .ok_or(RibError::TruncatedHeader { available })
    }

    /// Read the next record; `None` once fewer than 20 bytes remain
    pub fn read_record(&mut self) -> Option<RawRecord> {
        self.read_array::<RECORD_SIZE>().map(RawRecord::new)
    }
}
