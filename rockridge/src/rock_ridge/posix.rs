//! POSIX file attributes (PX entry)
//!
//! Payload, every field both-endian 32-bit:
//!
//! | Offset | Field          |
//! |--------|----------------|
//! | 0      | file mode      |
//! | 8      | links          |
//! | 16     | user ID        |
//! | 24     | group ID       |
//! | 32     | serial number (RRIP 1.12 only) |

use crate::error::{Result, RockRidgeError};
use crate::susp::{RecordKind, SystemUseEntry, SystemUseEntrySlice};
use crate::types::FileMode;
use crate::utils::endian::both_endian_u32;

/// PX payload size before RRIP 1.12
const PX_LEN_1991A: usize = 32;

/// PX payload size with the serial number field
const PX_LEN_112: usize = 40;

/// Decoded PX entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixAttributes {
    /// File mode
    pub mode: FileMode,

    /// Number of hard links
    pub links: u32,

    /// Owner user ID
    pub uid: u32,

    /// Owner group ID
    pub gid: u32,

    /// File serial number (inode), when recorded
    pub serial: Option<u32>,
}

impl PosixAttributes {
    /// Parse a full PX entry
    pub fn parse(entry: &SystemUseEntry<'_>) -> Result<Self> {
        let data = entry.data();
        if data.len() < PX_LEN_1991A {
            return Err(RockRidgeError::TruncatedField);
        }

        let serial = if data.len() >= PX_LEN_112 {
            Some(both_endian_u32(&data[32..40])?)
        } else {
            None
        };

        Ok(Self {
            mode: parse_mode(entry)?,
            links: both_endian_u32(&data[8..16])?,
            uid: both_endian_u32(&data[16..24])?,
            gid: both_endian_u32(&data[24..32])?,
            serial,
        })
    }
}

/// Decode only the mode field of a PX entry
pub fn parse_mode(entry: &SystemUseEntry<'_>) -> Result<FileMode> {
    let raw = both_endian_u32(entry.data())?;
    Ok(FileMode::from_posix(raw))
}

impl<'a> SystemUseEntrySlice<'a> {
    fn first_px(&self) -> Result<&'a SystemUseEntry<'a>> {
        // Multiple PX entries are forbidden; the first one wins.
        self.of_kind(RecordKind::PosixAttributes)
            .next()
            .ok_or(RockRidgeError::MandatoryEntryMissing("PX"))
    }

    /// File mode from the first PX entry
    pub fn posix_mode(&self) -> Result<FileMode> {
        parse_mode(self.first_px()?)
    }

    /// Full POSIX attributes from the first PX entry
    pub fn posix_attributes(&self) -> Result<PosixAttributes> {
        PosixAttributes::parse(self.first_px()?)
    }
}
