//! Directory Record view
//!
//! Directory records describe files and subdirectories. Rock Ridge data
//! lives in the System Use field at the end of each record.
//!
//! | BP     | Field                         |
//! |--------|-------------------------------|
//! | 1      | Length of directory record    |
//! | 2      | Extended attribute length     |
//! | 3-10   | Extent location (both-endian) |
//! | 11-18  | Data length (both-endian)     |
//! | 19-25  | Recording date and time       |
//! | 26     | File flags                    |
//! | 27     | File unit size                |
//! | 28     | Interleave gap size           |
//! | 29-32  | Volume sequence number        |
//! | 33     | File identifier length        |
//! | 34..   | File identifier, padding, System Use |

use crate::error::{Result, RockRidgeError};
use crate::types::FileFlags;
use crate::utils::endian::both_endian_u32;

/// Offset of the file identifier
const FILE_ID_OFFSET: usize = 33;

/// Borrowed directory record
#[derive(Debug, Clone, Copy)]
pub struct DirectoryRecord<'a> {
    bytes: &'a [u8],
}

impl<'a> DirectoryRecord<'a> {
    /// Minimum record length
    pub const MIN_LENGTH: u8 = 34;

    /// Parse directory record from bytes
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < Self::MIN_LENGTH as usize {
            return Err(RockRidgeError::InvalidDirectoryRecord);
        }

        let length = data[0] as usize;
        if length < Self::MIN_LENGTH as usize || length > data.len() {
            return Err(RockRidgeError::InvalidDirectoryRecord);
        }

        let file_id_len = data[32] as usize;
        if FILE_ID_OFFSET + file_id_len > length {
            return Err(RockRidgeError::InvalidDirectoryRecord);
        }

        Ok(Self {
            bytes: &data[..length],
        })
    }

    /// Length of the whole record
    pub fn length(&self) -> usize {
        self.bytes.len()
    }

    /// Extent location
    pub fn extent_lba(&self) -> Result<u32> {
        both_endian_u32(&self.bytes[2..10])
    }

    /// Data length
    pub fn data_length(&self) -> Result<u32> {
        both_endian_u32(&self.bytes[10..18])
    }

    /// Parse file flags
    pub fn flags(&self) -> FileFlags {
        FileFlags::from_byte(self.bytes[25])
    }

    /// File identifier bytes
    pub fn file_identifier(&self) -> &'a [u8] {
        let len = self.bytes[32] as usize;
        &self.bytes[FILE_ID_OFFSET..FILE_ID_OFFSET + len]
    }

    /// Is this the "." or ".." record?
    pub fn is_self_or_parent(&self) -> bool {
        matches!(self.file_identifier(), [0x00] | [0x01])
    }

    /// System Use field, minus the first `skip` bytes announced by SP
    pub fn system_use_area(&self, skip: u8) -> &'a [u8] {
        let id_len = self.bytes[32] as usize;
        // Identifier is padded to an even length
        let pad = if id_len % 2 == 0 { 1 } else { 0 };
        let start = (FILE_ID_OFFSET + id_len + pad + skip as usize).min(self.bytes.len());
        &self.bytes[start..]
    }
}
