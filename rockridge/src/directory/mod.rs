//! Directory records and Rock Ridge aware iteration

pub mod iterator;
pub mod record;

use crate::error::{Result, RockRidgeError};
use crate::rock_ridge::{has_rock_ridge, RockRidgeMetadata};
use crate::susp::{parse_system_use_area, SystemUseEntrySlice};
use crate::types::{FileFlags, SECTOR_SIZE};
use alloc::string::String;
use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;
use record::DirectoryRecord;

/// Directory entry with Rock Ridge metadata resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Rock Ridge name when present, else the ISO9660 identifier without version
    pub name: String,

    /// Extent location (LBA)
    pub extent_lba: u32,

    /// Data length (bytes)
    pub data_length: u32,

    /// File flags
    pub flags: FileFlags,

    /// Decoded Rock Ridge entries, if any
    pub rock_ridge: Option<RockRidgeMetadata>,
}

impl DirectoryEntry {
    /// Is this a directory?
    pub fn is_directory(&self) -> bool {
        match self.rock_ridge.as_ref().and_then(|rr| rr.attributes) {
            Some(attrs) => attrs.mode.is_dir(),
            None => self.flags.directory,
        }
    }

    /// Is this a symbolic link?
    pub fn is_symlink(&self) -> bool {
        self.rock_ridge
            .as_ref()
            .and_then(|rr| rr.attributes)
            .map(|attrs| attrs.mode.is_symlink())
            .unwrap_or(false)
    }

    /// Symbolic link target, if Rock Ridge recorded one
    pub fn symlink_target(&self) -> Option<&str> {
        self.rock_ridge.as_ref()?.symlink_target.as_deref()
    }
}

/// SUSP / Rock Ridge information found in the root "." record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RockRidgeProbe {
    /// Whether an SP entry opens the System Use field
    pub susp_present: bool,

    /// Bytes to skip in every System Use field
    pub skip_length: u8,

    /// Whether an ER entry announces Rock Ridge
    pub rock_ridge: bool,
}

/// Detect SUSP and Rock Ridge from the root directory
///
/// The first record of the root extent must be ".". Its System Use field
/// starts with SP and carries the ER entries for the volume. ER entries
/// moved to a continuation area are not followed.
///
/// # Arguments
/// * `block_io` - Block device
/// * `root_lba` - Root directory extent location
/// * `root_len` - Root directory extent length
pub fn probe_rock_ridge<B: BlockIo>(
    block_io: &mut B,
    root_lba: u32,
    root_len: u32,
) -> Result<RockRidgeProbe> {
    if (root_len as usize) < DirectoryRecord::MIN_LENGTH as usize {
        return Err(RockRidgeError::InvalidDirectoryRecord);
    }

    let mut sector = [0u8; SECTOR_SIZE];
    block_io
        .read_blocks(Lba(root_lba as u64), &mut sector)
        .map_err(|_| RockRidgeError::IoError)?;

    let record = DirectoryRecord::parse(&sector)?;
    if record.file_identifier() != [0x00] {
        return Err(RockRidgeError::InvalidDirectoryRecord);
    }

    let entries = parse_system_use_area(record.system_use_area(0))?;
    let entries = SystemUseEntrySlice::new(&entries);

    let Some(skip_length) = entries.susp_skip_length() else {
        log::debug!("no SUSP indicator in root directory");
        return Ok(RockRidgeProbe::default());
    };

    let rock_ridge = has_rock_ridge(&entries)?;
    log::debug!("SUSP present, skip {}, rock ridge {}", skip_length, rock_ridge);

    Ok(RockRidgeProbe {
        susp_present: true,
        skip_length,
        rock_ridge,
    })
}
