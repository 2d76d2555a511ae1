//! Directory iteration
//!
//! Iterator for reading directory entries sequentially.

use super::{DirectoryEntry, record::DirectoryRecord};
use crate::error::{Result, RockRidgeError};
use crate::types::SECTOR_SIZE;
use crate::utils::string;
use alloc::boxed::Box;
use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;

/// Directory iterator
pub struct DirectoryIterator<'a, B: BlockIo> {
    block_io: &'a mut B,
    extent_lba: u32,
    extent_len: u32,
    offset: usize,
    susp_skip: u8,
    current_sector: Box<[u8; SECTOR_SIZE]>,
    current_sector_lba: Option<u64>,
}

impl<'a, B: BlockIo> DirectoryIterator<'a, B> {
    /// Create new directory iterator
    pub fn new(block_io: &'a mut B, extent_lba: u32, extent_len: u32) -> Self {
        Self {
            block_io,
            extent_lba,
            extent_len,
            offset: 0,
            susp_skip: 0,
            current_sector: Box::new([0u8; SECTOR_SIZE]),
            current_sector_lba: None,
        }
    }

    /// Bytes to skip at the start of every System Use field (SP `LEN_SKP`)
    pub fn with_susp_skip(mut self, skip: u8) -> Self {
        self.susp_skip = skip;
        self
    }

    fn finish(&mut self) {
        self.offset = self.extent_len as usize;
    }
}

impl<'a, B: BlockIo> Iterator for DirectoryIterator<'a, B> {
    type Item = Result<DirectoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.offset >= self.extent_len as usize {
                return None;
            }

            let sector_offset = self.offset / SECTOR_SIZE;
            let lba = self.extent_lba as u64 + sector_offset as u64;
            let offset_in_sector = self.offset % SECTOR_SIZE;

            if self.current_sector_lba != Some(lba) {
                log::trace!("reading directory sector {}", lba);
                if self.block_io.read_blocks(Lba(lba), &mut self.current_sector[..]).is_err() {
                    self.finish();
                    return Some(Err(RockRidgeError::IoError));
                }
                self.current_sector_lba = Some(lba);
            }

            let sector_data = &self.current_sector[offset_in_sector..];

            // Records never span sectors; a zero length byte pads to the next one
            if sector_data.is_empty() || sector_data[0] == 0 {
                self.offset = (sector_offset + 1) * SECTOR_SIZE;
                continue;
            }

            let record = match DirectoryRecord::parse(sector_data) {
                Ok(r) => r,
                Err(e) => {
                    // Without a valid length there is no next record to find
                    log::debug!("corrupt directory record at offset {}", self.offset);
                    self.finish();
                    return Some(Err(e));
                }
            };

            self.offset += record.length();

            if record.is_self_or_parent() {
                continue;
            }

            return Some(build_entry(&record, self.susp_skip));
        }
    }
}

fn build_entry(record: &DirectoryRecord<'_>, susp_skip: u8) -> Result<DirectoryEntry> {
    let entry = DirectoryEntry {
        name: string::identifier_to_name(record.file_identifier()),
        extent_lba: record.extent_lba()?,
        data_length: record.data_length()?,
        flags: record.flags(),
        rock_ridge: None,
    };

    resolve_rock_ridge(entry, record, susp_skip)
}

/// Attach Rock Ridge metadata and prefer the NM name
#[cfg(feature = "rock-ridge")]
fn resolve_rock_ridge(
    mut entry: DirectoryEntry,
    record: &DirectoryRecord<'_>,
    susp_skip: u8,
) -> Result<DirectoryEntry> {
    use crate::rock_ridge::RockRidgeMetadata;
    use crate::susp::{parse_system_use_area, SystemUseEntrySlice};

    let entries = parse_system_use_area(record.system_use_area(susp_skip))?;
    let metadata = RockRidgeMetadata::decode(&SystemUseEntrySlice::new(&entries))?;

    if !metadata.is_empty() {
        if let Some(name) = metadata.name.as_ref().filter(|n| !n.is_empty()) {
            log::debug!("rock ridge name {:?} for {:?}", name, entry.name);
            entry.name = name.clone();
        }
        entry.rock_ridge = Some(metadata);
    }

    Ok(entry)
}

#[cfg(not(feature = "rock-ridge"))]
fn resolve_rock_ridge(
    entry: DirectoryEntry,
    _record: &DirectoryRecord<'_>,
    _susp_skip: u8,
) -> Result<DirectoryEntry> {
    Ok(entry)
}
