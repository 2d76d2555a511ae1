//! Common test utilities and mock block devices

pub mod builder;
#[allow(unused_imports)]
pub use builder::{DirectoryBuilder, SuspBuilder};

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use std::io;

/// In-memory block device for testing
#[derive(Debug, Clone)]
pub struct MemoryBlockDevice {
    pub data: Vec<u8>,
    pub block_size: usize,
}

impl MemoryBlockDevice {
    /// Create a new memory block device from raw data
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            block_size: 2048, // ISO9660 sector size
        }
    }
}

impl BlockIo for MemoryBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond end of device",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + src.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write beyond end of device",
            ));
        }
        self.data[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Both-endian 32-bit field
#[allow(dead_code)]
pub fn both_endian_u32(value: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[0..4].copy_from_slice(&value.to_le_bytes());
    out[4..8].copy_from_slice(&value.to_be_bytes());
    out
}

/// PX payload (RRIP 1991A layout)
#[allow(dead_code)]
pub fn px_payload(mode: u32, links: u32, uid: u32, gid: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(32);
    for value in [mode, links, uid, gid] {
        data.extend_from_slice(&both_endian_u32(value));
    }
    data
}

/// NM payload
#[allow(dead_code)]
pub fn nm_payload(flags: u8, name: &str) -> Vec<u8> {
    let mut data = vec![flags];
    data.extend_from_slice(name.as_bytes());
    data
}

/// ER payload
#[allow(dead_code)]
pub fn er_payload(id: &str, version: u8) -> Vec<u8> {
    let des = "THE ROCK RIDGE INTERCHANGE PROTOCOL";
    let src = "PLEASE CONTACT DISC PUBLISHER";
    let mut data = vec![id.len() as u8, des.len() as u8, src.len() as u8, version];
    data.extend_from_slice(id.as_bytes());
    data.extend_from_slice(des.as_bytes());
    data.extend_from_slice(src.as_bytes());
    data
}

/// SL payload from an entry flags byte and `(flags, content)` components
#[allow(dead_code)]
pub fn sl_payload(entry_flags: u8, components: &[(u8, &str)]) -> Vec<u8> {
    let mut data = vec![entry_flags];
    for (flags, content) in components {
        data.push(*flags);
        data.push(content.len() as u8);
        data.extend_from_slice(content.as_bytes());
    }
    data
}
