use crate::common::MemoryBlockDevice;

/// Builds a raw System Use field
#[derive(Default)]
pub struct SuspBuilder {
    area: Vec<u8>,
}

#[allow(dead_code)]
impl SuspBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, signature: &[u8; 2], payload: &[u8]) -> Self {
        self.area.extend_from_slice(signature);
        self.area.push((payload.len() + 4) as u8);
        self.area.push(1);
        self.area.extend_from_slice(payload);
        self
    }

    pub fn sp(self, skip: u8) -> Self {
        self.entry(b"SP", &[0xBE, 0xEF, skip])
    }

    pub fn st(self) -> Self {
        self.entry(b"ST", &[])
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.area.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.area
    }
}

struct PendingRecord {
    identifier: Vec<u8>,
    extent_lba: u32,
    size: u32,
    flags: u8,
    system_use: Vec<u8>,
}

/// Builds a directory extent on an in-memory device
pub struct DirectoryBuilder {
    extent_lba: u32,
    records: Vec<PendingRecord>,
}

#[allow(dead_code)]
impl DirectoryBuilder {
    pub fn new(extent_lba: u32) -> Self {
        Self {
            extent_lba,
            records: Vec::new(),
        }
    }

    /// "." record
    pub fn dot(mut self, system_use: Vec<u8>) -> Self {
        self.records.push(PendingRecord {
            identifier: vec![0x00],
            extent_lba: self.extent_lba,
            size: 2048,
            flags: 0x02,
            system_use,
        });
        self
    }

    /// ".." record
    pub fn dotdot(mut self) -> Self {
        self.records.push(PendingRecord {
            identifier: vec![0x01],
            extent_lba: self.extent_lba,
            size: 2048,
            flags: 0x02,
            system_use: Vec::new(),
        });
        self
    }

    pub fn file(mut self, identifier: &str, extent_lba: u32, size: u32, system_use: Vec<u8>) -> Self {
        self.records.push(PendingRecord {
            identifier: identifier.as_bytes().to_vec(),
            extent_lba,
            size,
            flags: 0x00,
            system_use,
        });
        self
    }

    pub fn directory(mut self, identifier: &str, extent_lba: u32, system_use: Vec<u8>) -> Self {
        self.records.push(PendingRecord {
            identifier: identifier.as_bytes().to_vec(),
            extent_lba,
            size: 2048,
            flags: 0x02,
            system_use,
        });
        self
    }

    /// Lay the records out and return the device plus the extent length
    pub fn build(self, total_sectors: usize) -> (MemoryBlockDevice, u32) {
        let mut data = vec![0u8; total_sectors * 2048];
        let base = self.extent_lba as usize * 2048;
        let mut offset = 0usize;

        for record in &self.records {
            let bytes = Self::encode(record);

            // Records never span sectors
            let room = 2048 - offset % 2048;
            if bytes.len() > room {
                offset += room;
            }

            data[base + offset..base + offset + bytes.len()].copy_from_slice(&bytes);
            offset += bytes.len();
        }

        let sectors = (offset + 2047) / 2048;
        (MemoryBlockDevice::new(data), (sectors.max(1) * 2048) as u32)
    }

    fn encode(record: &PendingRecord) -> Vec<u8> {
        let id_len = record.identifier.len();
        let pad = if id_len % 2 == 0 { 1 } else { 0 };
        let mut len = 33 + id_len + pad + record.system_use.len();
        if len % 2 != 0 {
            len += 1;
        }

        let mut bytes = vec![0u8; len];
        bytes[0] = len as u8;
        bytes[2..10].copy_from_slice(&super::both_endian_u32(record.extent_lba));
        bytes[10..18].copy_from_slice(&super::both_endian_u32(record.size));
        bytes[25] = record.flags;
        bytes[28] = 1; // Volume seq (both-endian 16-bit)
        bytes[31] = 1;
        bytes[32] = id_len as u8;
        bytes[33..33 + id_len].copy_from_slice(&record.identifier);

        let su_start = 33 + id_len + pad;
        bytes[su_start..su_start + record.system_use.len()].copy_from_slice(&record.system_use);
        bytes
    }
}
