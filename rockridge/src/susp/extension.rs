//! Extension reference (ER) entries
//!
//! ER entries name the SUSP extensions recorded on the volume:
//!
//! | Offset | Field    |
//! |--------|----------|
//! | 0      | LEN_ID   |
//! | 1      | LEN_DES  |
//! | 2      | LEN_SRC  |
//! | 3      | EXT_VER  |
//! | 4..    | EXT_ID, EXT_DES, EXT_SRC |

use super::{RecordKind, SystemUseEntry, SystemUseEntrySlice};
use crate::error::{Result, RockRidgeError};
use alloc::string::String;
use alloc::vec::Vec;

/// Decoded extension reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRecord {
    /// Extension identifier, e.g. "RRIP_1991A"
    pub identifier: String,

    /// Extension version
    pub version: u8,

    /// Human readable description
    pub descriptor: String,

    /// Where the extension is specified
    pub source: String,
}

impl ExtensionRecord {
    /// Parse an ER entry
    pub fn parse(entry: &SystemUseEntry<'_>) -> Result<Self> {
        let data = entry.data();
        if data.len() < 4 {
            return Err(RockRidgeError::MalformedExtensionRecord);
        }

        let id_len = data[0] as usize;
        let des_len = data[1] as usize;
        let src_len = data[2] as usize;
        let version = data[3];

        let body = &data[4..];
        if id_len + des_len + src_len > body.len() {
            return Err(RockRidgeError::MalformedExtensionRecord);
        }

        let (identifier, body) = body.split_at(id_len);
        let (descriptor, body) = body.split_at(des_len);
        let source = &body[..src_len];

        Ok(Self {
            identifier: String::from_utf8_lossy(identifier).into_owned(),
            version,
            descriptor: String::from_utf8_lossy(descriptor).into_owned(),
            source: String::from_utf8_lossy(source).into_owned(),
        })
    }
}

impl SystemUseEntrySlice<'_> {
    /// Extract every ER entry in order
    pub fn extension_records(&self) -> Result<Vec<ExtensionRecord>> {
        self.of_kind(RecordKind::ExtensionReference)
            .map(ExtensionRecord::parse)
            .collect()
    }
}
