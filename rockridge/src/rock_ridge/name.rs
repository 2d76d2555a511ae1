//! Alternate name (NM entry)
//!
//! A long name may be split over several NM entries. The CONTINUE flag is
//! not consulted: every NM entry of the record contributes its fragment,
//! in order.

use crate::susp::{RecordKind, SystemUseEntry, SystemUseEntrySlice};
use alloc::string::String;

/// NM flag: name continues in the next NM entry
pub const NM_CONTINUE: u8 = 0x01;
/// NM flag: name refers to the current directory
pub const NM_CURRENT: u8 = 0x02;
/// NM flag: name refers to the parent directory
pub const NM_PARENT: u8 = 0x04;

/// Decoded NM entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateName {
    /// Flags
    pub flags: u8,

    /// Name content
    pub name: String,
}

impl AlternateName {
    /// Parse an NM entry; an empty payload yields an empty fragment
    pub fn parse(entry: &SystemUseEntry<'_>) -> Self {
        match entry.data().split_first() {
            Some((&flags, name)) => Self {
                flags,
                name: String::from_utf8_lossy(name).into_owned(),
            },
            None => Self {
                flags: 0,
                name: String::new(),
            },
        }
    }

    /// Whether the CONTINUE flag is set
    pub fn continues(&self) -> bool {
        self.flags & NM_CONTINUE != 0
    }
}

impl SystemUseEntrySlice<'_> {
    /// Long name joined from every NM entry, or `""` when there is none
    pub fn rock_ridge_name(&self) -> String {
        self.of_kind(RecordKind::AlternateName)
            .map(AlternateName::parse)
            .fold(String::new(), |mut name, nm| {
                name.push_str(&nm.name);
                name
            })
    }
}
