//! Symbolic link (SL entry)
//!
//! An SL payload is one flags byte followed by component records:
//!
//! | Offset | Field             |
//! |--------|-------------------|
//! | 0      | component flags   |
//! | 1      | component length  |
//! | 2..    | component content |
//!
//! Targets spanning several SL entries are joined in order.

use crate::error::{Result, RockRidgeError};
use crate::susp::{RecordKind, SystemUseEntry, SystemUseEntrySlice};
use alloc::string::String;

/// SL entry flag: target continues in the next SL entry
pub const SL_CONTINUE: u8 = 0x01;

/// Component flag: component continues in the next component record
pub const COMPONENT_CONTINUE: u8 = 0x01;
/// Component flag: current directory
pub const COMPONENT_CURRENT: u8 = 0x02;
/// Component flag: parent directory
pub const COMPONENT_PARENT: u8 = 0x04;
/// Component flag: root directory
pub const COMPONENT_ROOT: u8 = 0x08;

/// Append the components of one SL entry to `target`
pub fn append_components(entry: &SystemUseEntry<'_>, target: &mut String) -> Result<()> {
    let (&entry_flags, mut data) = entry
        .data()
        .split_first()
        .ok_or(RockRidgeError::MalformedSymlinkRecord)?;
    let last_entry = entry_flags & SL_CONTINUE == 0;

    while !data.is_empty() {
        if data.len() < 2 {
            return Err(RockRidgeError::MalformedSymlinkRecord);
        }

        let flags = data[0];
        let len = data[1] as usize;
        let content = data
            .get(2..2 + len)
            .ok_or(RockRidgeError::MalformedSymlinkRecord)?;

        if flags & COMPONENT_CURRENT != 0 {
            target.push('.');
        } else if flags & COMPONENT_PARENT != 0 {
            target.push_str("..");
        } else if flags & COMPONENT_ROOT != 0 {
            target.push('/');
        } else if len > 0 {
            target.push_str(&String::from_utf8_lossy(content));
        }

        data = &data[2 + len..];

        let last_component = data.is_empty() && last_entry;
        if !last_component && flags & COMPONENT_CONTINUE == 0 && !target.ends_with('/') {
            target.push('/');
        }
    }

    Ok(())
}

impl SystemUseEntrySlice<'_> {
    /// Symbolic link target joined from every SL entry, or `""` when there is none
    pub fn symlink_target(&self) -> Result<String> {
        let mut target = String::new();

        for entry in self.of_kind(RecordKind::SymbolicLink) {
            append_components(entry, &mut target)?;
        }

        Ok(target)
    }
}
