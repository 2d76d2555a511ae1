//! Rock Ridge extension support
//!
//! Rock Ridge adds POSIX filesystem semantics (permissions, symlinks, long names).
//!
//! Handled entries:
//! - PX (RRIP 4.1.1): POSIX file attributes
//! - SL (RRIP 4.1.3): symbolic link
//! - NM (RRIP 4.1.4): alternate name
//!
//! PN, CL, PL, RE, TF and SF are classified but not decoded.

pub mod name;
pub mod posix;
pub mod symlink;

use crate::error::Result;
use crate::susp::{RecordKind, SystemUseEntrySlice};
use crate::types::{ROCK_RIDGE_IDENTIFIERS, ROCK_RIDGE_VERSION};
use alloc::string::String;
use posix::PosixAttributes;

/// Whether the entries announce Rock Ridge through an ER entry
///
/// Identifier and version must match on the same record.
pub fn has_rock_ridge(entries: &SystemUseEntrySlice<'_>) -> Result<bool> {
    let extensions = entries.extension_records()?;

    Ok(extensions.iter().any(|ext| {
        ROCK_RIDGE_IDENTIFIERS.contains(&ext.identifier.as_str()) && ext.version == ROCK_RIDGE_VERSION
    }))
}

/// Everything Rock Ridge says about one directory record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RockRidgeMetadata {
    /// Alternate name, if any NM entry is present
    pub name: Option<String>,

    /// POSIX attributes, if a PX entry is present
    pub attributes: Option<PosixAttributes>,

    /// Symbolic link target, if any SL entry is present
    pub symlink_target: Option<String>,
}

impl RockRidgeMetadata {
    /// Decode all supported Rock Ridge entries
    ///
    /// A missing PX leaves `attributes` empty; a truncated PX or a
    /// malformed SL is an error.
    pub fn decode(entries: &SystemUseEntrySlice<'_>) -> Result<Self> {
        let name = entries
            .of_kind(RecordKind::AlternateName)
            .next()
            .map(|_| entries.rock_ridge_name());

        let attributes = if entries.of_kind(RecordKind::PosixAttributes).next().is_some() {
            Some(entries.posix_attributes()?)
        } else {
            None
        };

        let symlink_target = if entries.of_kind(RecordKind::SymbolicLink).next().is_some() {
            Some(entries.symlink_target()?)
        } else {
            None
        };

        Ok(Self {
            name,
            attributes,
            symlink_target,
        })
    }

    /// Whether no Rock Ridge entry was decoded
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.attributes.is_none() && self.symlink_target.is_none()
    }
}
