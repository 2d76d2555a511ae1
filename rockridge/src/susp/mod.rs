//! System Use Sharing Protocol entries
//!
//! Each ISO9660 directory record may end in a System Use field holding a
//! run of SUSP entries. Every entry starts with the same 4-byte header:
//!
//! | BP | Field     |
//! |----|-----------|
//! | 1-2| Signature |
//! | 3  | Length (header included) |
//! | 4  | Version   |
//!
//! followed by `length - 4` bytes of entry-specific data.

pub mod extension;

use crate::error::{Result, RockRidgeError};
use crate::types::{signatures, SUSP_HEADER_LEN};
use alloc::vec::Vec;
use core::fmt;

/// Record kinds understood by this crate
///
/// PN, CL, PL, RE, TF and SF are recognised Rock Ridge entries that are
/// not decoded; they land in `Unsupported` along with unknown signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// SP: SUSP indicator
    SuspIndicator,
    /// ST: SUSP terminator
    SuspTerminator,
    /// CE: continuation area
    ContinuationArea,
    /// PD: padding
    Padding,
    /// ER: extension reference
    ExtensionReference,
    /// ES: extension selector
    ExtensionSelector,
    /// PX: POSIX file attributes
    PosixAttributes,
    /// NM: alternate name
    AlternateName,
    /// SL: symbolic link
    SymbolicLink,
    /// Anything else
    Unsupported([u8; 2]),
}

impl RecordKind {
    /// Classify an entry by its signature
    pub fn from_signature(signature: [u8; 2]) -> Self {
        match &signature {
            signatures::SUSP_INDICATOR => Self::SuspIndicator,
            signatures::SUSP_TERMINATOR => Self::SuspTerminator,
            signatures::CONTINUATION => Self::ContinuationArea,
            signatures::PADDING => Self::Padding,
            signatures::EXTENSION_REFERENCE => Self::ExtensionReference,
            signatures::EXTENSION_SELECTOR => Self::ExtensionSelector,
            signatures::POSIX_ATTRS => Self::PosixAttributes,
            signatures::ALTERNATE_NAME => Self::AlternateName,
            signatures::SYMLINK => Self::SymbolicLink,
            _ => Self::Unsupported(signature),
        }
    }
}

/// One raw System Use entry
///
/// `data` excludes the common header.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SystemUseEntry<'a> {
    signature: [u8; 2],
    version: u8,
    data: &'a [u8],
}

impl<'a> SystemUseEntry<'a> {
    /// Create an entry from its parts
    pub fn new(signature: [u8; 2], version: u8, data: &'a [u8]) -> Self {
        Self { signature, version, data }
    }

    /// Two-character signature, e.g. `b"PX"`
    pub fn signature(&self) -> [u8; 2] {
        self.signature
    }

    /// Entry version
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Entry-specific payload
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Classified record kind
    pub fn kind(&self) -> RecordKind {
        RecordKind::from_signature(self.signature)
    }
}

impl fmt::Debug for SystemUseEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemUseEntry")
            .field("signature", &core::str::from_utf8(&self.signature).unwrap_or("??"))
            .field("version", &self.version)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Ordered, read-only view over the System Use entries of one directory record
///
/// Order is on-disc order and matters: NM and SL fragments are joined in
/// the order they appear.
#[derive(Debug, Clone, Copy)]
pub struct SystemUseEntrySlice<'a> {
    entries: &'a [SystemUseEntry<'a>],
}

impl<'a> SystemUseEntrySlice<'a> {
    /// Wrap a borrowed entry sequence
    pub fn new(entries: &'a [SystemUseEntry<'a>]) -> Self {
        Self { entries }
    }

    /// Iterate entries in on-disc order
    pub fn iter(&self) -> core::slice::Iter<'a, SystemUseEntry<'a>> {
        self.entries.iter()
    }

    /// Iterate entries of one kind in on-disc order
    pub fn of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &'a SystemUseEntry<'a>> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skip length announced by an SP entry
    ///
    /// Only honoured when SP is the first entry, where SUSP requires it.
    pub fn susp_skip_length(&self) -> Option<u8> {
        let first = self.entries.first()?;
        if first.kind() != RecordKind::SuspIndicator {
            return None;
        }

        match first.data() {
            [0xBE, 0xEF, skip, ..] => Some(*skip),
            _ => None,
        }
    }
}

impl<'a> From<&'a [SystemUseEntry<'a>]> for SystemUseEntrySlice<'a> {
    fn from(entries: &'a [SystemUseEntry<'a>]) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for SystemUseEntrySlice<'a> {
    type Item = &'a SystemUseEntry<'a>;
    type IntoIter = core::slice::Iter<'a, SystemUseEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Split a System Use field into its entries
///
/// Scanning stops at an ST entry, at a zero byte where a signature would
/// start (padding), or when fewer than 4 bytes remain.
pub fn parse_system_use_area(area: &[u8]) -> Result<Vec<SystemUseEntry<'_>>> {
    let mut entries = Vec::new();
    let mut rest = area;

    while rest.len() >= SUSP_HEADER_LEN && rest[0] != 0 {
        let signature = [rest[0], rest[1]];
        let length = rest[2] as usize;
        let version = rest[3];

        if length < SUSP_HEADER_LEN || length > rest.len() {
            return Err(RockRidgeError::InvalidSystemUseEntry);
        }

        let entry = SystemUseEntry::new(signature, version, &rest[SUSP_HEADER_LEN..length]);
        if entry.kind() == RecordKind::SuspTerminator {
            break;
        }

        entries.push(entry);
        rest = &rest[length..];
    }

    Ok(entries)
}
