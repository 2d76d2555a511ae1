//! Error types for SUSP and Rock Ridge decoding

use core::fmt;

/// Result type for Rock Ridge operations
pub type Result<T> = core::result::Result<T, RockRidgeError>;

/// Errors that can occur while decoding System Use entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RockRidgeError {
    /// Extension reference (ER) entry could not be extracted
    MalformedExtensionRecord,

    /// A record required by Rock Ridge is absent (e.g. "PX")
    MandatoryEntryMissing(&'static str),

    /// Fixed-width field is shorter than required
    TruncatedField,

    /// Both halves of a dual-endian field disagree
    EndianMismatch,

    /// Symbolic link component runs past the end of its entry
    MalformedSymlinkRecord,

    /// System Use entry header is inconsistent with the area it lives in
    InvalidSystemUseEntry,

    /// Corrupted directory record
    InvalidDirectoryRecord,

    /// I/O error reading from block device
    IoError,
}

impl fmt::Display for RockRidgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedExtensionRecord => write!(f, "Malformed extension reference entry"),
            Self::MandatoryEntryMissing(sig) => write!(f, "Mandatory entry {} not found", sig),
            Self::TruncatedField => write!(f, "Field truncated"),
            Self::EndianMismatch => write!(f, "Both-endian field halves disagree"),
            Self::MalformedSymlinkRecord => write!(f, "Malformed symbolic link entry"),
            Self::InvalidSystemUseEntry => write!(f, "Invalid System Use entry"),
            Self::InvalidDirectoryRecord => write!(f, "Corrupted directory record"),
            Self::IoError => write!(f, "I/O error reading block device"),
        }
    }
}
