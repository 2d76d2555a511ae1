//! Common types and constants for SUSP / Rock Ridge

use core::fmt;

/// ISO9660 sector size (always 2048 bytes)
pub const SECTOR_SIZE: usize = 2048;

/// Size of the common System Use entry header (signature, length, version)
pub const SUSP_HEADER_LEN: usize = 4;

/// Extension identifiers announcing Rock Ridge
pub const ROCK_RIDGE_IDENTIFIERS: [&str; 2] = ["IEEE_P1282", "RRIP_1991A"];

/// Extension version announcing Rock Ridge
pub const ROCK_RIDGE_VERSION: u8 = 1;

/// Signature constants
pub mod signatures {
    /// SUSP indicator signature
    pub const SUSP_INDICATOR: &[u8; 2] = b"SP";
    /// SUSP terminator signature
    pub const SUSP_TERMINATOR: &[u8; 2] = b"ST";
    /// Continuation area signature
    pub const CONTINUATION: &[u8; 2] = b"CE";
    /// Padding signature
    pub const PADDING: &[u8; 2] = b"PD";
    /// Extension reference signature
    pub const EXTENSION_REFERENCE: &[u8; 2] = b"ER";
    /// Extension selector signature
    pub const EXTENSION_SELECTOR: &[u8; 2] = b"ES";
    /// POSIX file attributes signature
    pub const POSIX_ATTRS: &[u8; 2] = b"PX";
    /// Alternate name signature
    pub const ALTERNATE_NAME: &[u8; 2] = b"NM";
    /// Symbolic link signature
    pub const SYMLINK: &[u8; 2] = b"SL";
}

/// File mode decoded from a PX entry
///
/// Holds the 9 UNIX permission bits plus at most one type marker. The
/// markers reuse the UNIX `S_IFLNK` / `S_IFDIR` values; every other type
/// bit of the on-disc mode is dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileMode(u32);

impl FileMode {
    /// Mask of the file type bits (`S_IFMT`)
    pub const TYPE_MASK: u32 = 0o170000;
    /// Symbolic link marker (`S_IFLNK`)
    pub const SYMLINK: u32 = 0o120000;
    /// Directory marker (`S_IFDIR`)
    pub const DIRECTORY: u32 = 0o040000;
    /// Standard permission bits
    pub const PERMISSIONS: u32 = 0o777;

    /// Build a mode from a raw POSIX `st_mode` value
    pub fn from_posix(raw: u32) -> Self {
        let mut mode = raw & Self::PERMISSIONS;

        match raw & Self::TYPE_MASK {
            Self::SYMLINK => mode |= Self::SYMLINK,
            Self::DIRECTORY => mode |= Self::DIRECTORY,
            _ => {}
        }

        Self(mode)
    }

    /// Raw bits (permissions | type marker)
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Permission bits only
    pub fn permissions(&self) -> u32 {
        self.0 & Self::PERMISSIONS
    }

    /// Is this a symbolic link?
    pub fn is_symlink(&self) -> bool {
        self.0 & Self::TYPE_MASK == Self::SYMLINK
    }

    /// Is this a directory?
    pub fn is_dir(&self) -> bool {
        self.0 & Self::TYPE_MASK == Self::DIRECTORY
    }
}

impl fmt::Debug for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileMode({:o})", self.0)
    }
}

/// `ls -l` style rendering, e.g. `lrwxrwxrwx`
impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_symlink() {
            'l'
        } else if self.is_dir() {
            'd'
        } else {
            '-'
        };
        write!(f, "{}", kind)?;

        for shift in [6u32, 3, 0] {
            let triple = (self.0 >> shift) & 0o7;
            let r = if triple & 0o4 != 0 { 'r' } else { '-' };
            let w = if triple & 0o2 != 0 { 'w' } else { '-' };
            let x = if triple & 0o1 != 0 { 'x' } else { '-' };
            write!(f, "{}{}{}", r, w, x)?;
        }

        Ok(())
    }
}

/// File flags from directory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileFlags {
    /// Hidden file
    pub hidden: bool,

    /// Directory (not a file)
    pub directory: bool,

    /// Associated file
    pub associated: bool,

    /// Extended attribute record format
    pub extended_format: bool,

    /// Owner/group permissions in extended attributes
    pub extended_permissions: bool,

    /// Not final directory record for this file
    pub not_final: bool,
}

impl FileFlags {
    /// Decode the file flags byte (BP 26)
    pub fn from_byte(flags: u8) -> Self {
        Self {
            hidden: flags & 0x01 != 0,
            directory: flags & 0x02 != 0,
            associated: flags & 0x04 != 0,
            extended_format: flags & 0x08 != 0,
            extended_permissions: flags & 0x10 != 0,
            not_final: flags & 0x80 != 0,
        }
    }
}
