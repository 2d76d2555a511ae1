//! Rock Ridge / SUSP Decoder
//!
//! A `no_std` decoder for the System Use Sharing Protocol records embedded in
//! ISO9660 directory records, and for the Rock Ridge extension built on it.
//!
//! # Overview
//!
//! Plain ISO9660 cannot express POSIX permissions, long names or symbolic
//! links. Rock Ridge stores them in the System Use field of each directory
//! record. This crate provides:
//! - Splitting a System Use field into an ordered sequence of SUSP entries
//! - Extension reference (ER) extraction and Rock Ridge detection
//! - PX (POSIX attributes), NM (alternate name) and SL (symbolic link) decoding
//! - A directory iterator that resolves Rock Ridge metadata from a block device
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **SUSP layer** - Raw entries, record classification, ER/SP records
//! 2. **Rock Ridge layer** - Pure decoders over an entry sequence
//! 3. **Directory layer** - Directory records and iteration over `BlockIo`
//!
//! # Usage
//!
//! ```ignore
//! use rockridge::{has_rock_ridge, parse_system_use_area, SystemUseEntrySlice};
//!
//! let entries = parse_system_use_area(record.system_use_area(0))?;
//! let entries = SystemUseEntrySlice::new(&entries);
//!
//! if has_rock_ridge(&entries)? {
//!     let mode = entries.posix_mode()?;
//!     let name = entries.rock_ridge_name();
//!     let target = entries.symlink_target()?;
//! }
//! ```
//!
//! # Directory Iteration
//!
//! ```ignore
//! use rockridge::{probe_rock_ridge, DirectoryIterator};
//!
//! let probe = probe_rock_ridge(&mut block_io, root_lba, root_len)?;
//! for entry in DirectoryIterator::new(&mut block_io, root_lba, root_len)
//!     .with_susp_skip(probe.skip_length)
//! {
//!     let entry = entry?;
//!     println!("{}", entry.name);
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod types;
pub mod susp;
pub mod rock_ridge;
pub mod directory;
pub mod utils;

pub use error::{Result, RockRidgeError};
pub use types::FileMode;
pub use susp::{parse_system_use_area, RecordKind, SystemUseEntry, SystemUseEntrySlice};
pub use susp::extension::ExtensionRecord;
pub use rock_ridge::{has_rock_ridge, RockRidgeMetadata};
pub use rock_ridge::posix::PosixAttributes;
pub use rock_ridge::name::AlternateName;

// High-level API exports
pub use directory::{probe_rock_ridge, DirectoryEntry, RockRidgeProbe};
pub use directory::iterator::DirectoryIterator;
