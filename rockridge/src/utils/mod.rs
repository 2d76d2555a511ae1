//! Shared helpers for field decoding

pub mod endian;
pub mod string;
