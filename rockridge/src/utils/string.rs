//! String handling utilities
//!
//! Plain ISO9660 identifiers carry a version suffix and padding that Rock
//! Ridge names do not.

use alloc::string::String;

/// Trim trailing spaces from byte slice
pub fn trim_trailing_spaces(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == b' ' {
        end -= 1;
    }
    &bytes[..end]
}

/// Strip version suffix from filename (e.g., "FILE.TXT;1" -> "FILE.TXT")
/// Also removes trailing dot if present (e.g., "FILE.;1" -> "FILE")
pub fn strip_version(name: &str) -> &str {
    let base = name.split(';').next().unwrap_or(name);
    base.strip_suffix('.').unwrap_or(base)
}

/// Convert a raw ISO9660 file identifier into a display name
pub fn identifier_to_name(file_id: &[u8]) -> String {
    let trimmed = trim_trailing_spaces(file_id);
    match core::str::from_utf8(trimmed) {
        Ok(s) => String::from(strip_version(s)),
        Err(_) => String::from_utf8_lossy(trimmed).into_owned(),
    }
}
