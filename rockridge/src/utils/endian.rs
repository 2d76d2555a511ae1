//! Both-endian field decoding
//!
//! ISO9660 and SUSP store many integers twice: little-endian first, then
//! big-endian, both holding the same value.

use crate::error::{Result, RockRidgeError};

/// Decode a both-endian 32-bit field (uses the little-endian half)
pub fn both_endian_u32(bytes: &[u8]) -> Result<u32> {
    if bytes.len() < 8 {
        return Err(RockRidgeError::TruncatedField);
    }

    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decode a both-endian 32-bit field, requiring both halves to agree
pub fn both_endian_u32_strict(bytes: &[u8]) -> Result<u32> {
    let le = both_endian_u32(bytes)?;
    let be = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

    if le != be {
        return Err(RockRidgeError::EndianMismatch);
    }

    Ok(le)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_endian_u32() {
        let data = [0x78, 0x56, 0x34, 0x12, 0x12, 0x34, 0x56, 0x78];
        assert_eq!(both_endian_u32(&data), Ok(0x1234_5678));
        assert_eq!(both_endian_u32_strict(&data), Ok(0x1234_5678));
    }

    #[test]
    fn test_truncated() {
        assert_eq!(both_endian_u32(&[1, 0, 0, 0, 0, 0, 0]), Err(RockRidgeError::TruncatedField));
    }

    #[test]
    fn test_strict_mismatch() {
        let data = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02];
        assert_eq!(both_endian_u32(&data), Ok(1));
        assert_eq!(both_endian_u32_strict(&data), Err(RockRidgeError::EndianMismatch));
    }
}
