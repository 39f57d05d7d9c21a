//! Hash values and the on-disk record layout.
//!
//! File structure:
//! ```text
//! +--------------------+
//! |  RECORD 0 (16 B)   |  smallest digest
//! +--------------------+
//! |  RECORD 1 (16 B)   |
//! +--------------------+
//! |      ...           |  ascending byte order, no header
//! +--------------------+
//! ```
//!
//! Each record is the first [`RECORD_WIDTH`] bytes of the SHA-256 digest of
//! a normalized address or domain.

use sha2::{Digest, Sha256};
use std::fmt;

/// Width in bytes of one hash record.
pub const RECORD_WIDTH: usize = 16;

/// Identifier of the normalization + digest convention.
///
/// A hash file only matches lookups made with the same scheme.
pub const HASH_SCHEME: &str = "sha256-128/lower-v1";

/// A fixed-width digest as stored in the hash file.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashValue([u8; RECORD_WIDTH]);

impl HashValue {
    pub fn from_bytes(bytes: [u8; RECORD_WIDTH]) -> Self {
        Self(bytes)
    }

    /// Read one record from a slice of exactly [`RECORD_WIDTH`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_WIDTH] {
        &self.0
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({})", self)
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Digest function shared by the hash file producer and the lookup side.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCodec;

impl HashCodec {
    /// Hash an already normalized string.
    pub fn digest(text: &str) -> HashValue {
        let full = Sha256::digest(text.as_bytes());
        let mut out = [0u8; RECORD_WIDTH];
        out.copy_from_slice(&full[..RECORD_WIDTH]);
        HashValue(out)
    }

    pub fn record_width() -> usize {
        RECORD_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_truncated_sha256() {
        // sha256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        let h = HashCodec::digest("abc");
        assert_eq!(h.to_string(), "ba7816bf8f01cfea414140de5dae2223");
    }

    #[test]
    fn test_digest_deterministic() {
        assert_eq!(HashCodec::digest("home.lan"), HashCodec::digest("home.lan"));
        assert_ne!(HashCodec::digest("home.lan"), HashCodec::digest("home.lon"));
    }

    #[test]
    fn test_record_width() {
        assert_eq!(HashCodec::record_width(), 16);
        assert_eq!(std::mem::size_of::<HashValue>(), RECORD_WIDTH);
    }

    #[test]
    fn test_from_slice() {
        let bytes = [7u8; RECORD_WIDTH];
        assert_eq!(
            HashValue::from_slice(&bytes),
            Some(HashValue::from_bytes(bytes))
        );
        assert_eq!(HashValue::from_slice(&bytes[..15]), None);
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let mut low = [0u8; RECORD_WIDTH];
        let mut high = [0u8; RECORD_WIDTH];
        low[15] = 0xff;
        high[0] = 0x01;
        assert!(HashValue::from_bytes(low) < HashValue::from_bytes(high));
    }
}
