//! Email address parsing and normalization.
//!
//! The normalization applied here must match the one used when the hash
//! file was produced, otherwise lookups silently miss. The convention is
//! versioned together with the digest as [`HASH_SCHEME`](crate::HASH_SCHEME):
//!
//! 1. trim surrounding whitespace
//! 2. lowercase (full Unicode case mapping)
//! 3. split on the single `@` into local part and domain

use std::fmt;

/// Separator between local part and domain.
const SEPARATOR: char = '@';

/// An address that passed the `local@domain` shape check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedAddress {
    local: String,
    domain: String,
}

impl NormalizedAddress {
    /// Normalize a raw address string.
    ///
    /// Returns `None` when the input is not shaped like an email address:
    /// no `@`, more than one `@`, or an empty local part or domain.
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();

        let (local, domain) = lowered.split_once(SEPARATOR)?;
        if domain.contains(SEPARATOR) || local.is_empty() || domain.is_empty() {
            return None;
        }

        Some(Self {
            local: local.to_string(),
            domain: domain.to_string(),
        })
    }

    /// Normalize raw bytes.
    ///
    /// Input that is not valid UTF-8 is treated as not an email address.
    pub fn parse_bytes(raw: &[u8]) -> Option<Self> {
        std::str::from_utf8(raw).ok().and_then(Self::parse)
    }

    /// The normalized local part.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// The normalized domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The full normalized address, `local@domain`.
    pub fn address(&self) -> String {
        format!("{}{}{}", self.local, SEPARATOR, self.domain)
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.local, SEPARATOR, self.domain)
    }
}

/// Normalize a raw address, see [`NormalizedAddress::parse`].
pub fn normalize(raw: &str) -> Option<NormalizedAddress> {
    NormalizedAddress::parse(raw)
}

/// Normalize raw bytes, see [`NormalizedAddress::parse_bytes`].
pub fn normalize_bytes(raw: &[u8]) -> Option<NormalizedAddress> {
    NormalizedAddress::parse_bytes(raw)
}
