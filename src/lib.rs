//! ecglist - Email address and domain blacklist checker.
//!
//! This crate checks email addresses against a blacklist that is stored
//! only as hashes: a flat file of sorted, fixed-width digests of
//! blacklisted addresses and domains. Plaintext addresses never appear
//! in the file.
//!
//! # Features
//!
//! - **Address and domain matching**: the full address is checked first,
//!   then its domain
//! - **Lazy loading**: the hash file is read on the first query, not at
//!   construction
//! - **Sticky errors**: a missing or malformed file is reported on every
//!   query without touching the filesystem again
//! - **Thread-safe**: concurrent first queries share a single load
//! - **Unicode-safe**: any input string, or invalid UTF-8 bytes, yields a
//!   classification rather than a failure
//!
//! # Quick Start
//!
//! ```ignore
//! use ecglist::{BlacklistEngine, Classification};
//!
//! let engine = BlacklistEngine::new("ecg-liste.hash");
//!
//! assert_eq!(
//!     engine.check("karl.testinger@firma.at")?,
//!     Some(Classification::AddressBlacklisted)
//! );
//! assert_eq!(engine.check("someone@example.org")?, None);
//! assert_eq!(
//!     engine.check("foobar.baz")?,
//!     Some(Classification::NotEmailAddress)
//! );
//! ```
//!
//! # Hash File Format
//!
//! The file has no header. Its length must be a multiple of
//! [`RECORD_WIDTH`]; each record is [`HashCodec::digest`] of a normalized
//! address or domain, and records are sorted ascending by bytes. See
//! [`HASH_SCHEME`] for the normalization and digest convention.

mod classification;
mod error;

pub mod address;
pub mod engine;
pub mod hash;
pub mod table;

// Re-export core types
pub use classification::Classification;
pub use error::{Error, Result};

pub use address::{normalize, normalize_bytes, NormalizedAddress};
pub use engine::BlacklistEngine;
pub use hash::{HashCodec, HashValue, HASH_SCHEME, RECORD_WIDTH};
pub use table::BlacklistTable;
