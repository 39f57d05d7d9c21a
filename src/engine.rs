//! Blacklist engine: address parsing, hashing and table lookup.

use std::path::Path;

use crate::address::NormalizedAddress;
use crate::hash::HashCodec;
use crate::table::BlacklistTable;
use crate::{Classification, Result};

/// Checks email addresses against a hash file.
///
/// # Example
///
/// ```ignore
/// use ecglist::{BlacklistEngine, Classification};
///
/// let engine = BlacklistEngine::new("ecg-liste.hash");
///
/// match engine.check("karl.testinger@firma.at")? {
///     Some(Classification::AddressBlacklisted) => println!("address listed"),
///     Some(Classification::DomainBlacklisted) => println!("domain listed"),
///     Some(Classification::NotEmailAddress) => println!("not an address"),
///     None => println!("ok"),
/// }
/// ```
///
/// The hash file is not touched until the first well-formed address is
/// checked. A missing or malformed file is reported from that call and
/// from every later one.
#[derive(Debug)]
pub struct BlacklistEngine {
    table: BlacklistTable,
}

impl BlacklistEngine {
    /// Create an engine over the given hash file. Performs no I/O.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            table: BlacklistTable::new(path),
        }
    }

    /// Classify an address.
    ///
    /// Returns `None` when neither the address nor its domain is listed.
    /// An address match takes precedence over a domain match.
    pub fn check(&self, raw: &str) -> Result<Option<Classification>> {
        match NormalizedAddress::parse(raw) {
            Some(address) => self.check_normalized(&address),
            None => Ok(Some(Classification::NotEmailAddress)),
        }
    }

    /// Classify an address given as raw bytes.
    ///
    /// Invalid UTF-8 is classified as [`Classification::NotEmailAddress`].
    pub fn check_bytes(&self, raw: &[u8]) -> Result<Option<Classification>> {
        match NormalizedAddress::parse_bytes(raw) {
            Some(address) => self.check_normalized(&address),
            None => Ok(Some(Classification::NotEmailAddress)),
        }
    }

    /// Same as [`check`](Self::check), rendered as the classification label.
    pub fn check_label(&self, raw: &str) -> Result<Option<&'static str>> {
        Ok(self.check(raw)?.map(|c| c.as_str()))
    }

    /// Classify an already normalized address.
    pub fn check_normalized(&self, address: &NormalizedAddress) -> Result<Option<Classification>> {
        let addr_hash = HashCodec::digest(&address.address());
        if self.table.contains(&addr_hash)? {
            log::debug!("{} is blacklisted", address);
            return Ok(Some(Classification::AddressBlacklisted));
        }

        let domain_hash = HashCodec::digest(address.domain());
        if self.table.contains(&domain_hash)? {
            log::debug!("domain of {} is blacklisted", address);
            return Ok(Some(Classification::DomainBlacklisted));
        }

        Ok(None)
    }

    /// Whether `check` returns any classification.
    ///
    /// Input that is not an email address counts as a hit.
    pub fn contains_blacklisted(&self, raw: &str) -> Result<bool> {
        Ok(self.check(raw)?.is_some())
    }

    /// Indexed access to the classification, equivalent to [`check`](Self::check).
    pub fn lookup(&self, raw: &str) -> Result<Option<Classification>> {
        self.check(raw)
    }

    /// The underlying hash table.
    pub fn table(&self) -> &BlacklistTable {
        &self.table
    }
}
