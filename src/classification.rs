//! Blacklist classification results.

use serde::{Serialize, Serializer};
use std::fmt;

/// Positive outcome of a blacklist check.
///
/// "Not blacklisted" has no variant: it is `None` in an
/// `Option<Classification>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Classification {
    /// Input is not shaped like `local@domain`
    NotEmailAddress = 1,
    /// The full address is listed
    AddressBlacklisted = 2,
    /// The address' domain is listed
    DomainBlacklisted = 3,
}

impl Classification {
    /// Convert from a u8 value.
    ///
    /// Returns `None` for invalid values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Classification::NotEmailAddress),
            2 => Some(Classification::AddressBlacklisted),
            3 => Some(Classification::DomainBlacklisted),
            _ => None,
        }
    }

    /// Convert to a u8 value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::NotEmailAddress => "NOT_EMAIL_ADDRESS",
            Classification::AddressBlacklisted => "ADDRESS_BLACKLISTED",
            Classification::DomainBlacklisted => "DOMAIN_BLACKLISTED",
        }
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Classification::NotEmailAddress => "not an email address",
            Classification::AddressBlacklisted => "email address is blacklisted",
            Classification::DomainBlacklisted => "email domain is blacklisted",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Classification {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NOT_EMAIL_ADDRESS" => Ok(Classification::NotEmailAddress),
            "ADDRESS_BLACKLISTED" => Ok(Classification::AddressBlacklisted),
            "DOMAIN_BLACKLISTED" => Ok(Classification::DomainBlacklisted),
            _ => Err(()),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
