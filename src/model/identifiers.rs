//! Core identifier newtypes with smart constructors.
//!
//! Country codes and display names are validated at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;
use thiserror::Error;

/// ISO 3166-1 alpha-3 country code (e.g., "FRA").
///
/// Primary key for navigation: the detail screen is addressed by this code.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Smart constructor: accepts exactly three ASCII letters, stored uppercase.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidCountryCode> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(InvalidCountryCode(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Common display name of a country. Never empty or whitespace-only.
///
/// This is the sole sort and grouping key of the country list, so the
/// first character always exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryName(String);

impl CountryName {
    /// Smart constructor: rejects empty and whitespace-only names.
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyCountryName> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(EmptyCountryName)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased first character, used as the section title.
    pub fn initial(&self) -> String {
        self.0
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid country code: {0:?} (expected three ASCII letters)")]
pub struct InvalidCountryCode(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Country name cannot be empty")]
pub struct EmptyCountryName;
