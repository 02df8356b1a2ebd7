//! DNI - national identification string supplied at registration
//!
//! Stored trimmed and uppercased. No checksum validation is applied; any
//! non-blank string is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Normalized national ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dni(String);

impl Dni {
    /// Normalize a raw DNI: trim surrounding whitespace and uppercase
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::EmptyField("dni"));
        }
        Ok(Self(normalized))
    }

    /// Wrap a value already normalized by storage
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Dni {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases() {
        let dni = Dni::parse("12345678a").unwrap();
        assert_eq!(dni.as_str(), "12345678A");
    }

    #[test]
    fn test_trims() {
        let dni = Dni::parse("  x1234567l ").unwrap();
        assert_eq!(dni.to_string(), "X1234567L");
    }

    #[test]
    fn test_blank_rejected() {
        assert!(matches!(Dni::parse(""), Err(DomainError::EmptyField("dni"))));
        assert!(Dni::parse("   ").is_err());
    }

    #[test]
    fn test_non_ascii_uppercase() {
        let dni = Dni::parse("ñ123").unwrap();
        assert_eq!(dni.as_str(), "Ñ123");
    }
}
