//! User entity - a registered app user

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{Dni, RecordId};

/// User entity. Created once on registration, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub dni: Dni,
    pub created_at: DateTime<Utc>,
}

/// Normalized registration data, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dni: Dni,
}

impl NewUser {
    /// Trim the name and normalize the DNI; both must be non-blank
    pub fn new(name: &str, dni: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyField("name"));
        }

        Ok(Self {
            name: name.to_string(),
            dni: Dni::parse(dni)?,
        })
    }
}
