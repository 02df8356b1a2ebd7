//! Error handling utilities for repositories

use podwave_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// A row that was just written could not be read back
pub fn missing_after_insert(table: &str, id: i64) -> DomainError {
    DomainError::InternalError(format!("{table} row {id} missing after insert"))
}
