//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for mobile_users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub dni: String,
    pub created_at: DateTime<Utc>,
}
