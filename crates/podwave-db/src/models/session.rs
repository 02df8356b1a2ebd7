//! Session database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for app_sessions table
#[derive(Debug, Clone, FromRow)]
pub struct SessionModel {
    pub id: i64,
    pub user_id: i64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub screens_visited: Option<i64>,
    pub plays_count: Option<i64>,
    pub favorites_count: Option<i64>,
}

