//! Analytics event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for app_events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub session_id: i64,
    pub event_type: String,
    pub episode_id: Option<i64>,
    pub screen_name: Option<String>,
    pub payload_json: Option<String>,
    pub created_at: DateTime<Utc>,
}
