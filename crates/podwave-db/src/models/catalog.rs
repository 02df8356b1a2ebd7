//! Channel and episode database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for channels table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub cover_emoji: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Episode row joined with its channel's name and cover
#[derive(Debug, Clone, FromRow)]
pub struct EpisodeWithChannelModel {
    pub id: i64,
    pub channel_id: i64,
    pub title: String,
    pub duration_min: Option<i64>,
    pub mood: Option<String>,
    pub channel_name: String,
    pub cover_emoji: Option<String>,
}
