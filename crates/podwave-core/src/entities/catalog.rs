//! Catalog entities - channels and their episodes
//!
//! The catalog is written only by the seed step; the API reads it.

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Cover emoji used when a channel row has none
pub const DEFAULT_COVER_EMOJI: &str = "🎧";

/// Episode length used when a row has none
pub const DEFAULT_DURATION_MIN: i64 = 10;

/// Mood used when an episode row has none
pub const DEFAULT_MOOD: &str = "Focus";

/// Channel entity - a named content feed (like a podcast show)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub cover_emoji: String,
    pub created_at: DateTime<Utc>,
}

/// Episode joined with the display fields of its channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeWithChannel {
    pub id: RecordId,
    pub channel_id: RecordId,
    pub title: String,
    pub duration_min: i64,
    pub mood: String,
    pub channel_name: String,
    pub cover_emoji: String,
}
