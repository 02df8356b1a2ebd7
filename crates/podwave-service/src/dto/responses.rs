//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The API layer
//! flattens them into the `{ok: true, ...}` envelope, so each struct holds
//! only the payload keys of its endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Success with no payload beyond `ok`
#[derive(Debug, Clone, Default, Serialize)]
pub struct AckResponse {}

// ============================================================================
// User / Session Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub user_id: i64,
    pub name: String,
    pub dni: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub session_id: i64,
}

// ============================================================================
// Catalog Responses
// ============================================================================

/// Channel row as sent to the client
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub cover_emoji: String,
    pub created_at: DateTime<Utc>,
}

/// Episode joined with its channel's name and cover
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeResponse {
    pub id: i64,
    pub channel_id: i64,
    pub title: String,
    pub duration_min: i64,
    pub mood: String,
    pub channel_name: String,
    pub cover_emoji: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelsResponse {
    pub channels: Vec<ChannelResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EpisodesResponse {
    pub episodes: Vec<EpisodeResponse>,
}

// ============================================================================
// Favorite Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ToggleFavoriteResponse {
    /// Whether the pair is favorited after the toggle
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<EpisodeResponse>,
}

// ============================================================================
// Leaderboard / Stats Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LeaderResponse {
    pub id: i64,
    pub name: String,
    pub dni: String,
    pub sessions: i64,
    pub plays: i64,
    pub favorites: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub leaders: Vec<LeaderResponse>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsBody {
    pub users: i64,
    pub channels: i64,
    pub episodes: i64,
    pub sessions: i64,
    pub events: i64,
    pub favorites: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResponse {
    pub stats: StatsBody,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness report; never touches the database
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub db: String,
    pub utc: DateTime<Utc>,
}

impl HealthResponse {
    pub fn now(db: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            utc: Utc::now(),
        }
    }
}

/// Readiness report
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    #[serde(skip)]
    pub ready: bool,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn from_check(database_healthy: bool) -> Self {
        Self {
            ready: database_healthy,
            database: if database_healthy { "healthy" } else { "unhealthy" },
        }
    }
}
