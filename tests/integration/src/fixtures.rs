//! Test fixtures and data generators
//!
//! Request bodies and typed views of the API's JSON responses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub dni: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Oyente {suffix}"),
            dni: format!("{:08}X", suffix),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub ok: bool,
    pub user_id: i64,
    pub name: String,
    pub dni: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionResponse {
    pub ok: bool,
    pub session_id: i64,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionRequest {
    pub session_id: i64,
    pub screens_visited: i64,
    pub plays_count: i64,
    pub favorites_count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest {
    pub user_id: i64,
    pub episode_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub ok: bool,
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChannelView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub cover_emoji: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelsView {
    pub ok: bool,
    pub channels: Vec<ChannelView>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeView {
    pub id: i64,
    pub channel_id: i64,
    pub title: String,
    pub duration_min: i64,
    pub mood: String,
    pub channel_name: String,
    pub cover_emoji: String,
}

#[derive(Debug, Deserialize)]
pub struct EpisodesView {
    pub ok: bool,
    pub episodes: Vec<EpisodeView>,
}

#[derive(Debug, Deserialize)]
pub struct FavoritesView {
    pub ok: bool,
    pub favorites: Vec<EpisodeView>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderView {
    pub id: i64,
    pub name: String,
    pub dni: String,
    pub sessions: i64,
    pub plays: i64,
    pub favorites: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardView {
    pub ok: bool,
    pub leaders: Vec<LeaderView>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct StatsBody {
    pub users: i64,
    pub channels: i64,
    pub episodes: i64,
    pub sessions: i64,
    pub events: i64,
    pub favorites: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatsView {
    pub ok: bool,
    pub stats: StatsBody,
}
