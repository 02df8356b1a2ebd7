//! Aggregate read models - leaderboard rows and global counters

use crate::value_objects::{Dni, RecordId};

/// Number of rows returned by the leaderboard
pub const LEADERBOARD_LIMIT: i64 = 10;

/// Per-user usage totals across all of the user's sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: RecordId,
    pub name: String,
    pub dni: Dni,
    pub sessions: i64,
    pub plays: i64,
    pub favorites: i64,
}

/// Row counts of every table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppStats {
    pub users: i64,
    pub channels: i64,
    pub episodes: i64,
    pub sessions: i64,
    pub events: i64,
    pub favorites: i64,
}
