//! Aggregate query rows

use sqlx::FromRow;

/// One leaderboard row: a user with totals across their sessions
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRowModel {
    pub id: i64,
    pub name: String,
    pub dni: String,
    pub sessions: i64,
    pub plays: i64,
    pub favorites: i64,
}

/// Row counts of every table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct StatsModel {
    pub users: i64,
    pub channels: i64,
    pub episodes: i64,
    pub sessions: i64,
    pub events: i64,
    pub favorites: i64,
}
