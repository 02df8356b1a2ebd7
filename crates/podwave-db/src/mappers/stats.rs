//! Aggregate row -> read model mappers

use podwave_core::entities::{AppStats, LeaderboardEntry};
use podwave_core::value_objects::{Dni, RecordId};

use crate::models::{LeaderboardRowModel, StatsModel};

impl From<LeaderboardRowModel> for LeaderboardEntry {
    fn from(row: LeaderboardRowModel) -> Self {
        LeaderboardEntry {
            user_id: RecordId::new(row.id),
            name: row.name,
            dni: Dni::from_stored(row.dni),
            sessions: row.sessions,
            plays: row.plays,
            favorites: row.favorites,
        }
    }
}

impl From<StatsModel> for AppStats {
    fn from(row: StatsModel) -> Self {
        AppStats {
            users: row.users,
            channels: row.channels,
            episodes: row.episodes,
            sessions: row.sessions,
            events: row.events,
            favorites: row.favorites,
        }
    }
}
