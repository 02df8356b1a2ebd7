//! Domain entities - core business objects

mod catalog;
mod event;
mod favorite;
mod session;
mod stats;
mod user;

pub use catalog::{
    Channel, EpisodeWithChannel, DEFAULT_COVER_EMOJI, DEFAULT_DURATION_MIN, DEFAULT_MOOD,
};
pub use event::{Event, NewEvent, EMPTY_PAYLOAD};
pub use favorite::FavoriteToggle;
pub use session::{Session, SessionSummary};
pub use stats::{AppStats, LeaderboardEntry, LEADERBOARD_LIMIT};
pub use user::{NewUser, User};
