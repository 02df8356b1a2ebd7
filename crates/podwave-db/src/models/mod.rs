//! Database models - SQLx-compatible structs for SQLite rows

mod catalog;
mod event;
mod session;
mod stats;
mod user;

pub use catalog::{ChannelModel, EpisodeWithChannelModel};
pub use event::EventModel;
pub use session::SessionModel;
pub use stats::{LeaderboardRowModel, StatsModel};
pub use user::UserModel;
