//! # podwave-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AppStats, Channel, EpisodeWithChannel, Event, FavoriteToggle, LeaderboardEntry, NewEvent,
    NewUser, Session, SessionSummary, User, LEADERBOARD_LIMIT,
};
pub use error::DomainError;
pub use traits::{
    CatalogRepository, EventRepository, FavoriteRepository, RepoResult, SessionRepository,
    StatsRepository, UserRepository,
};
pub use value_objects::{Dni, RecordId, RecordIdParseError};
