//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in podwave-core.
//! Each repository handles database operations for a specific domain concern.

mod catalog;
mod error;
mod event;
mod favorite;
mod session;
mod stats;
mod user;

pub use catalog::SqliteCatalogRepository;
pub use event::SqliteEventRepository;
pub use favorite::SqliteFavoriteRepository;
pub use session::SqliteSessionRepository;
pub use stats::SqliteStatsRepository;
pub use user::SqliteUserRepository;
