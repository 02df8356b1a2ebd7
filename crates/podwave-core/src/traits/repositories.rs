//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method runs on a connection acquired
//! for the duration of the call and released before it returns.

use async_trait::async_trait;

use crate::entities::{
    AppStats, Channel, EpisodeWithChannel, Event, FavoriteToggle, LeaderboardEntry, NewEvent,
    NewUser, Session, SessionSummary, User,
};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Open a session for a user, started now
    async fn start(&self, user_id: RecordId) -> RepoResult<Session>;

    /// Close a session and overwrite its counters.
    ///
    /// Returns `false` when no row matched; that is not an error.
    async fn end(&self, id: RecordId, summary: SessionSummary) -> RepoResult<bool>;

    /// Find session by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Session>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Append an analytics event
    async fn append(&self, event: &NewEvent) -> RepoResult<Event>;
}

// ============================================================================
// Catalog Repository
// ============================================================================

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List all channels ordered by id
    async fn list_channels(&self) -> RepoResult<Vec<Channel>>;

    /// List episodes with channel info ordered by id, optionally filtered by exact mood
    async fn list_episodes(&self, mood: Option<&str>) -> RepoResult<Vec<EpisodeWithChannel>>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Remove the pair if present, otherwise insert it
    async fn toggle(&self, user_id: RecordId, episode_id: RecordId) -> RepoResult<FavoriteToggle>;

    /// List a user's favorited episodes, newest favorite first
    async fn list_for_user(&self, user_id: RecordId) -> RepoResult<Vec<EpisodeWithChannel>>;
}

// ============================================================================
// Stats Repository
// ============================================================================

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Users ranked by plays, then favorites, then session count
    async fn leaderboard(&self, limit: i64) -> RepoResult<Vec<LeaderboardEntry>>;

    /// Row counts of every table, read in one statement
    async fn totals(&self) -> RepoResult<AppStats>;
}
