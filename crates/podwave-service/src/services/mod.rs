//! Business logic services
//!
//! One service per concern. Services borrow the shared `ServiceContext`
//! and turn validated request DTOs into repository calls.

pub mod catalog;
pub mod context;
pub mod error;
pub mod event;
pub mod favorite;
pub mod health;
pub mod session;
pub mod stats;
pub mod user;

// Re-export all services for convenience
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use favorite::FavoriteService;
pub use health::HealthService;
pub use session::SessionService;
pub use stats::StatsService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support {
    use podwave_db::{bootstrap, create_pool, DatabaseConfig};

    use super::ServiceContext;

    /// Context over a fresh, seeded in-memory database
    pub async fn seeded_context() -> ServiceContext {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        bootstrap(&pool, true).await.unwrap();
        ServiceContext::sqlite(pool, ":memory:")
    }
}
