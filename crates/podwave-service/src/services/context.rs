//! Service context - dependency container for services
//!
//! Holds the pool and every repository needed by services.

use std::sync::Arc;

use podwave_core::traits::{
    CatalogRepository, EventRepository, FavoriteRepository, SessionRepository, StatsRepository,
    UserRepository,
};
use podwave_db::{
    SqliteCatalogRepository, SqliteEventRepository, SqliteFavoriteRepository, SqlitePool,
    SqliteSessionRepository, SqliteStatsRepository, SqliteUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone: the pool and repositories are reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,
    store_name: Arc<str>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    event_repo: Arc<dyn EventRepository>,
    catalog_repo: Arc<dyn CatalogRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    stats_repo: Arc<dyn StatsRepository>,
}

impl ServiceContext {
    /// Wire every SQLite repository over one pool
    pub fn sqlite(pool: SqlitePool, store_name: impl Into<Arc<str>>) -> Self {
        Self {
            user_repo: Arc::new(SqliteUserRepository::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepository::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepository::new(pool.clone())),
            catalog_repo: Arc::new(SqliteCatalogRepository::new(pool.clone())),
            favorite_repo: Arc::new(SqliteFavoriteRepository::new(pool.clone())),
            stats_repo: Arc::new(SqliteStatsRepository::new(pool.clone())),
            store_name: store_name.into(),
            pool,
        }
    }

    // === Database Pool ===

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// File name of the backing store, `:memory:` for in-memory databases
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn catalog_repo(&self) -> &dyn CatalogRepository {
        self.catalog_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("store_name", &self.store_name)
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for a ServiceContext over the SQLite repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    store_name: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = Some(name.into());
        self
    }

    /// Build the ServiceContext.
    ///
    /// The pool is required. Without a store name the context reports `:memory:`.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;
        let store_name = self.store_name.unwrap_or_else(|| ":memory:".to_string());

        Ok(ServiceContext::sqlite(pool, store_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podwave_db::{create_pool, DatabaseConfig};

    #[test]
    fn test_builder_requires_pool() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_builder_sets_store_name() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        let ctx = ServiceContextBuilder::new()
            .pool(pool)
            .store_name("podwave_mobile.sqlite3")
            .build()
            .unwrap();

        assert_eq!(ctx.store_name(), "podwave_mobile.sqlite3");
    }

    #[tokio::test]
    async fn test_builder_defaults_to_memory_name() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        let ctx = ServiceContextBuilder::new().pool(pool).build().unwrap();

        assert_eq!(ctx.store_name(), ":memory:");
    }
}
