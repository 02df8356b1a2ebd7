//! # podwave-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for all repository traits
//! defined in `podwave-core`. It handles:
//!
//! - Connection pool management
//! - The storage schema and the catalog seed
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use podwave_db::{bootstrap, create_pool, DatabaseConfig, SqliteUserRepository};
//! use podwave_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     bootstrap(&pool, true).await?;
//!     let user_repo = SqliteUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, store_name, DatabaseConfig, SqlitePool};
pub use repositories::{
    SqliteCatalogRepository, SqliteEventRepository, SqliteFavoriteRepository,
    SqliteSessionRepository, SqliteStatsRepository, SqliteUserRepository,
};
pub use schema::apply_schema;
pub use seed::{bootstrap, seed_catalog};
