//! Database connection pool management

mod sqlite;

pub use sqlite::{create_pool, store_name, DatabaseConfig};

// Re-export SqlitePool for convenience
pub use sqlx::sqlite::SqlitePool;
