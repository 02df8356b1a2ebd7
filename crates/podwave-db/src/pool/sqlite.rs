//! SQLite connection pool management

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const MEMORY_STORE: &str = ":memory:";

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (`sqlite:path/to/file.sqlite3` or `sqlite::memory:`)
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed; `None` keeps it open
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a connection; `None` keeps it open
    pub max_lifetime: Option<Duration>,
    /// Turn on `PRAGMA foreign_keys` for every connection
    pub enforce_foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite:podwave_mobile.sqlite3"),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: Some(Duration::from_secs(1800)),
            enforce_foreign_keys: false,
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory database.
    ///
    /// Every connection to `:memory:` opens its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub fn in_memory() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
            min_connections: 1,
            idle_timeout: None,
            max_lifetime: None,
            ..Default::default()
        }
    }

    /// Whether the URL names an in-memory database
    pub fn is_memory(&self) -> bool {
        store_name(&self.url) == MEMORY_STORE
    }
}

impl From<&podwave_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &podwave_common::DatabaseConfig) -> Self {
        let base = Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            min_connections: config.min_connections,
            enforce_foreign_keys: config.enforce_foreign_keys,
            ..Default::default()
        };

        if base.is_memory() {
            Self {
                enforce_foreign_keys: config.enforce_foreign_keys,
                ..Self::in_memory()
            }
        } else {
            base
        }
    }
}

/// File name of the store named by a SQLite URL, or `:memory:`
pub fn store_name(url: &str) -> String {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    if path.is_empty() || path == MEMORY_STORE || query.contains("mode=memory") {
        return MEMORY_STORE.to_string();
    }

    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned())
}

/// Create a new SQLite connection pool, creating the file if missing
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(config.enforce_foreign_keys);

    if !config.is_memory() {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await
}
