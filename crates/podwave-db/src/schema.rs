//! Storage schema
//!
//! Six tables, created idempotently at startup. Foreign keys are declared
//! but only enforced when the pool turns on `PRAGMA foreign_keys`.

use sqlx::SqlitePool;
use tracing::instrument;

const STATEMENTS: [&str; 6] = [
    r"
    CREATE TABLE IF NOT EXISTS mobile_users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        dni TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS channels (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT DEFAULT '',
        cover_emoji TEXT DEFAULT '🎧',
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS episodes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        channel_id INTEGER NOT NULL,
        title TEXT NOT NULL,
        duration_min INTEGER DEFAULT 10,
        mood TEXT DEFAULT 'Focus',
        created_at TEXT NOT NULL,
        FOREIGN KEY(channel_id) REFERENCES channels(id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS app_sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        started_at TEXT NOT NULL,
        ended_at TEXT,
        screens_visited INTEGER DEFAULT 0,
        plays_count INTEGER DEFAULT 0,
        favorites_count INTEGER DEFAULT 0,
        FOREIGN KEY(user_id) REFERENCES mobile_users(id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS user_favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        episode_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE(user_id, episode_id),
        FOREIGN KEY(user_id) REFERENCES mobile_users(id),
        FOREIGN KEY(episode_id) REFERENCES episodes(id)
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS app_events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id INTEGER NOT NULL,
        event_type TEXT NOT NULL,
        episode_id INTEGER,
        screen_name TEXT,
        payload_json TEXT DEFAULT '{}',
        created_at TEXT NOT NULL,
        FOREIGN KEY(session_id) REFERENCES app_sessions(id)
    )
    ",
];

/// Create every table that does not exist yet
#[instrument(skip(pool))]
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!(tables = STATEMENTS.len(), "Schema applied");
    Ok(())
}
