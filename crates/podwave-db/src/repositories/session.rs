//! SQLite implementation of SessionRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use podwave_core::entities::{Session, SessionSummary};
use podwave_core::traits::{RepoResult, SessionRepository};
use podwave_core::value_objects::RecordId;

use crate::models::SessionModel;

use super::error::{map_db_error, missing_after_insert};

/// SQLite implementation of SessionRepository
#[derive(Clone)]
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    /// Create a new SqliteSessionRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    #[instrument(skip(self))]
    async fn start(&self, user_id: RecordId) -> RepoResult<Session> {
        let id = sqlx::query(
            r"
            INSERT INTO app_sessions (user_id, started_at)
            VALUES (?, ?)
            ",
        )
        .bind(user_id.into_inner())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?
        .last_insert_rowid();

        self.find_by_id(RecordId::new(id))
            .await?
            .ok_or_else(|| missing_after_insert("app_sessions", id))
    }

    #[instrument(skip(self))]
    async fn end(&self, id: RecordId, summary: SessionSummary) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE app_sessions
            SET ended_at = ?, screens_visited = ?, plays_count = ?, favorites_count = ?
            WHERE id = ?
            ",
        )
        .bind(Utc::now())
        .bind(summary.screens_visited)
        .bind(summary.plays_count)
        .bind(summary.favorites_count)
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r"
            SELECT id, user_id, started_at, ended_at, screens_visited, plays_count, favorites_count
            FROM app_sessions
            WHERE id = ?
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }
}
