//! SQLite implementation of StatsRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use podwave_core::entities::{AppStats, LeaderboardEntry};
use podwave_core::traits::{RepoResult, StatsRepository};

use crate::models::{LeaderboardRowModel, StatsModel};

use super::error::map_db_error;

/// SQLite implementation of StatsRepository
#[derive(Clone)]
pub struct SqliteStatsRepository {
    pool: SqlitePool,
}

impl SqliteStatsRepository {
    /// Create a new SqliteStatsRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    #[instrument(skip(self))]
    async fn leaderboard(&self, limit: i64) -> RepoResult<Vec<LeaderboardEntry>> {
        let limit = limit.max(0);

        // u.id breaks remaining ties so the order is stable
        let results = sqlx::query_as::<_, LeaderboardRowModel>(
            r"
            SELECT u.id, u.name, u.dni,
                   COUNT(s.id) AS sessions,
                   COALESCE(SUM(s.plays_count), 0) AS plays,
                   COALESCE(SUM(s.favorites_count), 0) AS favorites
            FROM mobile_users u
            LEFT JOIN app_sessions s ON s.user_id = u.id
            GROUP BY u.id, u.name, u.dni
            ORDER BY plays DESC, favorites DESC, sessions DESC, u.id
            LIMIT ?
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(LeaderboardEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn totals(&self) -> RepoResult<AppStats> {
        let row = sqlx::query_as::<_, StatsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM mobile_users) AS users,
                (SELECT COUNT(*) FROM channels) AS channels,
                (SELECT COUNT(*) FROM episodes) AS episodes,
                (SELECT COUNT(*) FROM app_sessions) AS sessions,
                (SELECT COUNT(*) FROM app_events) AS events,
                (SELECT COUNT(*) FROM user_favorites) AS favorites
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AppStats::from(row))
    }
}
