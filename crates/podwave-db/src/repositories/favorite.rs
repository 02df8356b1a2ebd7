//! SQLite implementation of FavoriteRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use podwave_core::entities::{EpisodeWithChannel, FavoriteToggle};
use podwave_core::traits::{FavoriteRepository, RepoResult};
use podwave_core::value_objects::RecordId;

use crate::models::EpisodeWithChannelModel;

use super::error::map_db_error;

/// SQLite implementation of FavoriteRepository
#[derive(Clone)]
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new SqliteFavoriteRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    #[instrument(skip(self))]
    async fn toggle(&self, user_id: RecordId, episode_id: RecordId) -> RepoResult<FavoriteToggle> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query(
            r"
            DELETE FROM user_favorites
            WHERE user_id = ? AND episode_id = ?
            ",
        )
        .bind(user_id.into_inner())
        .bind(episode_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let state = if removed > 0 {
            FavoriteToggle::Deactivated
        } else {
            // A concurrent toggle may have inserted the pair first
            sqlx::query(
                r"
                INSERT INTO user_favorites (user_id, episode_id, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT(user_id, episode_id) DO NOTHING
                ",
            )
            .bind(user_id.into_inner())
            .bind(episode_id.into_inner())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            FavoriteToggle::Activated
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(state)
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: RecordId) -> RepoResult<Vec<EpisodeWithChannel>> {
        let results = sqlx::query_as::<_, EpisodeWithChannelModel>(
            r"
            SELECT e.id, e.channel_id, e.title, e.duration_min, e.mood,
                   c.name AS channel_name, c.cover_emoji
            FROM user_favorites f
            JOIN episodes e ON e.id = f.episode_id
            JOIN channels c ON c.id = e.channel_id
            WHERE f.user_id = ?
            ORDER BY f.id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EpisodeWithChannel::from).collect())
    }
}
