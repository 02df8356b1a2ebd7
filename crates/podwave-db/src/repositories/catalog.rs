//! SQLite implementation of CatalogRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use podwave_core::entities::{Channel, EpisodeWithChannel};
use podwave_core::traits::{CatalogRepository, RepoResult};

use crate::models::{ChannelModel, EpisodeWithChannelModel};

use super::error::map_db_error;

/// SQLite implementation of CatalogRepository
#[derive(Clone)]
pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    /// Create a new SqliteCatalogRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    #[instrument(skip(self))]
    async fn list_channels(&self) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, name, category, description, cover_emoji, created_at
            FROM channels
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_episodes(&self, mood: Option<&str>) -> RepoResult<Vec<EpisodeWithChannel>> {
        let results = match mood {
            Some(mood) => {
                sqlx::query_as::<_, EpisodeWithChannelModel>(
                    r"
                    SELECT e.id, e.channel_id, e.title, e.duration_min, e.mood,
                           c.name AS channel_name, c.cover_emoji
                    FROM episodes e
                    JOIN channels c ON c.id = e.channel_id
                    WHERE e.mood = ?
                    ORDER BY e.id
                    ",
                )
                .bind(mood)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, EpisodeWithChannelModel>(
                    r"
                    SELECT e.id, e.channel_id, e.title, e.duration_min, e.mood,
                           c.name AS channel_name, c.cover_emoji
                    FROM episodes e
                    JOIN channels c ON c.id = e.channel_id
                    ORDER BY e.id
                    ",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EpisodeWithChannel::from).collect())
    }
}
