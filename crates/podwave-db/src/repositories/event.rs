//! SQLite implementation of EventRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use podwave_core::entities::{Event, NewEvent};
use podwave_core::traits::{EventRepository, RepoResult};

use crate::models::EventModel;

use super::error::map_db_error;

/// SQLite implementation of EventRepository
#[derive(Clone)]
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Create a new SqliteEventRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    #[instrument(skip(self, event), fields(session_id = %event.session_id, event_type = %event.event_type))]
    async fn append(&self, event: &NewEvent) -> RepoResult<Event> {
        let model = sqlx::query_as::<_, EventModel>(
            r"
            INSERT INTO app_events (session_id, event_type, episode_id, screen_name, payload_json, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, session_id, event_type, episode_id, screen_name, payload_json, created_at
            ",
        )
        .bind(event.session_id.into_inner())
        .bind(&event.event_type)
        .bind(event.episode_id.map(|id| id.into_inner()))
        .bind(event.screen_name.as_deref())
        .bind(&event.payload_json)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Event::from(model))
    }
}
