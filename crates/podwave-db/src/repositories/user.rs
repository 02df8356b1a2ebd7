//! SQLite implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use podwave_core::entities::{NewUser, User};
use podwave_core::traits::{RepoResult, UserRepository};
use podwave_core::value_objects::RecordId;

use crate::models::UserModel;

use super::error::{map_db_error, missing_after_insert};

/// SQLite implementation of UserRepository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[instrument(skip(self, user), fields(dni = %user.dni))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let id = sqlx::query(
            r"
            INSERT INTO mobile_users (name, dni, created_at)
            VALUES (?, ?, ?)
            ",
        )
        .bind(&user.name)
        .bind(user.dni.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?
        .last_insert_rowid();

        self.find_by_id(RecordId::new(id))
            .await?
            .ok_or_else(|| missing_after_insert("mobile_users", id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, dni, created_at
            FROM mobile_users
            WHERE id = ?
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}
