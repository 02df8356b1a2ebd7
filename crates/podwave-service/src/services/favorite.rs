//! Favorite service
//!
//! Toggles and lists a user's favorite episodes.

use podwave_core::value_objects::RecordId;
use tracing::{info, instrument};

use crate::dto::requests::messages;
use crate::dto::{EpisodeResponse, FavoritesResponse, ToggleFavoriteRequest, ToggleFavoriteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the favorite state of a user/episode pair
    #[instrument(skip(self))]
    pub async fn toggle(&self, request: ToggleFavoriteRequest) -> ServiceResult<ToggleFavoriteResponse> {
        let ids = request
            .user_id
            .zip(request.episode_id)
            .filter(|(user, episode)| *user != 0 && *episode != 0);
        let Some((user_id, episode_id)) = ids else {
            return Err(ServiceError::validation(messages::FAVORITE_REQUIRED));
        };
        let (user_id, episode_id) = (RecordId::new(user_id), RecordId::new(episode_id));

        let state = self.ctx.favorite_repo().toggle(user_id, episode_id).await?;
        info!(user_id = %user_id, episode_id = %episode_id, active = state.is_active(), "Favorite toggled");

        Ok(ToggleFavoriteResponse {
            active: state.is_active(),
        })
    }

    /// Favorited episodes, most recently favorited first
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: RecordId) -> ServiceResult<FavoritesResponse> {
        let favorites = self.ctx.favorite_repo().list_for_user(user_id).await?;

        Ok(FavoritesResponse {
            favorites: favorites.into_iter().map(EpisodeResponse::from).collect(),
        })
    }
}
