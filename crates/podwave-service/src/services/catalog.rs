//! Catalog service
//!
//! Read-only access to channels and episodes.

use tracing::instrument;

use crate::dto::{
    ChannelResponse, ChannelsResponse, EpisodeResponse, EpisodesQuery, EpisodesResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> ServiceResult<ChannelsResponse> {
        let channels = self.ctx.catalog_repo().list_channels().await?;

        Ok(ChannelsResponse {
            channels: channels.into_iter().map(ChannelResponse::from).collect(),
        })
    }

    /// Episodes with channel info, optionally filtered by exact mood
    #[instrument(skip(self))]
    pub async fn list_episodes(&self, query: &EpisodesQuery) -> ServiceResult<EpisodesResponse> {
        let episodes = self
            .ctx
            .catalog_repo()
            .list_episodes(query.mood_filter())
            .await?;

        Ok(EpisodesResponse {
            episodes: episodes.into_iter().map(EpisodeResponse::from).collect(),
        })
    }
}
