//! Stats service
//!
//! Leaderboard and global counters.

use podwave_core::entities::LEADERBOARD_LIMIT;
use tracing::instrument;

use crate::dto::{LeaderResponse, LeaderboardResponse, StatsBody, StatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Top users by plays, then favorites, then sessions
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ServiceResult<LeaderboardResponse> {
        let entries = self.ctx.stats_repo().leaderboard(LEADERBOARD_LIMIT).await?;

        Ok(LeaderboardResponse {
            leaders: entries.into_iter().map(LeaderResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn totals(&self) -> ServiceResult<StatsResponse> {
        let stats = self.ctx.stats_repo().totals().await?;

        Ok(StatsResponse {
            stats: StatsBody::from(stats),
        })
    }
}
