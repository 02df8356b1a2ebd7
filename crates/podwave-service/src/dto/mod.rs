//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    EndSessionRequest, EpisodesQuery, LogEventRequest, RegisterUserRequest, StartSessionRequest,
    ToggleFavoriteRequest,
};

pub use responses::{
    AckResponse, ChannelResponse, ChannelsResponse, EpisodeResponse, EpisodesResponse,
    FavoritesResponse, HealthResponse, LeaderResponse, LeaderboardResponse, ReadinessResponse,
    RegisterUserResponse, StartSessionResponse, StatsBody, StatsResponse, ToggleFavoriteResponse,
};
