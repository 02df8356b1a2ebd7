//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use podwave_core::entities::{AppStats, Channel, EpisodeWithChannel, LeaderboardEntry, User};

use super::responses::{
    ChannelResponse, EpisodeResponse, LeaderResponse, RegisterUserResponse, StatsBody,
};

impl From<User> for RegisterUserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id.into_inner(),
            name: user.name,
            dni: user.dni.into_inner(),
        }
    }
}

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self {
            id: channel.id.into_inner(),
            name: channel.name,
            category: channel.category,
            description: channel.description,
            cover_emoji: channel.cover_emoji,
            created_at: channel.created_at,
        }
    }
}

impl From<EpisodeWithChannel> for EpisodeResponse {
    fn from(episode: EpisodeWithChannel) -> Self {
        Self {
            id: episode.id.into_inner(),
            channel_id: episode.channel_id.into_inner(),
            title: episode.title,
            duration_min: episode.duration_min,
            mood: episode.mood,
            channel_name: episode.channel_name,
            cover_emoji: episode.cover_emoji,
        }
    }
}

impl From<LeaderboardEntry> for LeaderResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.user_id.into_inner(),
            name: entry.name,
            dni: entry.dni.into_inner(),
            sessions: entry.sessions,
            plays: entry.plays,
            favorites: entry.favorites,
        }
    }
}

impl From<AppStats> for StatsBody {
    fn from(stats: AppStats) -> Self {
        Self {
            users: stats.users,
            channels: stats.channels,
            episodes: stats.episodes,
            sessions: stats.sessions,
            events: stats.events,
            favorites: stats.favorites,
        }
    }
}
