//! Channel / episode model -> entity mappers

use podwave_core::entities::{
    Channel, EpisodeWithChannel, DEFAULT_COVER_EMOJI, DEFAULT_DURATION_MIN, DEFAULT_MOOD,
};
use podwave_core::value_objects::RecordId;

use crate::models::{ChannelModel, EpisodeWithChannelModel};

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: RecordId::new(model.id),
            name: model.name,
            category: model.category,
            description: model.description.unwrap_or_default(),
            cover_emoji: model
                .cover_emoji
                .unwrap_or_else(|| DEFAULT_COVER_EMOJI.to_string()),
            created_at: model.created_at,
        }
    }
}

impl From<EpisodeWithChannelModel> for EpisodeWithChannel {
    fn from(model: EpisodeWithChannelModel) -> Self {
        EpisodeWithChannel {
            id: RecordId::new(model.id),
            channel_id: RecordId::new(model.channel_id),
            title: model.title,
            duration_min: model.duration_min.unwrap_or(DEFAULT_DURATION_MIN),
            mood: model.mood.unwrap_or_else(|| DEFAULT_MOOD.to_string()),
            channel_name: model.channel_name,
            cover_emoji: model
                .cover_emoji
                .unwrap_or_else(|| DEFAULT_COVER_EMOJI.to_string()),
        }
    }
}
