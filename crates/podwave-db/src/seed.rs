//! Catalog seed bootstrapper

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::schema::apply_schema;

struct SeedChannel {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    cover_emoji: &'static str,
    episodes: [SeedEpisode; 2],
}

struct SeedEpisode {
    title: &'static str,
    duration_min: i64,
    mood: &'static str,
}

const CATALOG: [SeedChannel; 3] = [
    SeedChannel {
        name: "Flow Diario",
        category: "Productividad",
        description: "Rutinas y hábitos para DAM.",
        cover_emoji: "⚡",
        episodes: [
            SeedEpisode {
                title: "Bloques de estudio de 25 min",
                duration_min: 18,
                mood: "Focus",
            },
            SeedEpisode {
                title: "Checklist anti procrastinación",
                duration_min: 14,
                mood: "Focus",
            },
        ],
    },
    SeedChannel {
        name: "Pixel Talks",
        category: "Tecnología",
        description: "Tendencias de desarrollo móvil.",
        cover_emoji: "📱",
        episodes: [
            SeedEpisode {
                title: "Arquitectura mobile-first",
                duration_min: 22,
                mood: "Build",
            },
            SeedEpisode {
                title: "UI motion y transiciones",
                duration_min: 19,
                mood: "Build",
            },
        ],
    },
    SeedChannel {
        name: "Mind Garden",
        category: "Bienestar",
        description: "Respira, enfoca y programa mejor.",
        cover_emoji: "🌿",
        episodes: [
            SeedEpisode {
                title: "Respiración para exámenes",
                duration_min: 12,
                mood: "Calm",
            },
            SeedEpisode {
                title: "Deep work y descanso activo",
                duration_min: 16,
                mood: "Calm",
            },
        ],
    },
];

/// Insert the starter catalog when no channel exists.
///
/// Only the channel count is checked. Returns whether anything was inserted.
#[instrument(skip(pool))]
pub async fn seed_catalog(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let channels: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM channels")
        .fetch_one(&mut *tx)
        .await?;
    if channels > 0 {
        tracing::debug!(channels, "Catalog already present, skipping seed");
        return Ok(false);
    }

    let now = Utc::now();
    for channel in &CATALOG {
        let channel_id = sqlx::query(
            r"
            INSERT INTO channels (name, category, description, cover_emoji, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(channel.name)
        .bind(channel.category)
        .bind(channel.description)
        .bind(channel.cover_emoji)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for episode in &channel.episodes {
            sqlx::query(
                r"
                INSERT INTO episodes (channel_id, title, duration_min, mood, created_at)
                VALUES (?, ?, ?, ?, ?)
                ",
            )
            .bind(channel_id)
            .bind(episode.title)
            .bind(episode.duration_min)
            .bind(episode.mood)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;

    tracing::info!(channels = CATALOG.len(), episodes = CATALOG.len() * 2, "Catalog seeded");
    Ok(true)
}

/// Prepare a fresh pool: apply the schema, then seed when asked
pub async fn bootstrap(pool: &SqlitePool, seed: bool) -> Result<bool, sqlx::Error> {
    apply_schema(pool).await?;
    if seed {
        seed_catalog(pool).await
    } else {
        Ok(false)
    }
}
