//! API Integration Tests
//!
//! Each test starts its own server on a fresh SQLite file in a temp directory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn register(server: &TestServer, name: &str, dni: &str) -> RegisterResponse {
    let response = server
        .post("/api/users/register", &json!({"name": name, "dni": dni}))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn start_session(server: &TestServer, user_id: i64) -> i64 {
    let response = server
        .post("/api/sessions/start", &StartSessionRequest { user_id })
        .await
        .unwrap();
    let body: StartSessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);
    body.session_id
}

async fn end_session(server: &TestServer, request: &EndSessionRequest) {
    let response = server.post("/api/sessions/end", request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}

async fn stats(server: &TestServer) -> StatsBody {
    let response = server.get("/api/stats").await.unwrap();
    let body: StatsView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);
    body.stats
}

// ============================================================================
// Landing / Health Tests
// ============================================================================

#[tokio::test]
async fn test_landing_page() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(response.text().await.unwrap().contains("/api/episodes"));
}

#[tokio::test]
async fn test_health_reports_database_file_name() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["ok"], true);
    assert_eq!(body["db"], integration_tests::TEST_DB_FILE);
    assert!(body["utc"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({"ok": true, "database": "healthy"}));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_normalizes_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = register(&server, "  Ana López ", " 12345678z ").await;

    assert!(body.ok);
    assert!(body.user_id > 0);
    assert_eq!(body.name, "Ana López");
    assert_eq!(body.dni, "12345678Z");
}

#[tokio::test]
async fn test_register_allows_duplicate_dni() {
    let server = TestServer::start().await.expect("Failed to start server");
    let first = register(&server, "Ana", "111").await;
    let second = register(&server, "Ana", "111").await;

    assert_ne!(first.user_id, second.user_id);
    assert_eq!(stats(&server).await.users, 2);
}

#[tokio::test]
async fn test_register_rejects_blank_name() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/users/register", &json!({"name": "   ", "dni": "123"}))
        .await
        .unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "Nombre y DNI son obligatorios.")
        .await
        .unwrap();
    assert_eq!(stats(&server).await.users, 0);
}

#[tokio::test]
async fn test_register_rejects_missing_dni() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/users/register", &json!({"name": "Ana"}))
        .await
        .unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "Nombre y DNI son obligatorios.")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_raw("/api/users/register", "{\"name\": ").await.unwrap();

    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "El cuerpo de la petición debe ser JSON válido.",
    )
    .await
    .unwrap();
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_session_ids_increase() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;

    let first = start_session(&server, user.user_id).await;
    let second = start_session(&server, user.user_id).await;

    assert!(second > first);
}

#[tokio::test]
async fn test_start_session_requires_user_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/api/sessions/start", &json!({})).await.unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "userId es obligatorio.")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_start_session_accepts_unknown_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let session_id = start_session(&server, 999).await;

    assert!(session_id > 0);
    assert_eq!(stats(&server).await.sessions, 1);
}

#[tokio::test]
async fn test_end_unknown_session_is_acknowledged() {
    let server = TestServer::start().await.expect("Failed to start server");
    end_session(
        &server,
        &EndSessionRequest {
            session_id: 4242,
            plays_count: 3,
            ..EndSessionRequest::default()
        },
    )
    .await;

    assert_eq!(stats(&server).await.sessions, 0);
}

#[tokio::test]
async fn test_end_session_accepts_beacon_text_plain() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;
    let session_id = start_session(&server, user.user_id).await;

    // navigator.sendBeacon posts a string body as text/plain
    let body = format!(r#"{{"sessionId": {session_id}, "screensVisited": 2, "playsCount": 4, "favoritesCount": 1}}"#);
    let response = server
        .post_with_type("/api/sessions/end", "text/plain;charset=UTF-8", body)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"ok": true}));

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: LeaderboardView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(board.leaders[0].id, user.user_id);
    assert_eq!(board.leaders[0].plays, 4);
    assert_eq!(board.leaders[0].favorites, 1);
}

#[tokio::test]
async fn test_end_session_requires_session_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/sessions/end", &json!({"playsCount": 2}))
        .await
        .unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "sessionId es obligatorio.")
        .await
        .unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_event_payload_is_stored_verbatim() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;
    let session_id = start_session(&server, user.user_id).await;

    // Key order, spacing and a big integer must survive untouched
    let payload = r#"{"z": 1, "a": [true, null], "big": 12345678901234567890123, "t": "Respiración ñ"}"#;
    let body = format!(
        r#"{{"sessionId": {session_id}, "eventType": "play", "episodeId": 3, "screenName": "player", "payload": {payload}}}"#
    );
    let response = server.post_raw("/api/events", body).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"ok": true}));

    let pool = server.inspect_db().await.unwrap();
    let (episode_id, screen_name, stored): (Option<i64>, Option<String>, String) = sqlx::query_as(
        "SELECT episode_id, screen_name, payload_json FROM app_events WHERE session_id = ?",
    )
    .bind(session_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(episode_id, Some(3));
    assert_eq!(screen_name.as_deref(), Some("player"));
    assert_eq!(stored, payload);
}

#[tokio::test]
async fn test_event_defaults() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/events",
            &json!({"sessionId": 7, "eventType": "screen_view", "screenName": "  "}),
        )
        .await
        .unwrap();
    assert_json::<Value>(response, StatusCode::OK).await.unwrap();

    let pool = server.inspect_db().await.unwrap();
    let (episode_id, screen_name, payload): (Option<i64>, Option<String>, String) = sqlx::query_as(
        "SELECT episode_id, screen_name, payload_json FROM app_events WHERE session_id = 7",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(episode_id, None);
    assert_eq!(screen_name, None);
    assert_eq!(payload, "{}");
}

#[tokio::test]
async fn test_event_requires_type() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/events", &json!({"sessionId": 1, "eventType": ""}))
        .await
        .unwrap();

    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "sessionId y eventType obligatorios.",
    )
    .await
    .unwrap();
    assert_eq!(stats(&server).await.events, 0);
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_seeded_catalog() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/channels").await.unwrap();
    let channels: ChannelsView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(channels.ok);
    assert_eq!(channels.channels.len(), 3);
    assert!(channels.channels.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(channels.channels[0].name, "Flow Diario");

    let response = server.get("/api/episodes").await.unwrap();
    let episodes: EpisodesView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(episodes.episodes.len(), 6);
    assert_eq!(episodes.episodes[0].channel_name, "Flow Diario");
    assert_eq!(episodes.episodes[0].cover_emoji, "⚡");
}

#[tokio::test]
async fn test_episodes_by_mood() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/episodes?mood=Focus").await.unwrap();
    let episodes: EpisodesView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(episodes.episodes.len(), 2);
    assert!(episodes.episodes.iter().all(|e| e.mood == "Focus"));

    let response = server.get("/api/episodes?mood=focus").await.unwrap();
    let episodes: EpisodesView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(episodes.episodes.is_empty());
}

#[tokio::test]
async fn test_empty_mood_means_no_filter() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/episodes?mood=").await.unwrap();
    let episodes: EpisodesView = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(episodes.episodes.len(), 6);
}

#[tokio::test]
async fn test_catalog_empty_without_seed() {
    let server = TestServer::start_with(|config| config.seed.on_startup = false)
        .await
        .expect("Failed to start server");

    let response = server.get("/api/channels").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"ok": true, "channels": []}));
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;
    let request = ToggleFavoriteRequest {
        user_id: user.user_id,
        episode_id: 2,
    };

    let response = server.post("/api/favorites/toggle", &request).await.unwrap();
    let first: ToggleFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.ok);
    assert!(first.active);
    assert_eq!(stats(&server).await.favorites, 1);

    let response = server.post("/api/favorites/toggle", &request).await.unwrap();
    let second: ToggleFavoriteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.active);
    assert_eq!(stats(&server).await.favorites, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_keep_parity() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;
    let url = format!("{}/api/favorites/toggle", server.base_url());
    let request = ToggleFavoriteRequest {
        user_id: user.user_id,
        episode_id: 4,
    };

    // An even number of toggles must leave the favorite off
    let handles: Vec<_> = (0..20)
        .map(|_| {
            let client = server.client.clone();
            let url = url.clone();
            let request = request.clone();
            tokio::spawn(async move { client.post(&url).json(&request).send().await })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = server
        .get(&format!("/api/users/{}/favorites", user.user_id))
        .await
        .unwrap();
    let favorites: FavoritesView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites.favorites.is_empty());
    assert_eq!(stats(&server).await.favorites, 0);
}

#[tokio::test]
async fn test_favorites_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;

    for episode_id in [1, 5, 3] {
        let request = ToggleFavoriteRequest {
            user_id: user.user_id,
            episode_id,
        };
        let response = server.post("/api/favorites/toggle", &request).await.unwrap();
        assert_json::<Value>(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/api/users/{}/favorites", user.user_id))
        .await
        .unwrap();
    let favorites: FavoritesView = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(favorites.ok);
    let ids: Vec<i64> = favorites.favorites.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 5, 1]);
    assert_eq!(favorites.favorites[1].channel_name, "Mind Garden");
}

#[tokio::test]
async fn test_favorites_of_unknown_user_is_empty() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/users/999/favorites").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, json!({"ok": true, "favorites": []}));
}

#[tokio::test]
async fn test_favorites_with_non_integer_user_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/users/ana/favorites").await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn test_toggle_requires_both_ids() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/favorites/toggle", &json!({"userId": 1}))
        .await
        .unwrap();

    assert_error(response, StatusCode::BAD_REQUEST, "userId y episodeId obligatorios.")
        .await
        .unwrap();
}

// ============================================================================
// Leaderboard / Stats Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_ordering() {
    let server = TestServer::start().await.expect("Failed to start server");
    let ana = register(&server, "Ana", "1").await;
    let luis = register(&server, "Luis", "2").await;
    let idle = register(&server, "Sin sesiones", "3").await;

    // Ana: 5 plays over two sessions, Luis: 5 plays and more favorites
    for (user_id, plays, favorites) in [(ana.user_id, 2, 0), (ana.user_id, 3, 1), (luis.user_id, 5, 2)] {
        let session_id = start_session(&server, user_id).await;
        end_session(
            &server,
            &EndSessionRequest {
                session_id,
                screens_visited: 4,
                plays_count: plays,
                favorites_count: favorites,
            },
        )
        .await;
    }

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: LeaderboardView = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(board.ok);

    let ids: Vec<i64> = board.leaders.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![luis.user_id, ana.user_id, idle.user_id]);

    assert_eq!(board.leaders[1].sessions, 2);
    assert_eq!(board.leaders[1].plays, 5);
    assert_eq!(board.leaders[1].favorites, 1);

    let last = &board.leaders[2];
    assert_eq!((last.sessions, last.plays, last.favorites), (0, 0, 0));
    assert_eq!(last.dni, "3");
}

#[tokio::test]
async fn test_leaderboard_limited_to_ten() {
    let server = TestServer::start().await.expect("Failed to start server");
    for _ in 0..12 {
        let request = RegisterRequest::unique();
        let response = server.post("/api/users/register", &request).await.unwrap();
        assert_json::<RegisterResponse>(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/leaderboard").await.unwrap();
    let board: LeaderboardView = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(board.leaders.len(), 10);
    assert!(board.leaders.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_stats_counts_every_table() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user = register(&server, "Ana", "1").await;
    let session_id = start_session(&server, user.user_id).await;

    let response = server
        .post("/api/events", &json!({"sessionId": session_id, "eventType": "open"}))
        .await
        .unwrap();
    assert_json::<Value>(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(
            "/api/favorites/toggle",
            &ToggleFavoriteRequest {
                user_id: user.user_id,
                episode_id: 1,
            },
        )
        .await
        .unwrap();
    assert_json::<Value>(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        stats(&server).await,
        StatsBody {
            users: 1,
            channels: 3,
            episodes: 6,
            sessions: 1,
            events: 1,
            favorites: 1,
        }
    );
}
