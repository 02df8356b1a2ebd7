//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use podwave_api::{create_app, create_app_state, run_server};
use podwave_common::AppConfig;
use podwave_db::{create_pool, DatabaseConfig, SqlitePool};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// File name of the database inside each server's temp directory
pub const TEST_DB_FILE: &str = "podwave_test.sqlite3";

/// Test server instance that manages lifecycle
///
/// Each server owns a fresh SQLite file that is removed on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    db_url: String,
    _dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a seeded database
    pub async fn start() -> Result<Self> {
        Self::start_with(|_| {}).await
    }

    /// Start a test server after adjusting the default test config
    pub async fn start_with<F>(adjust: F) -> Result<Self>
    where
        F: FnOnce(&mut AppConfig),
    {
        let dir = tempfile::tempdir()?;
        let db_url = format!("sqlite://{}", dir.path().join(TEST_DB_FILE).display());

        let mut config = test_config(&db_url);
        adjust(&mut config);

        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            db_url,
            _dir: dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw body sent as `application/json`
    pub async fn post_raw(&self, path: &str, body: impl Into<String>) -> Result<Response> {
        self.post_with_type(path, "application/json", body).await
    }

    /// Make a POST request with a raw body and an arbitrary content type
    pub async fn post_with_type(
        &self,
        path: &str,
        content_type: &str,
        body: impl Into<String>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("content-type", content_type)
            .body(body.into())
            .send()
            .await?)
    }

    /// Open a second pool on the server's database file for direct inspection
    pub async fn inspect_db(&self) -> Result<SqlitePool> {
        let config = DatabaseConfig {
            url: self.db_url.clone(),
            max_connections: 1,
            min_connections: 0,
            ..DatabaseConfig::default()
        };
        Ok(create_pool(&config).await?)
    }
}

/// Default configuration for test servers
///
/// Rate limiting is loose enough that no test trips it.
pub fn test_config(db_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.url = db_url.to_string();
    config.rate_limit.requests_per_second = 10_000;
    config.rate_limit.burst = 10_000;
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert a `{ok: false, error}` response with the given status and message
pub async fn assert_error(
    response: Response,
    expected_status: StatusCode,
    expected_message: &str,
) -> Result<()> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    if body != serde_json::json!({"ok": false, "error": expected_message}) {
        anyhow::bail!("Unexpected error body: {}", body);
    }
    Ok(())
}
