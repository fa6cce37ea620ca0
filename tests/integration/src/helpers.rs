//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_app_state};
use blog_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::ErrorBody;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server backed by in-memory storage
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}

/// Create a test configuration
///
/// In-memory storage on an ephemeral port, with a rate limit high enough
/// not to interfere. `overrides` replace or add variables.
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = [
        ("API_PORT", "0"),
        ("STORAGE_BACKEND", "memory"),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
    ]
    .into_iter()
    .chain(overrides.iter().copied())
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
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

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
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
    Ok(())
}

/// Assert an error response and return its error code
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: ErrorBody = assert_json(response, expected_status).await?;
    Ok(body.error.code)
}
