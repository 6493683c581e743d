//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and asserting on responses.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use stock_api::{build_service_context, create_app, AppState};
use stock_common::AppConfig;
use stock_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{lazy_pool, InMemoryStore, UNREACHABLE_DATABASE_URL};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by `store` with default test configuration
    pub async fn start_with(store: InMemoryStore) -> Result<Self> {
        Self::start_with_context(store.into_context()?, test_config(&[])?).await
    }

    /// Start a server whose PostgreSQL repositories point at a closed port
    pub async fn start_unreachable() -> Result<Self> {
        let ctx = build_service_context(lazy_pool()?)?;
        Self::start_with_context(ctx, test_config(&[])?).await
    }

    /// Start a server from an explicit context and config
    pub async fn start_with_context(ctx: ServiceContext, config: AppConfig) -> Result<Self> {
        let app = create_app(AppState::new(ctx, config));

        // Port 0 lets the OS pick a free port per test
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

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

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }
}

/// Create a test configuration, applying `overrides` on top of the defaults
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<String, String> = HashMap::from([(
        "DATABASE_URL".to_string(),
        UNREACHABLE_DATABASE_URL.to_string(),
    )]);
    for (key, value) in overrides {
        vars.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
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
