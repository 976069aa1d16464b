//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use inquiry_api::{create_app, create_app_state, AppState};
use inquiry_common::AppConfig;
use inquiry_db::MemoryInquiryRepository;
use inquiry_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Backing store, when the server runs without PostgreSQL
    pub repo: Option<Arc<MemoryInquiryRepository>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by an empty in-process store
    pub async fn start() -> Result<Self> {
        Self::start_in_memory(false).await
    }

    /// Start an in-process server, optionally exposing error detail
    pub async fn start_in_memory(debug: bool) -> Result<Self> {
        Self::start_with_config(test_config(debug)?).await
    }

    /// Start an in-process server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let repo = Arc::new(MemoryInquiryRepository::new());
        let state = AppState::new(ServiceContext::new(repo.clone()), config);

        let mut server = Self::serve(state).await?;
        server.repo = Some(repo);
        Ok(server)
    }

    /// Start a server against the PostgreSQL database in `DATABASE_URL`
    pub async fn start_postgres() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
        config.rate_limit.enabled = false;

        let state = create_app_state(config).await?;
        Self::serve(state).await
    }

    async fn serve(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Bind to an ephemeral port
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
            repo: None,
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

    /// Make a POST request with a raw JSON body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// The in-process store; panics for PostgreSQL-backed servers
    pub fn memory_repo(&self) -> &MemoryInquiryRepository {
        self.repo
            .as_deref()
            .expect("server is not backed by the in-process store")
    }
}

/// Configuration for in-process servers
///
/// Rate limiting is off so tests can fire requests back to back.
pub fn test_config(debug: bool) -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "APP_NAME" => Some("Inquiry API Test".to_string()),
        "APP_ENV" => Some("development".to_string()),
        "APP_DEBUG" => Some(debug.to_string()),
        "API_HOST" => Some("127.0.0.1".to_string()),
        "API_PORT" => Some("0".to_string()),
        "DATABASE_URL" => Some("postgres://localhost/unused".to_string()),
        "RATE_LIMIT_ENABLED" => Some("false".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if a PostgreSQL test database is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
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
