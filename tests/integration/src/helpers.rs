//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, minting identity tokens,
//! seeding users, and making HTTP requests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use hourboard_api::{create_app, create_app_state, AppState};
use hourboard_common::{AppConfig, Identity, IdentityTokenService};
use hourboard_core::{DocumentId, Role, User};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Shared secret the test server verifies tokens with
pub const TEST_SECRET: &str = "integration-test-secret";

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    tokens: IdentityTokenService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server backed by the in-process store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let tokens =
            IdentityTokenService::new(&config.identity.secret, config.identity.leeway_secs);

        let state = create_app_state(config).await?;
        let app = create_app(state.clone());

        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            state,
            tokens,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url(), path)
    }

    /// Mint an identity token the way the identity provider would
    pub fn token_for(&self, uid: &str) -> Result<String> {
        let identity = Identity {
            uid: DocumentId::from(uid),
            name: format!("User {uid}"),
            email: format!("{uid}@example.com"),
        };
        Ok(self.tokens.issue(&identity, 3600)?)
    }

    /// Write a user straight into the store and return a token for them
    pub async fn seed_user(&self, uid: &str, role: Role, hours: u32) -> Result<String> {
        let mut user = User::new(
            DocumentId::from(uid),
            format!("User {uid}"),
            format!("{uid}@example.com"),
            role,
        );
        user.hours = hours;
        self.state.service_context().user_repo().create(&user).await?;
        self.token_for(uid)
    }

    /// Make an unauthenticated GET request to a root path
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request under /api/v1 with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request under /api/v1 with auth token and no body
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request under /api/v1 with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request under /api/v1 with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request under /api/v1 with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Test configuration: in-process store, known token secret, generous rate limit
///
/// `overrides` replace individual variables (e.g. `("ATOMIC_UPDATES", "false")`).
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let lookup = |key: &str| {
        if let Some((_, value)) = overrides.iter().find(|(k, _)| *k == key) {
            return Some((*value).to_string());
        }
        match key {
            "API_PORT" => Some("0".to_string()),
            "STORE_BACKEND" => Some("memory".to_string()),
            "IDENTITY_TOKEN_SECRET" => Some(TEST_SECRET.to_string()),
            "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("10000".to_string()),
            "RATE_LIMIT_BURST" => Some("10000".to_string()),
            _ => None,
        }
    };
    AppConfig::from_lookup(lookup).map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {body}"))
}
