//! MoodLog API client

pub mod ai;
pub mod auth;
pub mod error;
pub mod journal;
pub mod session;
pub mod stories;

use std::sync::Arc;
use std::time::Duration;

use futures::lock::Mutex;
use reqwest::{Client, ClientBuilder, Method, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use error::ApiError;
use session::{MemoryTokens, TokenStore};

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// A request the client can rebuild from scratch.
///
/// Replays after a token refresh go through the same construction path as
/// the original attempt, so they pick up the new credential instead of the
/// header the request was first sent with.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|source| {
            ApiError::Configuration(format!("failed to encode request body: {source}"))
        })?;
        self.body = Some(value);
        Ok(self)
    }
}

/// MoodLog API client.
///
/// Owns the transport and the session credential pair; cloning is cheap and
/// shares both. The credential pair is the only mutable state, and it is
/// only written by the login family, refresh success, and teardown.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    refresh_gate: Arc<Mutex<()>>,
}

impl ApiClient {
    /// Create a new client with default configuration.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session credential store this client reads and maintains.
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn get(&self, path: &str) -> RequestSpec {
        RequestSpec::new(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestSpec {
        RequestSpec::new(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestSpec {
        RequestSpec::new(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> RequestSpec {
        RequestSpec::new(Method::DELETE, path)
    }

    /// Execute a request and normalize the outcome.
    ///
    /// A 401 on the first attempt triggers at most one token refresh and one
    /// replay of the same descriptor; the replayed outcome is final either
    /// way, so a second 401 can never loop back into the refresh path.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ApiError> {
        let mut attempt: u8 = 0;
        loop {
            let response = self.send(&spec).await?;
            if response.status() == StatusCode::UNAUTHORIZED
                && attempt == 0
                && self.refresh_access_token().await
            {
                attempt += 1;
                continue;
            }
            return Self::decode(response).await;
        }
    }

    /// Build and dispatch one attempt, reading the current access token.
    async fn send(&self, spec: &RequestSpec) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut request = self.http.request(spec.method.clone(), url);
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }
        if let Some(token) = self.tokens.access_token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        request.send().await.map_err(|source| {
            tracing::warn!(error = %source, path = %spec.path, "transport failure");
            ApiError::Network
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|source| {
                tracing::warn!(error = %source, "response body did not match the expected shape");
                ApiError::Server {
                    status: status.as_u16(),
                    message: "Invalid response from server".into(),
                }
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Mint a new access token through the refresh endpoint.
    ///
    /// Single-flight: the first 401 performs the refresh while concurrent
    /// 401s wait on the gate and adopt the same outcome. Returns true when a
    /// fresh token is in place. A rejected refresh is fatal for the session:
    /// both stored tokens are cleared and the caller's 401 stands.
    async fn refresh_access_token(&self) -> bool {
        let stale = self.tokens.access_token();
        let _gate = self.refresh_gate.lock().await;

        // Someone else refreshed while we waited for the gate.
        let current = self.tokens.access_token();
        if current != stale && current.is_some() {
            return true;
        }

        let Some(refresh_token) = self.tokens.refresh_token() else {
            return false;
        };
        match self.refresh(&refresh_token).await {
            Ok(granted) => {
                self.tokens.set_access_token(&granted.token);
                tracing::debug!("access token refreshed");
                true
            }
            Err(error) => {
                tracing::warn!(%error, "token refresh failed, tearing down session");
                self.tokens.clear();
                false
            }
        }
    }
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl ApiClientBuilder {
    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the request timeout (defaults to [`REQUEST_TIMEOUT`]).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a specific credential store (defaults to an in-memory store).
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder.timeout(self.timeout.unwrap_or(REQUEST_TIMEOUT));
        }
        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("moodlog-client/0.1.0");
        }

        let http = client_builder
            .build()
            .map_err(|source| ApiError::Configuration(source.to_string()))?;

        Ok(ApiClient {
            http,
            base_url,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokens::default())),
            refresh_gate: Arc::new(Mutex::new(())),
        })
    }
}
