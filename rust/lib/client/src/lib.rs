//! HTTP transport for the credit platform's REST API.
//!
//! One [`ApiClient`] holds the base URL and the token source and is shared by
//! every domain service. Each call is a single round trip: no retries, no
//! caching. Responses are `{ data: T }` envelopes; `data` is unwrapped and
//! every failure is normalized into one [`ApiError`].
//!
//! ```ignore
//! use credit_client::{ApiClient, StaticToken};
//!
//! let client = ApiClient::new("https://credit.example.com", Arc::new(StaticToken::new(jwt)));
//! let roles: Vec<String> = client.get("/api/admin/roles/available").await?;
//! ```

pub mod envelope;
pub mod error;
pub mod token;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use envelope::{Envelope, Page, PageRequest};
pub use error::{ApiError, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use token::{NoAuth, StaticToken, TokenSource};

/// Shared, configured HTTP transport.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    /// Same client with a per-request timeout. A timed-out request counts as
    /// "no response received".
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ApiError> {
        self.http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(e.to_string()))?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {path}` and unwrap `data`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.get(self.url(path));
        self.execute("GET", path, req).await
    }

    /// `GET {path}?{query}` and unwrap `data`.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.http.get(self.url(path)).query(query);
        self.execute("GET", path, req).await
    }

    /// `POST {path}` with a JSON body and unwrap `data`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.url(path)).json(body);
        self.execute("POST", path, req).await
    }

    async fn authed(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ApiError> {
        match self.token_source.token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let result = self.round_trip(builder).await;
        match &result {
            Ok(_) => tracing::debug!(method, path, "api call ok"),
            Err(e) => tracing::debug!(method, path, error = ?e, "api call failed"),
        }
        result
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let builder = self.authed(builder).await?;
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = resp.status().as_u16();
        let success = resp.status().is_success();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::unexpected(e.to_string()))?;

        if !success {
            return Err(ApiError::from_response(status, &body));
        }

        let envelope: Envelope<T> = serde_json::from_slice(&body)
            .map_err(|e| ApiError::unexpected(format!("response body: {}", e)))?;
        envelope.into_data(status)
    }
}
