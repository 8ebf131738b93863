//! HTTP client wrapper.
//!
//! Every request built here goes through two interception points:
//!
//! - **outbound**: the persisted session token, if any, is attached as
//!   `Authorization: Bearer <token>`;
//! - **inbound**: a 401 clears the stored token and publishes
//!   [`SESSION_EXPIRED`] before the error is returned to the caller. Every
//!   other status is left for the caller to interpret.
//!
//! Nothing is retried.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use folio_auth::AuthSession;
use folio_events::{EventRelay, SESSION_EXPIRED};

use crate::config::{ClientConfig, ENV_ORIGIN};
use crate::error::{ClientError, ClientResult};
use crate::url::build_api_url;

/// Shared handle to the portfolio API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    session: AuthSession,
    relay: Arc<EventRelay>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: AuthSession,
        relay: Arc<EventRelay>,
    ) -> ClientResult<Self> {
        let base_url = resolve_base_url(config)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::info!(base_url = %base_url, "api client ready");

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                session,
                relay,
            }),
        })
    }

    /// Absolute, normalized API base (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn session(&self) -> &AuthSession {
        &self.inner.session
    }

    pub fn url(&self, path: &str) -> String {
        build_api_url(&self.inner.base_url, path)
    }

    /// Start a request with the session token attached when one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.inner.http.request(method, self.url(path));
        match self.inner.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request built by [`ApiClient::request`] and classify the response.
    pub async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "request failed before a response arrived");
            ClientError::Transport(err.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let message = error_message(response).await;

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ClientError::Unauthorized { message });
        }

        tracing::debug!(%status, path = %url, message = ?message, "request rejected");
        Err(ClientError::Api { status, message })
    }

    fn expire_session(&self) {
        if let Err(err) = self.inner.session.clear_token() {
            tracing::error!(error = %err, "failed to clear rejected session token");
        }
        tracing::warn!("backend rejected the session; token cleared");
        self.inner.relay.publish(SESSION_EXPIRED, None);
    }

    pub async fn get_json<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    /// GET a collection. The backend sends `null` for an empty one.
    pub async fn get_list<T>(&self, path: &str) -> ClientResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let items: Option<Vec<T>> = self.get_json(path).await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::PUT, path).json(body)).await?;
        Ok(response.json().await?)
    }

    /// PUT with no body (state transitions such as approve or mark-read).
    pub async fn put_empty<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::PUT, path)).await?;
        Ok(response.json().await?)
    }

    /// DELETE; the response body is ignored.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path).multipart(form)).await?;
        Ok(response.json().await?)
    }
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("session", &self.inner.session)
            .finish()
    }
}

/// Resolve the configured base to an absolute URL.
///
/// A same-origin base (`/api`) is joined onto the configured origin.
fn resolve_base_url(config: &ClientConfig) -> ClientResult<String> {
    let base = config.api_base_url();
    if !base.starts_with('/') {
        return Ok(base);
    }

    let origin = config.origin.as_deref().ok_or_else(|| {
        ClientError::Config(format!(
            "API base {base} is same-origin but no origin is configured (set {ENV_ORIGIN})"
        ))
    })?;

    let resolved = reqwest::Url::parse(origin)
        .and_then(|origin| origin.join(&base))
        .map_err(|e| ClientError::Config(format!("cannot resolve {base} against {origin}: {e}")))?;

    Ok(resolved.as_str().trim_end_matches('/').to_string())
}

/// Pull the backend's `{"error": "..."}` text out of a failed response.
async fn error_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: Value = serde_json::from_str(&body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
