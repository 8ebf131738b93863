//! Client configuration, read once from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::url::normalize_api_base_url;

pub const ENV_API_URL: &str = "FOLIO_API_URL";
pub const ENV_ORIGIN: &str = "FOLIO_ORIGIN";
pub const ENV_STORAGE_PATH: &str = "FOLIO_STORAGE_PATH";
pub const ENV_TURNSTILE_SITE_KEY: &str = "FOLIO_TURNSTILE_SITE_KEY";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "FOLIO_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Raw API base URL; normalized by [`ClientConfig::api_base_url`].
    pub api_url: Option<String>,
    /// Origin the client is served from (e.g. `https://portfolio.example`).
    ///
    /// Drives the host-aware default and resolves a same-origin `/api` base.
    pub origin: Option<String>,
    /// Location of the persisted client storage file.
    pub storage_path: Option<PathBuf>,
    /// When set, the contact form requires a bot-protection token.
    pub turnstile_site_key: Option<String>,
    /// Per-request timeout; `None` keeps the HTTP library default.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let request_timeout = var(ENV_REQUEST_TIMEOUT_SECS).and_then(|raw| match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                tracing::warn!(value = %raw, "ignoring invalid {ENV_REQUEST_TIMEOUT_SECS}");
                None
            }
        });

        Self {
            api_url: var(ENV_API_URL),
            origin: var(ENV_ORIGIN),
            storage_path: var(ENV_STORAGE_PATH).map(PathBuf::from),
            turnstile_site_key: var(ENV_TURNSTILE_SITE_KEY),
            request_timeout,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Host part of the configured origin, if it parses.
    pub fn origin_host(&self) -> Option<String> {
        let origin = self.origin.as_deref()?;
        match reqwest::Url::parse(origin) {
            Ok(url) => url.host_str().map(str::to_string),
            Err(err) => {
                tracing::warn!(origin, error = %err, "ignoring unparseable origin");
                None
            }
        }
    }

    /// The normalized API base (may be a same-origin path such as `/api`).
    pub fn api_base_url(&self) -> String {
        normalize_api_base_url(self.api_url.as_deref(), self.origin_host().as_deref())
    }
}
