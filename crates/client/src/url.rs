//! API base-URL resolution.

/// Base URL used when nothing is configured and the client runs locally.
pub const LOCAL_DEV_API_URL: &str = "http://localhost:8080/api";

/// Same-origin base used when nothing is configured on a deployed host.
pub const SAME_ORIGIN_API_PATH: &str = "/api";

const API_SUFFIX: &str = "/api";

pub fn is_local_dev_host(host: &str) -> bool {
    host == "localhost" || host == "127.0.0.1"
}

/// Host-aware default: loopback API when there is no host or the host is
/// local, same-origin `/api` otherwise.
pub fn fallback_api_url(host: Option<&str>) -> &'static str {
    match host {
        Some(host) if !is_local_dev_host(host) => SAME_ORIGIN_API_PATH,
        _ => LOCAL_DEV_API_URL,
    }
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalize a configured API base URL.
///
/// - blank or missing values fall back to [`fallback_api_url`]
/// - bare hosts get an `https://` scheme; `/`-prefixed paths stay same-origin
/// - trailing slashes are stripped and exactly one `/api` suffix is ensured
pub fn normalize_api_base_url(value: Option<&str>, host: Option<&str>) -> String {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback_api_url(host));

    let with_scheme = if has_http_scheme(raw) || raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let trimmed = with_scheme.trim_end_matches('/');
    if trimmed.ends_with(API_SUFFIX) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{API_SUFFIX}")
    }
}

/// Join an endpoint path onto a normalized base, adding the leading `/` if missing.
pub fn build_api_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
