//! `folio-client`: HTTP access to the portfolio REST API.
//!
//! - [`url`]: API base-URL resolution and normalization
//! - [`config`]: environment-driven client configuration
//! - [`http`]: the `reqwest` wrapper that attaches the session token and
//!   reacts to rejected sessions
//! - [`auth`] / [`content`]: one thin function per REST operation

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod url;

pub use auth::AuthService;
pub use config::ClientConfig;
pub use content::{Acknowledgement, ContentService};
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use url::{build_api_url, normalize_api_base_url};
