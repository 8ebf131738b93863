//! Client error model.

use reqwest::StatusCode;
use thiserror::Error;

use folio_auth::StorageError;
use folio_core::DomainError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The client cannot build a request URL (e.g. same-origin base without an origin).
    #[error("client configuration error: {0}")]
    Config(String),

    /// The form was rejected before anything was sent.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The backend rejected the session token (HTTP 401).
    ///
    /// By the time the caller sees this, the stored token has been cleared and
    /// the session-expired event has been published.
    #[error("unauthorized: {}", .message.as_deref().unwrap_or("session rejected"))]
    Unauthorized { message: Option<String> },

    /// Any other non-success status. `message` is the backend's `error` string when present.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's own explanation, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Unauthorized { message } | ClientError::Api { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Text for an inline banner: validation and backend messages verbatim,
    /// `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(err) => err.user_message(),
            _ => self.server_message().unwrap_or(fallback).to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
