//! Domain error model.

use thiserror::Error;

/// Result type used across the content model.
pub type DomainResult<T> = Result<T, DomainError>;

/// Content-level error.
///
/// Covers deterministic failures that can be detected without talking to the
/// backend: form validation, malformed identifiers and records missing from
/// the loaded list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A form failed client-side validation. The message is shown to the user as is.
    #[error("{0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record is not present in the loaded list.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Message suitable for an inline form banner.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
