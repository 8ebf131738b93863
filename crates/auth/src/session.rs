//! Auth session accessor.

use std::sync::Arc;

use folio_core::{AdminProfile, LoginResponse};

use crate::storage::{ClientStorage, StorageError};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "admin_token";
/// Storage key of the cached admin profile (JSON).
pub const USER_KEY: &str = "admin_user";

/// Reads and writes the persisted session.
///
/// Cheap to clone; all clones share the same storage.
#[derive(Clone)]
pub struct AuthSession {
    storage: Arc<dyn ClientStorage>,
}

impl AuthSession {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self { storage }
    }

    /// The stored bearer token, if any.
    ///
    /// An unreadable store is treated as signed out.
    pub fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read session token; treating as signed out");
                None
            }
        }
    }

    /// Presence of a stored token. No expiry check is made locally.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Cached profile of the signed-in admin, for display only.
    pub fn current_user(&self) -> Option<AdminProfile> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read cached admin profile");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(error = %err, "cached admin profile is malformed; ignoring");
                None
            }
        }
    }

    /// Persist a fresh login.
    pub fn start(&self, login: &LoginResponse) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, &login.token)?;

        // A profile that fails to serialize only costs us the display copy.
        match serde_json::to_string(&login.admin) {
            Ok(profile) => self.storage.set(USER_KEY, &profile)?,
            Err(err) => tracing::warn!(error = %err, "failed to cache admin profile"),
        }

        tracing::info!(admin = %login.admin.email, "session started");
        Ok(())
    }

    /// Drop the token but keep the cached profile. Idempotent.
    ///
    /// Used when the backend rejects the token.
    pub fn clear_token(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)
    }

    /// Explicit sign-out: drop token and profile. Idempotent.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        tracing::info!("session ended");
        Ok(())
    }
}

impl core::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthSession")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
