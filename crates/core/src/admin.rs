//! Admin identity and login exchange.

use serde::{Deserialize, Serialize};

use crate::id::ContentId;

/// Display copy of the signed-in admin.
///
/// Cached next to the session token purely for rendering; never revalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: ContentId,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /admin/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: bearer token plus the admin it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}
