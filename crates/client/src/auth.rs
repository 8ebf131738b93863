//! Admin authentication calls.

use folio_core::{AdminProfile, LoginRequest, LoginResponse};

use crate::error::ClientResult;
use crate::http::ApiClient;

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /admin/login`. On success the token and profile are persisted.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.client.post_json("/admin/login", request).await?;
        self.client.session().start(&response)?;
        tracing::info!(admin = %response.admin.email, "admin signed in");
        Ok(response)
    }

    /// Forget the stored session. No network call is made.
    pub fn logout(&self) -> ClientResult<()> {
        self.client.session().logout()?;
        tracing::info!("admin signed out");
        Ok(())
    }

    /// `GET /admin/profile`
    pub async fn profile(&self) -> ClientResult<AdminProfile> {
        self.client.get_json("/admin/profile").await
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    /// The profile stored at login, without asking the backend.
    pub fn current_user(&self) -> Option<AdminProfile> {
        self.client.session().current_user()
    }
}
