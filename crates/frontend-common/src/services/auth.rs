//! Authentication API service

use moodlog_http::ApiError;
use moodlog_http::types::User;

use crate::client::{api, watch_session};

/// Authentication API service
#[derive(Clone)]
pub struct AuthService;

impl AuthService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Sign in with username and password. The client persists the issued
    /// credential pair on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let granted = api()?.login(username, password).await?;
        Ok(granted.user)
    }

    /// Create a named account.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, ApiError> {
        let granted = api()?.register(username, password, display_name).await?;
        Ok(granted.user)
    }

    /// Create an anonymous account with just a password and display name.
    pub async fn register_anonymous(
        &self,
        password: &str,
        display_name: &str,
    ) -> Result<User, ApiError> {
        let granted = api()?.register_anonymous(password, display_name).await?;
        Ok(granted.user)
    }

    /// Revoke the session server-side and clear the stored pair.
    pub async fn logout(&self) -> Result<(), ApiError> {
        api()?.logout().await
    }

    /// Profile of the signed-in user.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        api()?.profile().await.map_err(watch_session)
    }

    pub async fn update_profile(&self, display_name: &str) -> Result<User, ApiError> {
        api()?.update_profile(display_name).await.map_err(watch_session)
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
