//! Authentication API client methods

use super::{ApiClient, error::ApiError};
use crate::types::{
    AuthResponse, LoginRequest, ProfileResponse, RefreshRequest, RefreshResponse,
    RegisterAnonymousRequest, RegisterRequest, UpdateProfileRequest, User,
};

impl ApiClient {
    /// Log in and persist the issued credential pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let req = self.post("/auth/login").json(&LoginRequest {
            username: username.into(),
            password: password.into(),
        })?;
        let granted: AuthResponse = self.execute(req).await?;
        self.tokens().set_tokens(&granted.token, &granted.refresh_token);
        Ok(granted)
    }

    /// Create an account and persist the issued credential pair.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthResponse, ApiError> {
        let req = self.post("/auth/register").json(&RegisterRequest {
            username: username.into(),
            password: password.into(),
            display_name: display_name.into(),
        })?;
        let granted: AuthResponse = self.execute(req).await?;
        self.tokens().set_tokens(&granted.token, &granted.refresh_token);
        Ok(granted)
    }

    /// Create an anonymous account (no username) and persist the pair.
    pub async fn register_anonymous(
        &self,
        password: &str,
        display_name: &str,
    ) -> Result<AuthResponse, ApiError> {
        let req = self
            .post("/auth/register-anonymous")
            .json(&RegisterAnonymousRequest {
                password: password.into(),
                display_name: display_name.into(),
            })?;
        let granted: AuthResponse = self.execute(req).await?;
        self.tokens().set_tokens(&granted.token, &granted.refresh_token);
        Ok(granted)
    }

    /// Revoke the refresh token server-side, then drop the stored pair.
    ///
    /// Local teardown happens even when the revocation call fails; the
    /// session must not outlive an explicit logout.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if let Some(refresh_token) = self.tokens().refresh_token() {
            let req = self.post("/auth/logout").json(&RefreshRequest { refresh_token })?;
            let outcome: Result<serde_json::Value, ApiError> = self.execute(req).await;
            if let Err(error) = outcome {
                tracing::debug!(%error, "logout call failed, clearing local session anyway");
            }
        }
        self.tokens().clear();
        Ok(())
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let response: ProfileResponse = self.execute(self.get("/auth/profile")).await?;
        Ok(response.user)
    }

    /// Change the display name shown on entries and greetings.
    pub async fn update_profile(&self, display_name: &str) -> Result<User, ApiError> {
        let req = self.put("/auth/profile").json(&UpdateProfileRequest {
            display_name: display_name.into(),
        })?;
        let response: ProfileResponse = self.execute(req).await?;
        Ok(response.user)
    }

    /// Direct call to the refresh endpoint.
    ///
    /// Deliberately bypasses [`ApiClient::execute`] so a rejected refresh can
    /// never trigger another refresh.
    pub(super) async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        let url = format!("{}/auth/refresh", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&RefreshRequest {
                refresh_token: refresh_token.into(),
            })
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(error = %source, "transport failure during token refresh");
                ApiError::Network
            })?;
        Self::decode(response).await
    }
}
