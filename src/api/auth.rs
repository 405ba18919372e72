//! Authentication endpoints

use async_trait::async_trait;
use validator::Validate;

use crate::{
    error::ApiResult,
    models::{
        response::AuthSession,
        user::{Credentials, RegisterRequest, UpdateProfileRequest, User},
    },
};

use super::ApiClient;

/// Contract the session store consumes. A trait so the store can be tested
/// against a mock backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<AuthSession>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthSession>;
    async fn sign_out(&self) -> ApiResult<()>;
    async fn fetch_profile(&self) -> ApiResult<User>;
    async fn update_profile(&self, patch: &UpdateProfileRequest) -> ApiResult<User>;
}

#[derive(Clone)]
pub struct AuthClient {
    client: ApiClient,
}

impl AuthClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn sign_in(&self, credentials: &Credentials) -> ApiResult<AuthSession> {
        credentials.validate()?;
        let session: AuthSession = self.client.post("/auth/login", credentials).await?;
        session.user.validate()?;
        Ok(session)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthSession> {
        request.validate()?;
        if request.password != request.password_confirmation {
            return Err(crate::error::ApiError::validation("Passwords do not match"));
        }
        let session: AuthSession = self.client.post("/auth/register", request).await?;
        session.user.validate()?;
        Ok(session)
    }

    async fn sign_out(&self) -> ApiResult<()> {
        self.client.post_unit("/auth/logout", &serde_json::json!({})).await
    }

    async fn fetch_profile(&self) -> ApiResult<User> {
        let user: User = self.client.get("/auth/profile").await?;
        user.validate()?;
        Ok(user)
    }

    async fn update_profile(&self, patch: &UpdateProfileRequest) -> ApiResult<User> {
        patch.validate()?;
        let user: User = self.client.put("/auth/profile", patch).await?;
        user.validate()?;
        Ok(user)
    }
}
