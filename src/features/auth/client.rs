//! Client for the auth API endpoints. `AuthApi` is the seam flows are written
//! against; `HttpAuthClient` is the real implementation. Each call performs
//! exactly one HTTP request and yields exactly one result.

use crate::app_lib::{ApiClient, AppConfig, AppError};
use crate::features::auth::types::{
    AuthResponse, DefaultResponse, LoginPayload, LoginRequest, RawAuthResponse,
    RefreshTokenPayload, SignupPayload, SignupRequest, UserInfo,
};
use std::future::Future;

/// Header carrying the access token on authenticated calls.
pub const ACCESS_TOKEN_HEADER: &str = "x-auth";

/// Authentication endpoints used by forms and the session lifecycle.
pub trait AuthApi {
    /// `POST /signup`.
    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<AuthResponse, AppError>>;

    /// `POST /login`.
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, AppError>>;

    /// `POST /refresh`, exchanging a refresh token for a new pair.
    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<AuthResponse, AppError>>;

    /// `POST /logout`, invalidating the refresh token server-side.
    fn logout(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<DefaultResponse, AppError>>;

    /// `GET /users` for the owner of `access_token`.
    fn user_info(&self, access_token: &str) -> impl Future<Output = Result<UserInfo, AppError>>;
}

/// `AuthApi` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    api: ApiClient,
}

impl HttpAuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Builds a client against the configured API base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        ApiClient::new(config).map(Self::new)
    }
}

impl AuthApi for HttpAuthClient {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, AppError> {
        let raw: RawAuthResponse = self
            .api
            .post_json("/signup", &SignupPayload::from(request), &[])
            .await?;
        Ok(raw.into())
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        let raw: RawAuthResponse = self
            .api
            .post_json("/login", &LoginPayload::from(request), &[])
            .await?;
        Ok(raw.into())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AppError> {
        let raw: RawAuthResponse = self
            .api
            .post_json("/refresh", &RefreshTokenPayload { refresh_token }, &[])
            .await?;
        Ok(raw.into())
    }

    async fn logout(&self, refresh_token: &str) -> Result<DefaultResponse, AppError> {
        self.api
            .post_json("/logout", &RefreshTokenPayload { refresh_token }, &[])
            .await
    }

    async fn user_info(&self, access_token: &str) -> Result<UserInfo, AppError> {
        self.api
            .get_json("/users", &[(ACCESS_TOKEN_HEADER, access_token)])
            .await
    }
}
