//! REST calls against the backend's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` in [`HttpAuthApi`].
//! Natively the [`AuthApi`] trait is implemented by test fakes, so the
//! session flow can be exercised without a browser.
//!
//! No timeout or retry is applied; calls rely on the browser's fetch defaults.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Credentials, NewUser, TokenResponse, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// The three backend calls the session flow depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/token` with form-encoded credentials.
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError>;

    /// `POST /auth/users/` with a JSON body.
    async fn create_user(&self, user: &NewUser) -> Result<UserProfile, ApiError>;

    /// `GET /auth/users/me/` authenticated with the bearer `token`.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;
}

/// `gloo-net` implementation targeting the URLs from [`crate::SessionConfig`].
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    token_url: String,
    users_url: String,
    profile_url: String,
}

#[cfg(feature = "hydrate")]
impl HttpAuthApi {
    pub fn new(config: &crate::SessionConfig) -> Self {
        Self { token_url: config.token_url(), users_url: config.users_url(), profile_url: config.profile_url() }
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    super::error::decode_response(status, &body)
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let resp = gloo_net::http::Request::post(&self.token_url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(credentials.form_body())
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        let resp = gloo_net::http::Request::post(&self.users_url)
            .json(user)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let resp = gloo_net::http::Request::get(&self.profile_url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_response(resp).await
    }
}
