//! Auth API
//!
//! Endpoint wrappers for login, registration, token refresh, and profile
//! lookup.

use serde::{Deserialize, Serialize};

use crate::api::http::ApiClient;
use crate::error::ApiError;

/// Token pair issued on login and refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authenticated user profile. Held in memory only; on reload it is
/// re-fetched from the stored token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Auth endpoints.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        self.client
            .post(
                "/api/auth/login",
                &LoginRequest { email, password },
                "Failed to log in",
            )
            .await
    }

    /// Create a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        self.client
            .post(
                "/api/auth/register",
                &RegisterRequest {
                    username,
                    email,
                    password,
                },
                "Failed to register",
            )
            .await
    }

    /// Confirm an email address with the token from the verification mail.
    pub async fn verify_email(&self, token: &str) -> Result<(), ApiError> {
        let path = format!("/api/auth/verify-email?token={}", token);
        self.client.post_unit(&path, "Failed to verify email").await
    }

    /// Exchange a refresh token for a fresh pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.client
            .post(
                "/api/auth/refresh",
                &RefreshRequest { refresh_token },
                "Failed to refresh session",
            )
            .await
    }

    /// Fetch the profile of the authenticated user.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.client
            .get("/api/users/profile", "Failed to fetch profile")
            .await
    }
}
