//! Auth session
//!
//! Process-wide authentication state. Consumers receive a handle to one
//! session instance; there is no ambient global to reach into.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::auth::{AuthApi, User};
use crate::error::ApiError;
use crate::session::token::TokenStore;

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    is_authenticated: bool,
}

/// Authentication session controller.
///
/// `user` and `is_authenticated` are only ever written together, under a
/// single lock acquisition, so readers never observe a half-updated
/// session.
#[derive(Clone)]
pub struct AuthSession {
    api: AuthApi,
    tokens: TokenStore,
    state: Arc<RwLock<SessionState>>,
}

impl AuthSession {
    pub fn new(api: AuthApi, tokens: TokenStore) -> Self {
        Self {
            api,
            tokens,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Current user, if authenticated.
    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    /// Atomic read of both session fields.
    pub fn snapshot(&self) -> (Option<User>, bool) {
        let state = self.state.read();
        (state.user.clone(), state.is_authenticated)
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Log in and resolve the user profile.
    ///
    /// All-or-nothing: on any failure the session stays logged out and no
    /// partially written tokens survive. The profile fetch runs strictly
    /// after the token pair is persisted. Single attempt, no retries.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let pair = self.api.login(email, password).await?;
        self.tokens.set(&pair.access_token, &pair.refresh_token);

        match self.api.profile().await {
            Ok(user) => {
                self.set_session(Some(user.clone()));
                info!(username = %user.username, "logged in");
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "profile fetch after login failed, rolling back");
                self.tokens.clear();
                self.set_session(None);
                Err(err)
            }
        }
    }

    /// Drop credentials and session state. Safe to call when already
    /// logged out.
    pub fn logout(&self) {
        self.tokens.clear();
        self.set_session(None);
        info!("logged out");
    }

    /// Exchange the stored refresh token for a fresh pair.
    ///
    /// A refresh token the backend no longer accepts is unusable; the
    /// session falls back to logged out rather than keeping it around.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let Some(refresh_token) = self.tokens.refresh_token() else {
            return Err(ApiError::transport("No refresh token stored"));
        };

        match self.api.refresh(&refresh_token).await {
            Ok(pair) => {
                self.tokens.set(&pair.access_token, &pair.refresh_token);
                debug!("session refreshed");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "refresh rejected, dropping session");
                self.tokens.clear();
                self.set_session(None);
                Err(err)
            }
        }
    }

    /// Restore the session at startup from a previously stored token.
    ///
    /// Returns whether the session ended up authenticated. A stored token
    /// that cannot resolve a profile is cleared on the spot.
    pub async fn rehydrate(&self) -> bool {
        if !self.tokens.is_valid() {
            self.set_session(None);
            return false;
        }

        match self.api.profile().await {
            Ok(user) => {
                info!(username = %user.username, "session restored");
                self.set_session(Some(user));
                true
            }
            Err(err) => {
                warn!(error = %err, "stored token unusable, clearing");
                self.tokens.clear();
                self.set_session(None);
                false
            }
        }
    }

    fn set_session(&self, user: Option<User>) {
        let mut state = self.state.write();
        state.is_authenticated = user.is_some();
        state.user = user;
    }
}
