//! Route guard
//!
//! Stateless gate in front of protected surfaces. Token validity is
//! consulted on every check so an expiry between navigations is caught.

use tracing::debug;

use crate::session::token::TokenStore;

/// Destination for unauthenticated navigation.
pub const SIGN_IN_ROUTE: &str = "/signin";

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the protected content.
    Allow,
    /// Send the caller to the sign-in entry point. The attempted
    /// destination is discarded.
    Redirect { to: &'static str },
}

#[derive(Clone)]
pub struct RouteGuard {
    tokens: TokenStore,
}

impl RouteGuard {
    pub fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }

    /// Gate a navigation target.
    pub fn check(&self, route: &str) -> RouteAccess {
        if self.tokens.is_valid() {
            RouteAccess::Allow
        } else {
            debug!(route = %route, "unauthenticated navigation, redirecting");
            RouteAccess::Redirect { to: SIGN_IN_ROUTE }
        }
    }
}
