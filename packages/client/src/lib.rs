//! AgentDeck Client Library
//!
//! This crate provides the typed client layer for the AgentDeck platform:
//! session and token management, route guarding, and HTTP API clients for
//! agent management and bot deployments.

pub mod api;
pub mod domain;
pub mod error;
pub mod session;

// Re-exports for convenience
pub use api::agents::AgentApi;
pub use api::auth::{AuthApi, User};
pub use api::deploy::{DeployApi, DeployChannel};
pub use api::http::ApiClient;
pub use domain::agent::AgentProfile;
pub use domain::transform::{derive_capabilities, transform_agent};
pub use error::ApiError;
pub use session::auth::AuthSession;
pub use session::guard::{RouteAccess, RouteGuard};
pub use session::storage::{MemoryStorage, SessionStorage};
pub use session::token::{TokenClaims, TokenStore};
