//! API module
//!
//! HTTP plumbing and the typed clients for each backend surface.

pub mod agents;
pub mod auth;
pub mod deploy;
pub mod http;
