//! Session module
//!
//! Owns the client-side authentication lifecycle: credential storage,
//! token inspection, the process-wide auth session, and route gating.

pub mod auth;
pub mod guard;
pub mod storage;
pub mod token;
