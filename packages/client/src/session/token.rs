//! Token store
//!
//! Wraps session storage for the bearer/refresh token pair and exposes
//! expiry inspection over the access token's payload segment.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::session::storage::{MemoryStorage, SessionStorage};

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Claims carried in the access token payload.
///
/// Unknown claims are preserved in `extra` so the full set round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Subject (user id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Role claim, when the backend issues one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Session-scoped holder of the bearer/refresh token pair.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by a process-lifetime in-memory map.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Current bearer token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY)
    }

    /// Current refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    /// Store a freshly issued token pair.
    pub fn set(&self, access: &str, refresh: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access);
        self.storage.set(REFRESH_TOKEN_KEY, refresh);
    }

    /// Remove both tokens. A stale credential must never survive a clear.
    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }

    /// Decode the access token's payload segment.
    ///
    /// Returns `None` for a missing token, a token without the
    /// three-segment shape, or an undecodable payload. This path runs on
    /// every guarded navigation and must never fail loudly.
    pub fn decode(&self) -> Option<TokenClaims> {
        let token = self.access_token()?;
        decode_claims(&token)
    }

    /// Whether a stored token exists and has not expired.
    ///
    /// Re-reads and re-decodes on every call; expiry is compared against
    /// the wall clock at call time.
    pub fn is_valid(&self) -> bool {
        match self.decode() {
            Some(claims) => claims.exp * 1000 > Utc::now().timestamp_millis(),
            None => false,
        }
    }
}

fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(segments[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a structurally valid unsigned token around `payload`.
    pub fn encode_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.signature", header, body)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::encode_token;
    use super::*;
    use serde_json::json;

    fn store_with(token: Option<&str>) -> TokenStore {
        let store = TokenStore::in_memory();
        if let Some(token) = token {
            store.set(token, "refresh");
        }
        store
    }

    #[test]
    fn test_valid_when_exp_in_future() {
        let exp = Utc::now().timestamp() + 3600;
        let store = store_with(Some(&encode_token(&json!({ "exp": exp }))));
        assert!(store.is_valid());
    }

    #[test]
    fn test_invalid_when_expired() {
        let exp = Utc::now().timestamp() - 3600;
        let store = store_with(Some(&encode_token(&json!({ "exp": exp }))));
        assert!(!store.is_valid());
    }

    #[test]
    fn test_invalid_for_malformed_tokens() {
        assert!(!store_with(Some("not-a-jwt")).is_valid());
        assert!(!store_with(Some("two.segments")).is_valid());
        assert!(!store_with(Some("a.!!!not-base64!!!.c")).is_valid());
    }

    #[test]
    fn test_invalid_when_absent() {
        assert!(!store_with(None).is_valid());
    }

    #[test]
    fn test_decode_returns_full_payload() {
        let exp = Utc::now().timestamp() + 60;
        let payload = json!({ "exp": exp, "sub": "7", "role": "admin" });
        let store = store_with(Some(&encode_token(&payload)));

        let claims = store.decode().unwrap();
        assert_eq!(claims.exp, exp);
        assert_eq!(claims.sub.as_deref(), Some("7"));
        assert_eq!(claims.role.as_deref(), Some("admin"));

        // Round-trip: re-encoding the claims yields the original payload.
        assert_eq!(serde_json::to_value(&claims).unwrap(), payload);
    }

    #[test]
    fn test_decode_preserves_unknown_claims() {
        let payload = json!({ "exp": 1, "iss": "agentdeck" });
        let store = store_with(Some(&encode_token(&payload)));
        let claims = store.decode().unwrap();
        assert_eq!(
            claims.extra.get("iss"),
            Some(&serde_json::Value::String("agentdeck".to_string()))
        );
    }

    #[test]
    fn test_decode_none_for_malformed_or_absent() {
        assert!(store_with(Some("garbage")).decode().is_none());
        assert!(store_with(None).decode().is_none());
    }

    #[test]
    fn test_clear_removes_both_tokens() {
        let store = TokenStore::in_memory();
        store.set("access", "refresh");
        store.clear();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
