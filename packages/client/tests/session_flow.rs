//! Login, logout, refresh, and rehydration flows against a stubbed
//! backend.

mod common;

use agentdeck_client::{ApiClient, AuthApi, AuthSession, TokenStore};
use chrono::Utc;
use common::{json_response, serve, token_with_exp};

const PROFILE_BODY: &str = r#"{"id":1,"username":"testuser","email":"test@email.com"}"#;
const TOKENS_BODY: &str = r#"{"access_token":"access123","refresh_token":"refresh123"}"#;

fn session_against(base_url: &str) -> (AuthSession, TokenStore) {
    let tokens = TokenStore::in_memory();
    let client = ApiClient::new(base_url, tokens.clone());
    let session = AuthSession::new(AuthApi::new(client), tokens.clone());
    (session, tokens)
}

#[tokio::test]
async fn test_login_stores_tokens_and_user() {
    let server = serve(vec![
        json_response(200, "OK", TOKENS_BODY),
        json_response(200, "OK", PROFILE_BODY),
    ]);
    let (session, tokens) = session_against(&server.base_url);

    let user = session
        .login("test@email.com", "password123")
        .await
        .expect("login succeeds");

    assert_eq!(user.email, "test@email.com");
    assert!(session.is_authenticated());
    assert_eq!(session.user().unwrap().username, "testuser");
    assert_eq!(tokens.access_token().as_deref(), Some("access123"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh123"));

    let login_request = server.request();
    assert!(login_request.starts_with("POST /api/auth/login"));

    // The profile fetch is sequenced after token persistence and carries
    // the freshly stored bearer token.
    let profile_request = server.request();
    assert!(profile_request.starts_with("GET /api/users/profile"));
    assert!(profile_request.contains("authorization: Bearer access123"));
}

#[tokio::test]
async fn test_login_rejected_leaves_session_logged_out() {
    let server = serve(vec![json_response(
        401,
        "Unauthorized",
        r#"{"detail":"Invalid credentials"}"#,
    )]);
    let (session, tokens) = session_against(&server.base_url);

    let err = session
        .login("test@email.com", "wrong")
        .await
        .expect_err("login rejected");

    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Invalid credentials");
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(tokens.access_token().is_none());
    assert!(tokens.refresh_token().is_none());
}

#[tokio::test]
async fn test_login_rolls_back_on_profile_failure() {
    let server = serve(vec![
        json_response(200, "OK", TOKENS_BODY),
        json_response(500, "Internal Server Error", "{}"),
    ]);
    let (session, tokens) = session_against(&server.base_url);

    session
        .login("test@email.com", "password123")
        .await
        .expect_err("profile fetch fails");

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(
        tokens.access_token().is_none(),
        "partially written tokens must not linger"
    );
}

#[tokio::test]
async fn test_rehydrate_restores_user_from_valid_token() {
    let server = serve(vec![json_response(200, "OK", PROFILE_BODY)]);
    let (session, tokens) = session_against(&server.base_url);
    tokens.set(&token_with_exp(Utc::now().timestamp() + 3600), "refresh123");

    assert!(session.rehydrate().await);

    let (user, authenticated) = session.snapshot();
    assert!(authenticated);
    assert_eq!(user.unwrap().email, "test@email.com");
}

#[tokio::test]
async fn test_rehydrate_clears_unusable_token() {
    let server = serve(vec![json_response(
        401,
        "Unauthorized",
        r#"{"detail":"Token revoked"}"#,
    )]);
    let (session, tokens) = session_against(&server.base_url);
    tokens.set(&token_with_exp(Utc::now().timestamp() + 3600), "refresh123");

    assert!(!session.rehydrate().await);
    assert!(!session.is_authenticated());
    assert!(tokens.access_token().is_none());
}

#[tokio::test]
async fn test_rehydrate_skips_fetch_for_expired_token() {
    // No stub: an invalid token must never reach the network.
    let (session, tokens) = session_against("http://127.0.0.1:9");
    tokens.set(&token_with_exp(Utc::now().timestamp() - 3600), "refresh123");

    assert!(!session.rehydrate().await);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (session, tokens) = session_against("http://127.0.0.1:9");
    tokens.set("access", "refresh");

    session.logout();
    assert!(!session.is_authenticated());
    assert!(tokens.access_token().is_none());

    session.logout();
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_refresh_rotates_token_pair() {
    let server = serve(vec![json_response(
        200,
        "OK",
        r#"{"access_token":"access2","refresh_token":"refresh2"}"#,
    )]);
    let (session, tokens) = session_against(&server.base_url);
    tokens.set("access1", "refresh1");

    session.refresh().await.expect("refresh succeeds");

    assert_eq!(tokens.access_token().as_deref(), Some("access2"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh2"));
    assert!(server.request().starts_with("POST /api/auth/refresh"));
}

#[tokio::test]
async fn test_refresh_failure_drops_session() {
    let server = serve(vec![json_response(
        401,
        "Unauthorized",
        r#"{"detail":"Refresh token expired"}"#,
    )]);
    let (session, tokens) = session_against(&server.base_url);
    tokens.set("access1", "refresh1");

    let err = session.refresh().await.expect_err("refresh rejected");
    assert_eq!(err.message, "Refresh token expired");
    assert!(tokens.access_token().is_none());
    assert!(!session.is_authenticated());
}
