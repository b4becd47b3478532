//! HTTP core
//!
//! Request plumbing shared by the API clients: base URL joining, bearer
//! header construction from the token store, and normalization of every
//! failure into [`ApiError`].

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::session::token::TokenStore;

/// Build request headers from the current token store state.
///
/// Pure per-call construction: when a token is stored the bearer header
/// is attached, otherwise the request goes out unauthenticated and the
/// backend is expected to reject it.
pub fn auth_headers(tokens: &TokenStore) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(token) = tokens.access_token() {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
            headers.insert(AUTHORIZATION, value);
        }
    }
    headers
}

/// HTTP client shared by the typed API surfaces.
///
/// Single-attempt semantics throughout: no retries, no deduplication of
/// in-flight calls, no cancellation.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, url)
            .headers(auth_headers(&self.tokens))
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await;
        handle(response, fallback).await
    }

    /// POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path).json(body).send().await;
        handle(response, fallback).await
    }

    /// POST request without a body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path).send().await;
        handle(response, fallback).await
    }

    /// POST request without a body, discarding the response payload.
    pub async fn post_unit(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let response = self.request(Method::POST, path).send().await;
        check_status(response, fallback).await
    }

    /// PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PUT, path).json(body).send().await;
        handle(response, fallback).await
    }

    /// DELETE request, discarding the response payload.
    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await;
        check_status(response, fallback).await
    }

    /// PATCH request carrying a multipart form instead of JSON.
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::PATCH, path)
            .multipart(form)
            .send()
            .await;
        handle(response, fallback).await
    }
}

async fn handle<T: DeserializeOwned>(
    response: Result<Response, reqwest::Error>,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = match response {
        Ok(response) => response,
        Err(err) => {
            debug!(error = %err, "no response received");
            return Err(ApiError::transport(fallback));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(reject(status, response, fallback).await);
    }

    response.json().await.map_err(|err| {
        debug!(error = %err, "undecodable response body");
        ApiError::backend(status.as_u16(), fallback)
    })
}

async fn check_status(
    response: Result<Response, reqwest::Error>,
    fallback: &str,
) -> Result<(), ApiError> {
    let response = match response {
        Ok(response) => response,
        Err(err) => {
            debug!(error = %err, "no response received");
            return Err(ApiError::transport(fallback));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(reject(status, response, fallback).await);
    }
    Ok(())
}

async fn reject(status: StatusCode, response: Response, fallback: &str) -> ApiError {
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    ApiError::backend(
        status.as_u16(),
        detail.unwrap_or_else(|| fallback.to_string()),
    )
}

/// Error envelope the backend attaches to rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}
