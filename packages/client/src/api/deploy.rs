//! Deployment API
//!
//! Wrappers for the Telegram, Discord, and web-app bot deployment
//! lifecycle. Deployment state is backend-owned; the client observes it
//! by polling status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::http::ApiClient;
use crate::error::ApiError;

/// Deployment target channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployChannel {
    Telegram,
    Discord,
    WebApp,
}

impl DeployChannel {
    /// URL prefix for this channel's endpoints.
    pub fn base_path(&self) -> &'static str {
        match self {
            DeployChannel::Telegram => "/api/telegram",
            DeployChannel::Discord => "/api/discord",
            DeployChannel::WebApp => "/api/web-app",
        }
    }

    /// Argument form accepted by the CLI (`telegram`, `discord`,
    /// `web-app`).
    pub fn slug(&self) -> &'static str {
        match self {
            DeployChannel::Telegram => "telegram",
            DeployChannel::Discord => "discord",
            DeployChannel::WebApp => "web-app",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeployChannel::Telegram => "Telegram",
            DeployChannel::Discord => "Discord",
            DeployChannel::WebApp => "Web App",
        }
    }

    /// Status endpoint for a deployment. The web-app channel serves
    /// status at the deployment resource itself, without a suffix.
    fn status_path(&self, id: i64) -> String {
        match self {
            DeployChannel::WebApp => format!("{}/deployments/{}", self.base_path(), id),
            _ => format!("{}/deployments/{}/status", self.base_path(), id),
        }
    }
}

impl fmt::Display for DeployChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload for deploying a bot.
#[derive(Debug, Clone, Serialize)]
pub struct DeployRequest {
    pub agent_id: i64,
    /// Bot credential for channels that need one (Telegram, Discord).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Backend-owned deployment record, mirrored per request.
#[derive(Debug, Clone, Deserialize)]
pub struct Deployment {
    pub id: i64,
    #[serde(default)]
    pub agent_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub messages_handled: u64,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Deployment endpoints.
#[derive(Clone)]
pub struct DeployApi {
    client: ApiClient,
}

impl DeployApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn deploy(
        &self,
        channel: DeployChannel,
        request: &DeployRequest,
    ) -> Result<Deployment, ApiError> {
        let path = format!("{}/deploy", channel.base_path());
        let fallback = format!("Failed to deploy {} bot", channel.label());
        self.client.post(&path, request, &fallback).await
    }

    pub async fn list(&self, channel: DeployChannel) -> Result<Vec<Deployment>, ApiError> {
        let path = format!("{}/deployments", channel.base_path());
        self.client.get(&path, "Failed to fetch deployments").await
    }

    pub async fn status(&self, channel: DeployChannel, id: i64) -> Result<Deployment, ApiError> {
        self.client
            .get(&channel.status_path(id), "Failed to fetch deployment status")
            .await
    }

    /// Stop and remove a deployment.
    pub async fn stop(&self, channel: DeployChannel, id: i64) -> Result<(), ApiError> {
        let path = format!("{}/deployments/{}", channel.base_path(), id);
        self.client.delete(&path, "Failed to stop deployment").await
    }

    pub async fn restart(&self, channel: DeployChannel, id: i64) -> Result<Deployment, ApiError> {
        let path = format!("{}/deployments/{}/restart", channel.base_path(), id);
        self.client
            .post_empty(&path, "Failed to restart deployment")
            .await
    }
}
