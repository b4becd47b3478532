//! Agent API
//!
//! Typed wrappers over the agent CRUD, chat, and tuning endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::http::ApiClient;
use crate::error::ApiError;

/// Agent record as the backend ships it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: i64,
    pub creator_id: i64,
    /// Display name. The backend reuses its original prompt field for it.
    pub prompt: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_memory_length: Option<u32>,
    #[serde(default)]
    pub tools_enabled: Option<bool>,
    #[serde(default)]
    pub deep_research_enabled: Option<bool>,
    #[serde(default)]
    pub usage_count: Option<u64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Payload for creating an agent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAgentRequest {
    /// Display name.
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_enabled: Option<bool>,
}

/// Payload for updating an agent. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAgentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Reply from the one-shot chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub conversation_id: Option<i64>,
}

/// Stored conversation summary.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationSummary {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Voice support reported by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceCapabilities {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub voices: Vec<String>,
}

/// Agent endpoints.
#[derive(Clone)]
pub struct AgentApi {
    client: ApiClient,
}

impl AgentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &CreateAgentRequest) -> Result<AgentRecord, ApiError> {
        self.client
            .post("/api/agents/", request, "Failed to create agent")
            .await
    }

    pub async fn list(&self) -> Result<Vec<AgentRecord>, ApiError> {
        self.client
            .get("/api/agents/", "Failed to fetch agents")
            .await
    }

    pub async fn get(&self, id: i64) -> Result<AgentRecord, ApiError> {
        self.client
            .get(&format!("/api/agents/{}", id), "Failed to fetch agent")
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateAgentRequest,
    ) -> Result<AgentRecord, ApiError> {
        self.client
            .put(
                &format!("/api/agents/{}", id),
                request,
                "Failed to update agent",
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/api/agents/{}", id), "Failed to delete agent")
            .await
    }

    /// One-shot chat with an agent.
    pub async fn chat(&self, id: i64, message: &str) -> Result<ChatReply, ApiError> {
        self.client
            .post(
                &format!("/api/agents/{}/chat-simple", id),
                &ChatRequest { message },
                "Failed to send message",
            )
            .await
    }

    pub async fn conversations(
        &self,
        id: i64,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<ConversationSummary>, ApiError> {
        let path = format!(
            "/api/agents/{}/conversations?skip={}&limit={}",
            id, skip, limit
        );
        self.client
            .get(&path, "Failed to fetch conversations")
            .await
    }

    /// Toggle deep research. The backend takes this one endpoint as a
    /// multipart form rather than JSON; auth and error handling are
    /// otherwise identical.
    pub async fn toggle_deep_research(
        &self,
        id: i64,
        enabled: bool,
        threshold: Option<f64>,
        max_chunks: Option<u32>,
    ) -> Result<AgentRecord, ApiError> {
        let mut form = reqwest::multipart::Form::new().text("enabled", enabled.to_string());
        if let Some(threshold) = threshold {
            form = form.text("threshold", threshold.to_string());
        }
        if let Some(max_chunks) = max_chunks {
            form = form.text("max_chunks", max_chunks.to_string());
        }

        self.client
            .patch_multipart(
                &format!("/api/agents/{}/deep_research", id),
                form,
                "Failed to toggle deep research",
            )
            .await
    }

    pub async fn voice_capabilities(&self) -> Result<VoiceCapabilities, ApiError> {
        self.client
            .get(
                "/api/agents/voice/capabilities",
                "Failed to fetch voice capabilities",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_record_tolerates_sparse_payload() {
        let record: AgentRecord =
            serde_json::from_str(r#"{"id":7,"creator_id":1,"prompt":"Helper"}"#).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.prompt, "Helper");
        assert_eq!(record.temperature, None);
        assert_eq!(record.tools_enabled, None);
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let request = UpdateAgentRequest {
            prompt: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"prompt":"Renamed"}"#);
    }
}
