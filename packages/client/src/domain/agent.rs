//! Domain model
//!
//! The richer agent shape the front-end operates on. Produced from the
//! wire record by [`crate::domain::transform::transform_agent`]; never
//! sent back to the backend.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Memory depth tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryLevel {
    Standard,
    Advanced,
}

impl MemoryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryLevel::Standard => "standard",
            MemoryLevel::Advanced => "advanced",
        }
    }
}

/// Agent capability surfaced in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Memory,
    Research,
    Analytics,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Memory => "memory",
            Capability::Research => "research",
            Capability::Analytics => "analytics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryConfig {
    pub level: MemoryLevel,
    /// Human-readable size, e.g. `"10GB"`.
    pub size: String,
    pub retention_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceConfig {
    pub enabled: bool,
    pub voice: String,
    pub rate: f64,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollaborationConfig {
    pub enabled: bool,
}

/// Personality sliders on 0–100 scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityProfile {
    pub creativity: u8,
    pub formality: u8,
    pub empathy: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationPermissions {
    pub tools: bool,
    pub deep_research: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentAnalytics {
    pub total_interactions: u64,
    /// 0–100 score derived from the backend's 0–5 rating.
    pub satisfaction_score: u8,
    pub average_response_time_ms: u32,
    pub success_rate: u8,
}

/// UI-facing agent profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentProfile {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub model: String,
    pub system_prompt: String,
    pub memory: MemoryConfig,
    pub voice: VoiceConfig,
    pub collaboration: CollaborationConfig,
    pub personality: PersonalityProfile,
    pub integrations: IntegrationPermissions,
    pub capabilities: Vec<Capability>,
    pub analytics: AgentAnalytics,
    pub created_at: Option<DateTime<Utc>>,
}
