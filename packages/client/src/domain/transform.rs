//! Wire→domain transformation
//!
//! Pure mapping from the backend agent record to the UI profile. Every
//! nested group is always populated. The analytics timing and success
//! constants are placeholders the backend does not compute yet; they
//! stay literal until that contract changes.

use crate::api::agents::AgentRecord;
use crate::domain::agent::{
    AgentAnalytics, AgentProfile, Capability, CollaborationConfig, IntegrationPermissions,
    MemoryConfig, MemoryLevel, PersonalityProfile, VoiceConfig,
};

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MEMORY_GB: u32 = 10;
const RETENTION_DAYS: u32 = 60;
const FORMALITY: u8 = 80;
const EMPATHY: u8 = 60;
const DEFAULT_SATISFACTION: u8 = 85;
const AVERAGE_RESPONSE_TIME_MS: u32 = 850;
const SUCCESS_RATE: u8 = 88;

/// Derive the capability list from the wire flags.
pub fn derive_capabilities(record: &AgentRecord) -> Vec<Capability> {
    let mut capabilities = Vec::new();
    if record.tools_enabled.unwrap_or(false) {
        capabilities.push(Capability::Memory);
    }
    if record.deep_research_enabled.unwrap_or(false) {
        capabilities.push(Capability::Research);
    }
    capabilities.push(Capability::Analytics);
    capabilities
}

/// Map a backend agent record to the UI profile.
pub fn transform_agent(record: &AgentRecord) -> AgentProfile {
    let tools_enabled = record.tools_enabled.unwrap_or(false);
    let memory_length = record.max_memory_length.unwrap_or(DEFAULT_MEMORY_GB);

    AgentProfile {
        id: record.id,
        name: record.prompt.clone(),
        description: record.description.clone().unwrap_or_default(),
        model: record.model.clone().unwrap_or_default(),
        system_prompt: record.system_prompt.clone().unwrap_or_default(),
        memory: MemoryConfig {
            level: if memory_length > 20 {
                MemoryLevel::Advanced
            } else {
                MemoryLevel::Standard
            },
            size: format!("{}GB", memory_length),
            retention_days: RETENTION_DAYS,
        },
        // Voice enablement is resolved from the capability lookup, not
        // from the record.
        voice: VoiceConfig {
            enabled: false,
            voice: "alloy".to_string(),
            rate: 1.0,
            language: "en".to_string(),
        },
        collaboration: CollaborationConfig {
            enabled: tools_enabled,
        },
        personality: PersonalityProfile {
            creativity: (record.temperature.unwrap_or(DEFAULT_TEMPERATURE) * 100.0).round() as u8,
            formality: FORMALITY,
            empathy: EMPATHY,
        },
        integrations: IntegrationPermissions {
            tools: tools_enabled,
            deep_research: record.deep_research_enabled.unwrap_or(false),
        },
        capabilities: derive_capabilities(record),
        analytics: AgentAnalytics {
            total_interactions: record.usage_count.unwrap_or(0),
            satisfaction_score: record
                .rating
                .map(|rating| (rating * 20.0).round() as u8)
                .unwrap_or(DEFAULT_SATISFACTION),
            average_response_time_ms: AVERAGE_RESPONSE_TIME_MS,
            success_rate: SUCCESS_RATE,
        },
        created_at: record.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AgentRecord {
        AgentRecord {
            id: 1,
            creator_id: 2,
            prompt: "Research Assistant".to_string(),
            description: Some("Finds things".to_string()),
            created_at: None,
            system_prompt: Some("You are helpful".to_string()),
            temperature: Some(0.42),
            model: Some("gpt-4".to_string()),
            max_memory_length: Some(32),
            tools_enabled: Some(true),
            deep_research_enabled: Some(true),
            usage_count: Some(42),
            rating: Some(4.5),
        }
    }

    #[test]
    fn test_capabilities_follow_flags() {
        let profile = transform_agent(&record());
        assert_eq!(
            profile.capabilities,
            vec![Capability::Memory, Capability::Research, Capability::Analytics]
        );

        let mut bare = record();
        bare.tools_enabled = Some(false);
        bare.deep_research_enabled = None;
        assert_eq!(derive_capabilities(&bare), vec![Capability::Analytics]);
    }

    #[test]
    fn test_memory_tier_and_size() {
        let profile = transform_agent(&record());
        assert_eq!(profile.memory.level, MemoryLevel::Advanced);
        assert_eq!(profile.memory.size, "32GB");
        assert_eq!(profile.memory.retention_days, 60);

        let mut small = record();
        small.max_memory_length = None;
        let profile = transform_agent(&small);
        assert_eq!(profile.memory.level, MemoryLevel::Standard);
        assert_eq!(profile.memory.size, "10GB");
    }

    #[test]
    fn test_boundary_memory_length_stays_standard() {
        let mut edge = record();
        edge.max_memory_length = Some(20);
        assert_eq!(transform_agent(&edge).memory.level, MemoryLevel::Standard);

        edge.max_memory_length = Some(21);
        assert_eq!(transform_agent(&edge).memory.level, MemoryLevel::Advanced);
    }

    #[test]
    fn test_personality_sliders() {
        let profile = transform_agent(&record());
        assert_eq!(profile.personality.creativity, 42);
        assert_eq!(profile.personality.formality, 80);
        assert_eq!(profile.personality.empathy, 60);

        let mut untuned = record();
        untuned.temperature = None;
        assert_eq!(transform_agent(&untuned).personality.creativity, 70);
    }

    #[test]
    fn test_analytics_mapping() {
        let profile = transform_agent(&record());
        assert_eq!(profile.analytics.total_interactions, 42);
        assert_eq!(profile.analytics.satisfaction_score, 90);
        assert_eq!(profile.analytics.average_response_time_ms, 850);
        assert_eq!(profile.analytics.success_rate, 88);

        let mut unrated = record();
        unrated.rating = None;
        unrated.usage_count = None;
        let profile = transform_agent(&unrated);
        assert_eq!(profile.analytics.total_interactions, 0);
        assert_eq!(profile.analytics.satisfaction_score, 85);
    }

    #[test]
    fn test_voice_defaults_fixed() {
        let mut voiceless = record();
        voiceless.tools_enabled = Some(false);
        let profile = transform_agent(&voiceless);
        assert!(!profile.voice.enabled);
        assert_eq!(profile.voice.voice, "alloy");
        assert_eq!(profile.voice.rate, 1.0);
        assert_eq!(profile.voice.language, "en");
    }

    #[test]
    fn test_collaboration_mirrors_tools_flag() {
        let profile = transform_agent(&record());
        assert!(profile.collaboration.enabled);

        let mut no_tools = record();
        no_tools.tools_enabled = None;
        assert!(!transform_agent(&no_tools).collaboration.enabled);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(transform_agent(&record()), transform_agent(&record()));
    }
}
