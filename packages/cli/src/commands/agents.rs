use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use agentdeck_client::api::agents::{CreateAgentRequest, UpdateAgentRequest};
use agentdeck_client::transform_agent;

use crate::context::Context;

#[derive(Subcommand)]
pub enum AgentCommands {
    /// List your agents
    List,

    /// Show an agent's full profile
    Inspect {
        /// Agent ID
        id: i64,
    },

    /// Create a new agent
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// System prompt
        #[arg(long)]
        system_prompt: Option<String>,

        /// Sampling temperature (0.0 - 1.0)
        #[arg(short, long)]
        temperature: Option<f64>,

        /// Model selection
        #[arg(short, long)]
        model: Option<String>,

        /// Enable tool use
        #[arg(long)]
        tools: bool,
    },

    /// Rename or retune an agent
    Update {
        /// Agent ID
        id: i64,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New sampling temperature
        #[arg(short, long)]
        temperature: Option<f64>,

        /// New model selection
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Delete an agent
    Delete {
        /// Agent ID
        id: i64,
    },

    /// Toggle deep research for an agent
    Research {
        /// Agent ID
        id: i64,

        /// Turn deep research on (omit to turn it off)
        #[arg(long)]
        enabled: bool,

        /// Relevance threshold
        #[arg(long)]
        threshold: Option<f64>,

        /// Maximum retrieved chunks
        #[arg(long)]
        max_chunks: Option<u32>,
    },

    /// Show voice capabilities
    Voice,

    /// List an agent's stored conversations
    Conversations {
        /// Agent ID
        id: i64,

        /// Number of conversations to skip
        #[arg(long, default_value = "0")]
        skip: u32,

        /// Number of conversations to fetch
        #[arg(short = 'n', long, default_value = "20")]
        limit: u32,
    },
}

pub async fn run(command: AgentCommands) -> Result<()> {
    let context = Context::load()?;
    context.require_auth("agents")?;
    let api = context.agents();

    match command {
        AgentCommands::List => {
            let agents = api.list().await?;

            if agents.is_empty() {
                println!("{}", "No agents found.".dimmed());
                return Ok(());
            }

            println!("{}", "Agents".bold());
            println!("{}", "─".repeat(60));

            for agent in &agents {
                println!(
                    "  {} {}",
                    agent.prompt.bold(),
                    format!("#{}", agent.id).dimmed()
                );
                if let Some(description) = &agent.description {
                    println!("    {}", description.dimmed());
                }
                if let Some(model) = &agent.model {
                    println!("    Model: {}", model.dimmed());
                }
                println!();
            }

            println!("{} agent(s)", agents.len());
            Ok(())
        }

        AgentCommands::Inspect { id } => {
            let record = api.get(id).await?;
            let profile = transform_agent(&record);

            println!(
                "{} {}",
                profile.name.bold(),
                format!("#{}", profile.id).dimmed()
            );
            if !profile.description.is_empty() {
                println!("  {}", profile.description.dimmed());
            }
            println!();
            if !profile.model.is_empty() {
                println!("  Model:        {}", profile.model);
            }
            println!(
                "  Memory:       {} ({}, {} day retention)",
                profile.memory.size,
                profile.memory.level.as_str(),
                profile.memory.retention_days
            );
            println!(
                "  Personality:  creativity {} / formality {} / empathy {}",
                profile.personality.creativity,
                profile.personality.formality,
                profile.personality.empathy
            );
            println!(
                "  Capabilities: {}",
                profile
                    .capabilities
                    .iter()
                    .map(|capability| capability.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!();
            println!(
                "  Interactions: {}",
                profile.analytics.total_interactions
            );
            println!(
                "  Satisfaction: {}%",
                profile.analytics.satisfaction_score
            );
            Ok(())
        }

        AgentCommands::Create {
            name,
            description,
            system_prompt,
            temperature,
            model,
            tools,
        } => {
            let request = CreateAgentRequest {
                prompt: name,
                description,
                system_prompt,
                temperature,
                model,
                max_memory_length: None,
                tools_enabled: tools.then_some(true),
            };

            let agent = api.create(&request).await?;
            println!(
                "{} Created agent {} {}",
                "✓".green().bold(),
                agent.prompt.bold(),
                format!("#{}", agent.id).dimmed()
            );
            Ok(())
        }

        AgentCommands::Update {
            id,
            name,
            description,
            temperature,
            model,
        } => {
            let request = UpdateAgentRequest {
                prompt: name,
                description,
                temperature,
                model,
                ..Default::default()
            };

            let agent = api.update(id, &request).await?;
            println!(
                "{} Updated agent {} {}",
                "✓".green().bold(),
                agent.prompt.bold(),
                format!("#{}", agent.id).dimmed()
            );
            Ok(())
        }

        AgentCommands::Delete { id } => {
            api.delete(id).await?;
            println!("{} Deleted agent #{}", "✓".green().bold(), id);
            Ok(())
        }

        AgentCommands::Research {
            id,
            enabled,
            threshold,
            max_chunks,
        } => {
            let agent = api
                .toggle_deep_research(id, enabled, threshold, max_chunks)
                .await?;
            let state = if agent.deep_research_enabled.unwrap_or(enabled) {
                "enabled".green()
            } else {
                "disabled".yellow()
            };
            println!(
                "{} Deep research {} for {}",
                "✓".green().bold(),
                state,
                agent.prompt.bold()
            );
            Ok(())
        }

        AgentCommands::Voice => {
            let capabilities = api.voice_capabilities().await?;

            if !capabilities.enabled {
                println!("{}", "Voice is not available on this backend.".dimmed());
                return Ok(());
            }

            println!("{}", "Voices".bold());
            for voice in &capabilities.voices {
                println!("  {}", voice);
            }
            Ok(())
        }

        AgentCommands::Conversations { id, skip, limit } => {
            let conversations = api.conversations(id, skip, limit).await?;

            if conversations.is_empty() {
                println!("{}", "No conversations found.".dimmed());
                return Ok(());
            }

            for conversation in &conversations {
                let title = conversation.title.as_deref().unwrap_or("(untitled)");
                let created = conversation
                    .created_at
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {} {} {}",
                    format!("#{}", conversation.id).dimmed(),
                    title,
                    created.dimmed()
                );
            }

            println!();
            println!("{} conversation(s)", conversations.len());
            Ok(())
        }
    }
}
