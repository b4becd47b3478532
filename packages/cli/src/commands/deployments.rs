use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::commands::parse_channel;
use crate::context::Context;

#[derive(Subcommand)]
pub enum DeploymentCommands {
    /// List deployments for a channel
    List {
        /// Deployment channel (telegram, discord, web-app)
        channel: String,
    },

    /// Show one deployment's status
    Status {
        /// Deployment channel (telegram, discord, web-app)
        channel: String,

        /// Deployment ID
        id: i64,
    },

    /// Restart a deployment
    Restart {
        /// Deployment channel (telegram, discord, web-app)
        channel: String,

        /// Deployment ID
        id: i64,
    },

    /// Stop and remove a deployment
    Stop {
        /// Deployment channel (telegram, discord, web-app)
        channel: String,

        /// Deployment ID
        id: i64,
    },
}

pub async fn run(command: DeploymentCommands) -> Result<()> {
    let context = Context::load()?;
    context.require_auth("deployments")?;
    let api = context.deployments();

    match command {
        DeploymentCommands::List { channel } => {
            let channel = parse_channel(&channel)?;
            let deployments = api.list(channel).await?;

            if deployments.is_empty() {
                println!("{}", "No deployments found.".dimmed());
                return Ok(());
            }

            println!("{}", format!("{} deployments", channel).bold());
            println!("{}", "─".repeat(70));
            println!(
                "  {:<8} {:<8} {:<12} {:>10} {:<18}",
                "ID".dimmed(),
                "AGENT".dimmed(),
                "STATUS".dimmed(),
                "MESSAGES".dimmed(),
                "LAST ACTIVE".dimmed(),
            );
            println!("{}", "─".repeat(70));

            for deployment in &deployments {
                let agent = deployment
                    .agent_id
                    .map(|id| format!("#{}", id))
                    .unwrap_or_else(|| "-".to_string());
                let last_active = deployment
                    .last_active
                    .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "  {:<8} {:<8} {:<12} {:>10} {:<18}",
                    deployment.id,
                    agent,
                    status_color(&deployment.status),
                    deployment.messages_handled,
                    last_active,
                );
            }

            println!();
            println!("{} deployment(s)", deployments.len());
            Ok(())
        }

        DeploymentCommands::Status { channel, id } => {
            let channel = parse_channel(&channel)?;
            let deployment = api.status(channel, id).await?;

            println!("{} {}", "Deployment".bold(), deployment.id);
            println!("  Channel: {}", channel);
            println!("  Status: {}", status_color(&deployment.status));
            println!("  Messages handled: {}", deployment.messages_handled);
            if let Some(last_active) = deployment.last_active {
                println!(
                    "  Last active: {}",
                    last_active.format("%Y-%m-%d %H:%M:%S")
                );
            }
            if let Some(error) = &deployment.error {
                println!("  Error: {}", error.red());
            }
            Ok(())
        }

        DeploymentCommands::Restart { channel, id } => {
            let channel = parse_channel(&channel)?;
            let deployment = api.restart(channel, id).await?;

            println!(
                "{} Deployment {} restarted (status: {})",
                "✓".green().bold(),
                deployment.id,
                deployment.status
            );
            Ok(())
        }

        DeploymentCommands::Stop { channel, id } => {
            let channel = parse_channel(&channel)?;
            api.stop(channel, id).await?;

            println!("{} Deployment {} stopped", "✓".green().bold(), id);
            Ok(())
        }
    }
}

fn status_color(status: &str) -> colored::ColoredString {
    match status {
        "running" | "active" => status.green(),
        "stopped" => status.red(),
        "error" | "failed" => status.red().bold(),
        "pending" | "starting" => status.yellow(),
        _ => status.dimmed(),
    }
}
