use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use agentdeck_client::api::deploy::DeployRequest;

use crate::commands::parse_channel;
use crate::context::Context;

/// Deploy an agent as a bot
pub async fn run(
    channel: &str,
    agent_id: i64,
    bot_token: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let channel = parse_channel(channel)?;
    let context = Context::load()?;
    context.require_auth("deploy")?;

    let request = DeployRequest {
        agent_id,
        bot_token,
        name,
    };

    println!(
        "{} Deploying agent #{} to {}...",
        "→".blue().bold(),
        agent_id,
        channel
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")?,
    );
    spinner.set_message("Waiting for the backend");

    let deployment = context.deployments().deploy(channel, &request).await?;

    spinner.finish_with_message(format!(
        "{} Deployment {} created (status: {})",
        "✓".green().bold(),
        deployment.id,
        deployment.status
    ));

    println!();
    println!(
        "  Track progress: {} deployments status {} {}",
        "agentdeck".dimmed(),
        channel.slug(),
        deployment.id
    );

    Ok(())
}
