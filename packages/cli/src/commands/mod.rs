//! Command implementations

pub mod agents;
pub mod chat;
pub mod deploy;
pub mod deployments;
pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;

use anyhow::{bail, Result};

use agentdeck_client::DeployChannel;

/// Parse a channel argument (telegram, discord, web-app).
pub fn parse_channel(value: &str) -> Result<DeployChannel> {
    match value {
        "telegram" => Ok(DeployChannel::Telegram),
        "discord" => Ok(DeployChannel::Discord),
        "web-app" | "webapp" => Ok(DeployChannel::WebApp),
        other => bail!(
            "Unknown channel '{}'. Expected telegram, discord or web-app.",
            other
        ),
    }
}
