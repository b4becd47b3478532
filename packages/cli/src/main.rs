use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod config;
mod context;
mod session;

#[derive(Parser)]
#[command(
    name = "agentdeck",
    about = "AgentDeck CLI - Manage your AI agents and bot deployments"
)]
#[command(version, propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in to the AgentDeck backend
    Login {
        /// API base URL (default: https://api.agentdeck.io)
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Sign out and drop stored credentials
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Create a new account
    Register,

    /// Confirm an email address with a verification token
    VerifyEmail {
        /// Token from the verification mail
        token: String,
    },

    /// Manage agents
    Agents {
        #[command(subcommand)]
        command: commands::agents::AgentCommands,
    },

    /// Send a one-shot message to an agent
    Chat {
        /// Agent ID
        agent_id: i64,

        /// Message text
        message: String,
    },

    /// Deploy an agent as a bot
    Deploy {
        /// Deployment channel (telegram, discord, web-app)
        channel: String,

        /// Agent ID
        #[arg(short, long)]
        agent_id: i64,

        /// Bot credential for channels that require one
        #[arg(long)]
        bot_token: Option<String>,

        /// Display name for the deployment
        #[arg(long)]
        name: Option<String>,
    },

    /// Inspect bot deployments
    Deployments {
        #[command(subcommand)]
        command: commands::deployments::DeploymentCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Login { api_url } => commands::login::run(api_url).await,
        Commands::Logout => commands::logout::run(),
        Commands::Whoami => commands::whoami::run().await,
        Commands::Register => commands::register::run().await,
        Commands::VerifyEmail { token } => commands::register::verify(&token).await,
        Commands::Agents { command } => commands::agents::run(command).await,
        Commands::Chat { agent_id, message } => commands::chat::run(agent_id, &message).await,
        Commands::Deploy {
            channel,
            agent_id,
            bot_token,
            name,
        } => commands::deploy::run(&channel, agent_id, bot_token, name).await,
        Commands::Deployments { command } => commands::deployments::run(command).await,
    }
}
