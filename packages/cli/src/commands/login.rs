use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Input, Password};

use crate::config::Config;
use crate::context::Context;

/// Handle the login command
pub async fn run(api_url: Option<String>) -> Result<()> {
    println!("{}", "AgentDeck Login".bold());
    println!();

    if let Some(url) = api_url {
        let mut config = Config::load().unwrap_or_default();
        config.api_url = Some(url);
        config.save()?;
    }

    let context = Context::load()?;

    let email: String = Input::new().with_prompt("Email").interact_text()?;
    if email.is_empty() {
        bail!("Email cannot be empty");
    }

    let password: String = Password::new().with_prompt("Password").interact()?;
    if password.is_empty() {
        bail!("Password cannot be empty");
    }

    let session = context.auth_session();
    let user = session.login(&email, &password).await?;

    println!();
    println!(
        "{} Logged in as {} {}",
        "✓".green().bold(),
        user.username.bold(),
        format!("({})", context.config.api_url()).dimmed()
    );

    Ok(())
}
