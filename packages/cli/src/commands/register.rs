use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::{Input, Password};

use crate::context::Context;

/// Handle the register command
pub async fn run() -> Result<()> {
    println!("{}", "AgentDeck Registration".bold());
    println!();

    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    if username.is_empty() || email.is_empty() {
        bail!("Username and email cannot be empty");
    }

    let password: String = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let context = Context::load()?;
    let user = context.auth().register(&username, &email, &password).await?;

    println!();
    println!(
        "{} Account created for {}",
        "✓".green().bold(),
        user.username.bold()
    );
    println!("  Check {} for a verification mail.", user.email.dimmed());

    Ok(())
}

/// Handle the verify-email command
pub async fn verify(token: &str) -> Result<()> {
    let context = Context::load()?;
    context.auth().verify_email(token).await?;

    println!("{} Email verified", "✓".green().bold());
    println!("  You can now sign in with {}", "agentdeck login".dimmed());

    Ok(())
}
