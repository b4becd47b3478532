use anyhow::Result;
use colored::Colorize;

use crate::context::Context;

/// Show the signed-in user
pub async fn run() -> Result<()> {
    let context = Context::load()?;
    let session = context.auth_session();

    if !session.rehydrate().await {
        println!("{}", "Not logged in.".dimmed());
        return Ok(());
    }

    if let Some(user) = session.user() {
        println!("{}", user.username.bold());
        println!("  Email: {}", user.email);
        if let Some(avatar) = &user.avatar {
            println!("  Avatar: {}", avatar.dimmed());
        }
    }

    Ok(())
}
