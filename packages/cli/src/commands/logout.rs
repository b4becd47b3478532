use anyhow::Result;
use colored::Colorize;

use crate::context::Context;

/// Handle the logout command. Safe to run when already logged out.
pub fn run() -> Result<()> {
    let context = Context::load()?;
    context.auth_session().logout();

    println!("{} Logged out", "✓".green().bold());
    Ok(())
}
