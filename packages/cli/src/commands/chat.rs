use anyhow::Result;
use colored::Colorize;

use crate::context::Context;

/// Send a one-shot message to an agent
pub async fn run(agent_id: i64, message: &str) -> Result<()> {
    let context = Context::load()?;
    context.require_auth("chat")?;

    let reply = context.agents().chat(agent_id, message).await?;

    println!("{}", reply.response);
    if let Some(conversation_id) = reply.conversation_id {
        println!();
        println!(
            "{}",
            format!("Conversation #{}", conversation_id).dimmed()
        );
    }

    Ok(())
}
