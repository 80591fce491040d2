// Message guard - keeps configured info channels command-only
// Non-command messages in a guild's listed info channels are deleted.

use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::utils::config::COMMAND_PREFIX;
use crate::Data;

pub async fn handle_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<(), anyhow::Error> {
    if msg.author.bot {
        return Ok(());
    }

    let Some(guild_id) = msg.guild_id else {
        return Ok(());
    };

    // Only explicitly configured channels are housekept
    if !data
        .store
        .is_listed(guild_id.get(), msg.channel_id.get())
        .await
    {
        return Ok(());
    }

    // Slash invocations never arrive as user messages, so a prefix check
    // is all that distinguishes commands from chatter here
    if msg.content.starts_with(COMMAND_PREFIX) {
        return Ok(());
    }

    if let Err(e) = msg.delete(&ctx.http).await {
        // Usually a missing Manage Messages permission
        warn!(
            "Failed to delete message {} in channel {}: {}",
            msg.id, msg.channel_id, e
        );
    }

    Ok(())
}
