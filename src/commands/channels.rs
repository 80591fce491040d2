// Admin commands for the per-guild info channel allow-list

use poise::serenity_prelude as serenity;
use tracing::info;

use crate::storage::{AddResult, RemoveResult};
use crate::utils::config::colors;
use crate::{Context, Error};

// Appended when the in-memory change could not be written to disk
const UNSAVED_WARNING: &str = "\n⚠️ Warning: the change could not be saved and may be lost on restart";

/// Allow a channel for info commands
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    rename = "setinfochannel",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn set_info_channel(
    ctx: Context<'_>,
    #[description = "Channel to allow"] channel: serenity::Channel,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command can only be used in a server.").await?;
        return Ok(());
    };

    let channel_id = channel.id();
    let result = ctx
        .data()
        .store
        .add_channel(guild_id.get(), channel_id.get())
        .await;

    match result {
        AddResult::Added { persisted } => {
            info!("Guild {}: channel {} allowed for info", guild_id, channel_id);
            let mut message = format!("✅ <#{}> is now allowed for info commands", channel_id);
            if !persisted {
                message.push_str(UNSAVED_WARNING);
            }
            ctx.say(message).await?;
        }
        AddResult::AlreadyListed => {
            ctx.say(format!("ℹ️ <#{}> is already allowed for info commands", channel_id))
                .await?;
        }
    }
    Ok(())
}

/// Remove a channel from info commands
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    rename = "removeinfochannel",
    required_permissions = "ADMINISTRATOR"
)]
pub async fn remove_info_channel(
    ctx: Context<'_>,
    #[description = "Channel to remove"] channel: serenity::Channel,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command can only be used in a server.").await?;
        return Ok(());
    };

    let channel_id = channel.id();
    let result = ctx
        .data()
        .store
        .remove_channel(guild_id.get(), channel_id.get())
        .await;

    match result {
        RemoveResult::Removed { persisted } => {
            info!("Guild {}: channel {} removed from info list", guild_id, channel_id);
            let mut message =
                format!("✅ <#{}> has been removed from allowed channels", channel_id);
            if !persisted {
                message.push_str(UNSAVED_WARNING);
            }
            ctx.say(message).await?;
        }
        RemoveResult::NotListed => {
            ctx.say(format!("❌ <#{}> is not in the list of allowed channels", channel_id))
                .await?;
        }
        RemoveResult::NoServerEntry => {
            ctx.say("ℹ️ This server has no saved configuration").await?;
        }
    }
    Ok(())
}

/// List allowed channels
#[poise::command(slash_command, prefix_command, guild_only, rename = "infochannels")]
pub async fn list_info_channels(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command can only be used in a server.").await?;
        return Ok(());
    };

    let channels = ctx.data().store.list_channels(guild_id.get()).await;
    let description = if channels.is_empty() {
        "All channels are allowed (no restriction configured)".to_string()
    } else {
        channels
            .iter()
            .map(|id| format!("• <#{}>", id))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let embed = serenity::CreateEmbed::new()
        .title("Allowed channels for info")
        .description(description)
        .color(colors::SUCCESS);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
