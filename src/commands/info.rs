// Info command - look up a Free Fire player by UID

use poise::serenity_prelude as serenity;
use tracing::{error, warn};

use crate::api::player_info::{fetch_profile_card, get_player, ApiError};
use crate::utils::config::{colors, is_valid_uid, REPORT_FOOTER};
use crate::utils::cooldown::Denied;
use crate::utils::report::build_report;
use crate::{Context, Error};

// Discord rejects empty field names; a zero-width space keeps the layout
const BLANK_FIELD_NAME: &str = "\u{200b}";

/// Displays information about a Free Fire player
#[poise::command(slash_command, prefix_command, guild_only)]
pub async fn info(
    ctx: Context<'_>,
    #[description = "Free Fire player UID"] uid: String,
) -> Result<(), Error> {
    if !is_valid_uid(&uid) {
        ctx.send(
            poise::CreateReply::default()
                .content("Invalid UID! It must:\n- Be only numbers\n- Have at least 6 digits")
                .reply(true),
        )
        .await?;
        return Ok(());
    }

    let Some(guild_id) = ctx.guild_id() else {
        ctx.say("This command can only be used in a server.").await?;
        return Ok(());
    };

    let data = ctx.data();

    if !data
        .store
        .is_allowed(guild_id.get(), ctx.channel_id().get())
        .await
    {
        let channels = data.store.list_channels(guild_id.get()).await;
        let mentions = channels
            .iter()
            .map(|id| format!("<#{}>", id))
            .collect::<Vec<_>>()
            .join(", ");
        let embed = serenity::CreateEmbed::new()
            .title("⚠️ Command Not Allowed")
            .description(format!("This command can only be used in {}.", mentions))
            .color(colors::ERROR);
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        return Ok(());
    }

    let settings = data.store.global_settings().await;
    if let Err(denied) = data
        .limiter
        .check(
            ctx.author().id.get(),
            settings.default_cooldown,
            settings.default_daily_limit,
        )
        .await
    {
        let message = match denied {
            Denied::Cooldown { remaining_secs } => {
                format!("⏳ Slow down! Try again in {} seconds.", remaining_secs)
            }
            Denied::DailyLimit { limit } => {
                format!("⏳ You have reached the daily limit of {} lookups.", limit)
            }
        };
        ctx.send(poise::CreateReply::default().content(message).reply(true))
            .await?;
        return Ok(());
    }

    ctx.defer().await?;

    let record = match get_player(&data.http_client, &data.info_api_url, &uid).await {
        Ok(record) => record,
        Err(ApiError::NotFound) => {
            ctx.say(format!("Player with UID {} not found.", uid)).await?;
            return Ok(());
        }
        Err(ApiError::Status(code)) => {
            warn!("Info API returned status {} for uid {}", code, uid);
            ctx.say("⚠️ API error. Try again later.").await?;
            return Ok(());
        }
        Err(e) => {
            error!("Info lookup failed for uid {}: {}", uid, e);
            ctx.say("⚠️ Unexpected error. Try again later.").await?;
            return Ok(());
        }
    };

    let report = build_report(&uid, &record);

    let author = ctx.author();
    let mut embed = serenity::CreateEmbed::new()
        .title("Player Information")
        .color(colors::SUCCESS)
        .thumbnail(author.avatar_url().unwrap_or_else(|| author.default_avatar_url()))
        .footer(serenity::CreateEmbedFooter::new(REPORT_FOOTER))
        .timestamp(serenity::Timestamp::now());
    for section in report.sections() {
        embed = embed.field(BLANK_FIELD_NAME, section, false);
    }
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    // Best-effort profile card; the report already went out
    match fetch_profile_card(&data.http_client, &data.profile_card_url, &uid).await {
        Ok(bytes) => {
            let attachment =
                serenity::CreateAttachment::bytes(bytes, format!("profile_{}.png", uid));
            if let Err(e) = ctx
                .send(poise::CreateReply::default().attachment(attachment))
                .await
            {
                warn!("Failed to send profile card for uid {}: {}", uid, e);
            }
        }
        Err(e) => warn!("Profile card fetch failed for uid {}: {:#}", uid, e),
    }

    Ok(())
}
