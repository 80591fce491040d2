// FFInfo Bot - Rust Edition
// A lightweight Discord bot for Free Fire player lookups

mod api;
mod commands;
mod features;
mod models;
mod storage;
mod utils;

use std::env;
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::storage::ConfigStore;
use crate::utils::config::{
    COMMAND_PREFIX, DEFAULT_CONFIG_FILE, DEFAULT_INFO_API_URL, DEFAULT_PROFILE_CARD_URL,
    HTTP_TIMEOUT_SECS,
};
use crate::utils::cooldown::RateLimiter;

/// User data shared across all commands
pub struct Data {
    pub http_client: reqwest::Client,
    pub store: ConfigStore,
    pub limiter: RateLimiter,
    pub info_api_url: String,
    pub profile_card_url: String,
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("info_api_url", &self.info_api_url)
            .field("profile_card_url", &self.profile_card_url)
            .finish()
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Register all slash commands
fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        commands::info::info(),
        commands::channels::set_info_channel(),
        commands::channels::remove_info_channel(),
        commands::channels::list_info_channels(),
    ]
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "ffinfo_rs=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN must be set");
    let info_api_url =
        env::var("INFO_API_URL").unwrap_or_else(|_| DEFAULT_INFO_API_URL.to_string());
    let profile_card_url =
        env::var("PROFILE_CARD_URL").unwrap_or_else(|_| DEFAULT_PROFILE_CARD_URL.to_string());
    let config_file =
        env::var("INFO_CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    info!("Starting FFInfo Bot (Rust Edition)...");

    // Build HTTP client with an explicit request bound
    let http_client = reqwest::Client::builder()
        .user_agent("FFInfo-Bot/1.0")
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client");

    let store = ConfigStore::load(&config_file);
    info!("Config loaded from {}", config_file);

    // Setup framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: get_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.into()),
                ..Default::default()
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!("Command error: {:?}", error);
                            let _ = ctx.say("⚠️ Unexpected error. Try again later.").await;
                        }
                        err => {
                            error!("Framework error: {:?}", err);
                        }
                    }
                })
            },
            event_handler: |ctx, event, _framework, data| {
                Box::pin(async move {
                    if let serenity::FullEvent::Message { new_message } = event {
                        if let Err(e) =
                            features::message_guard::handle_message(ctx, new_message, data).await
                        {
                            error!("Message guard error: {:?}", e);
                        }
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready! Registering commands...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully!");

                Ok(Data {
                    http_client,
                    store,
                    limiter: RateLimiter::new(),
                    info_api_url,
                    profile_card_url,
                })
            })
        })
        .build();

    // MESSAGE_CONTENT is privileged; the message guard needs it, enable it
    // in the Discord Dev Portal
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .expect("Failed to create client");

    // Run with graceful shutdown
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to register Ctrl+C handler");
        info!("Shutting down...");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    info!("Goodbye!");
}
