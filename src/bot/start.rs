use std::{path::PathBuf, time::Instant};

use poise::{Framework, FrameworkError, FrameworkOptions, PrefixFrameworkOptions};
use serenity::all::{ActivityData, Client, Context, GatewayIntents, GuildId, Ready};

use crate::{
    bot::{command, BotState},
    config::Config,
    data::BanStore,
    error::AppError,
    service::platform::SerenityPlatform,
};

/// Logs the bot identity and registers the slash commands.
///
/// Registration goes to the test guild when one is configured since global
/// commands can take up to an hour to show up. A failed registration is logged
/// and the bot keeps running with prefix commands.
async fn on_ready(
    ctx: &Context,
    ready: &Ready,
    framework: &Framework<BotState, AppError>,
    test_guild_id: Option<GuildId>,
) {
    tracing::info!("{} ({}) is connected to Discord!", ready.user.name, ready.user.id);

    ctx.set_activity(Some(ActivityData::watching("for global bans")));

    let commands = &framework.options().commands;

    match test_guild_id {
        Some(guild_id) => {
            match poise::builtins::register_in_guild(ctx, commands, guild_id).await {
                Ok(()) => tracing::info!(
                    "Registered {} slash commands in test guild {}",
                    commands.len(),
                    guild_id
                ),
                Err(e) => tracing::error!(
                    "Failed to register slash commands in test guild {}: {:?}",
                    guild_id,
                    e
                ),
            }
        }
        None => match poise::builtins::register_globally(ctx, commands).await {
            Ok(()) => tracing::info!("Registered {} global slash commands", commands.len()),
            Err(e) => tracing::error!("Failed to register global slash commands: {:?}", e),
        },
    }
}

/// Opens the ban list and persists the removal of any records skipped while
/// loading.
///
/// A failed write is logged and the store is returned anyway so the bot keeps
/// answering commands.
async fn open_ban_store(path: PathBuf) -> BanStore {
    let store = BanStore::new(path);

    let bans = store.load().await;
    if let Err(e) = store.save(&bans).await {
        tracing::warn!(
            "Failed to rewrite ban list {}, continuing: {}",
            store.path().display(),
            e
        );
    }

    tracing::info!(
        "Loaded {} global bans from {}",
        bans.len(),
        store.path().display()
    );

    store
}

/// Framework errors the bot handles differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    /// A message starting with the prefix that names none of our commands.
    UnknownCommand,
    Other,
}

impl ErrorKind {
    fn of(error: &FrameworkError<'_, BotState, AppError>) -> Self {
        match error {
            FrameworkError::UnknownCommand { .. } => Self::UnknownCommand,
            _ => Self::Other,
        }
    }

    /// Whether the error is passed on to poise's default handler.
    fn is_reported(self) -> bool {
        self != Self::UnknownCommand
    }
}

async fn on_error(error: FrameworkError<'_, BotState, AppError>) {
    if !ErrorKind::of(&error).is_reported() {
        return;
    }

    if let Err(e) = poise::builtins::on_error(error).await {
        tracing::error!("Failed to report command error: {:?}", e);
    }
}

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and runs until the client shuts down or fails.
///
/// # Arguments
/// - `config` - Application configuration, moved into the shared bot state
/// - `started_at` - Process start time reported by `uptime`
///
/// # Returns
/// - `Ok(())` if the client shuts down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: Config, started_at: Instant) -> Result<(), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents and must be enabled
    // in the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = config.discord_token.clone();
    let prefix = config.command_prefix.clone();

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: command::all(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                on_ready(ctx, ready, framework, config.test_guild_id).await;

                Ok(BotState {
                    store: open_ban_store(config.bans_file.clone()).await,
                    platform: SerenityPlatform::new(ctx.cache.clone(), ctx.http.clone()),
                    config,
                    started_at,
                })
            })
        })
        .build();

    let mut client = Client::builder(&token, intents)
        .framework(framework)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
