//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the watch bot: slash commands,
//! the message listener that drives word-watch matching, and the framework setup.

/// Discord command implementations (word watches, item watches, general)
pub mod commands;
/// Discord event handlers (messages, item-found notifications)
pub mod handlers;

use crate::{
    config::Settings,
    core::{Scope, cache::WatchCache, messages},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands and event handlers.
pub struct BotData {
    /// Database connection for all watch storage
    pub database: DatabaseConnection,
    /// Word watches per channel, invalidated by every word-watch write
    pub cache: WatchCache,
    /// Settings loaded at startup
    pub settings: Arc<Settings>,
}

impl BotData {
    /// Creates a new `BotData` with a cache configured from `settings`.
    #[must_use]
    pub fn new(database: DatabaseConnection, settings: Arc<Settings>) -> Self {
        Self {
            database,
            cache: WatchCache::new(settings.cache_watches),
            settings,
        }
    }
}

/// Scope of the channel a command was invoked in.
///
/// # Errors
/// Returns `NotInGuild` when invoked from a DM.
pub fn command_scope(ctx: poise::Context<'_, BotData, Error>) -> Result<Scope> {
    let guild_id = ctx.guild_id().ok_or(Error::NotInGuild)?;
    Ok(Scope::new(guild_id, ctx.channel_id()))
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            let name = &ctx.command().name;
            error!("Error in command `{name}`: {error:?}");
            let content = match error {
                Error::NotInGuild => messages::NOT_IN_GUILD,
                _ => messages::command_failure_reply(name),
            };
            let reply = poise::CreateReply::default()
                .content(content)
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Connects to Discord and runs until the gateway connection ends.
///
/// Commands are registered in `settings.dev_guild_id` when set, otherwise globally.
#[instrument(skip(token, settings, database))]
pub async fn run_bot(
    token: String,
    settings: Arc<Settings>,
    database: DatabaseConnection,
) -> Result<()> {
    let dev_guild_id = settings.dev_guild_id;
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all_commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                let commands = &framework.options().commands;
                if let Some(guild_id) = dev_guild_id.filter(|id| *id != 0) {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
                    info!("Registered {} commands in guild {guild_id}", commands.len());
                } else {
                    poise::builtins::register_globally(ctx, commands).await?;
                    info!("Registered {} commands globally", commands.len());
                }
                Ok(BotData::new(database, settings))
            })
        })
        .build();

    // Message content is privileged and needed for word matching
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;
