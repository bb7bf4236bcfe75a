//! Item watch Discord commands - watches matched against found items.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData, command_scope,
            handlers::{items, notifier::DiscordNotifier},
        },
        core::{item_watch, messages},
        errors::{Error, Result},
    };

    /// Get notified when a specific item is found in any world
    #[poise::command(slash_command, guild_only, ephemeral, rename = "bk-watch")]
    pub async fn bk_watch(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The item name to watch for (partial matches work)"] item: String,
        #[description = "Delete the watch after the first match"]
        #[rename = "delete-after-match"]
        delete_after_match: Option<bool>,
    ) -> Result<()> {
        let scope = command_scope(ctx)?;
        let user_id = ctx.author().id.to_string();
        let delete_after_match = delete_after_match.unwrap_or(false);

        let outcome = match item_watch::register_item_watch(
            &ctx.data().database,
            &scope,
            &user_id,
            &item,
            delete_after_match,
        )
        .await
        {
            Err(Error::InvalidPattern { .. }) => {
                ctx.say(messages::INVALID_PATTERN).await?;
                return Ok(());
            }
            other => other?,
        };

        ctx.say(messages::item_register_reply(&outcome, delete_after_match))
            .await?;
        Ok(())
    }

    /// List all your active watches in this channel
    #[poise::command(slash_command, guild_only, ephemeral, rename = "bk-watch-list")]
    pub async fn bk_watch_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let scope = command_scope(ctx)?;
        let user_id = ctx.author().id.to_string();

        let watches = item_watch::list_item_watches(&ctx.data().database, &scope, &user_id).await?;
        ctx.say(messages::item_watch_list_reply(&watches)?).await?;
        Ok(())
    }

    /// Delete a watch for an item or all your watches
    #[poise::command(slash_command, guild_only, ephemeral, rename = "bk-watch-delete")]
    pub async fn bk_watch_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The item pattern to stop watching (leave empty to delete all watches)"]
        item: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let scope = command_scope(ctx)?;
        let user_id = ctx.author().id.to_string();

        let reply = if let Some(item) = item {
            let outcome = item_watch::delete_item_watch(db, &scope, &user_id, &item).await?;
            messages::delete_reply(&outcome)
        } else {
            let count = item_watch::delete_all_item_watches(db, &scope, &user_id).await?;
            messages::delete_all_reply(count)
        };

        ctx.say(reply).await?;
        Ok(())
    }

    /// Announce a found item and notify everyone watching for it in this channel
    ///
    /// Meant for moderators and tooling that relay item-found events by hand.
    #[poise::command(
        slash_command,
        guild_only,
        ephemeral,
        rename = "bk-found",
        required_permissions = "MANAGE_MESSAGES"
    )]
    pub async fn bk_found(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The name of the item that was found"] item: String,
    ) -> Result<()> {
        let scope = command_scope(ctx)?;
        let notifier = DiscordNotifier::new(ctx.serenity_context());
        let notified = items::notify_item_found(
            &notifier,
            &ctx.data().database,
            ctx.channel_id(),
            &scope,
            &item,
        )
        .await?;

        ctx.say(format!(
            "Notified {notified} watch{}.",
            if notified == 1 { "" } else { "es" }
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
