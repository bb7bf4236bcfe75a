//! Word watch Discord commands - register, list and delete word watches.
//!
//! Every reply is ephemeral. Writes invalidate the channel's cached watch list so
//! the next message sees them.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, command_scope},
        core::{RegisterOutcome, messages, word_watch},
        errors::{Error, Result},
    };

    /// Set a watch for a specific word in this channel
    ///
    /// You are mentioned whenever a message in this channel contains the word,
    /// ignoring case. Parts of longer words match too.
    #[poise::command(slash_command, guild_only, ephemeral)]
    pub async fn watch(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The word to watch for"] word: String,
    ) -> Result<()> {
        let data = ctx.data();
        let scope = command_scope(ctx)?;
        let user_id = ctx.author().id.to_string();

        let outcome =
            match word_watch::register_word_watch(&data.database, &scope, &user_id, &word).await {
                Err(Error::InvalidPattern { .. }) => {
                    ctx.say(messages::INVALID_PATTERN).await?;
                    return Ok(());
                }
                other => other?,
            };

        if matches!(outcome, RegisterOutcome::Registered { .. }) {
            data.cache.invalidate(&scope).await;
        }

        ctx.say(messages::word_register_reply(&outcome)).await?;
        Ok(())
    }

    /// List all your word watches in this channel
    #[poise::command(slash_command, guild_only, ephemeral, rename = "watch-list")]
    pub async fn watch_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let scope = command_scope(ctx)?;
        let user_id = ctx.author().id.to_string();

        let watches = word_watch::list_word_watches(&ctx.data().database, &scope, &user_id).await?;
        ctx.say(messages::word_watch_list_reply(&watches)?).await?;
        Ok(())
    }

    /// Delete a word watch or all your word watches in this channel
    #[poise::command(slash_command, guild_only, ephemeral, rename = "watch-delete")]
    pub async fn watch_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "The word to stop watching (leave empty to delete all watches)"]
        word: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let scope = command_scope(ctx)?;
        let user_id = ctx.author().id.to_string();

        let reply = if let Some(word) = word {
            let outcome =
                word_watch::delete_word_watch(&data.database, &scope, &user_id, &word).await?;
            messages::delete_reply(&outcome)
        } else {
            let count =
                word_watch::delete_all_word_watches(&data.database, &scope, &user_id).await?;
            messages::delete_all_reply(count)
        };

        data.cache.invalidate(&scope).await;
        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
