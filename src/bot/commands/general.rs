//! General Discord commands - ping and help.
//! These don't touch the database.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Text shown by `/help`, one line per registered command.
    pub const HELP_TEXT: &str = "**Watch Help**\n\
    Watches are per channel: you are only notified about the channel you set them in.\n\n\
    **Word Watches**\n\
    • `/watch <word>` - Get mentioned when a message contains the word.\n\
    • `/watch-list` - Shows your word watches in this channel.\n\
    • `/watch-delete [word]` - Deletes one word watch, or all of them.\n\n\
    **Item Watches**\n\
    • `/bk-watch <item> [delete-after-match]` - Get mentioned when a matching item is found.\n\
    • `/bk-watch-list` - Shows your item watches in this channel.\n\
    • `/bk-watch-delete [item]` - Deletes one item watch, or all of them.\n\
    • `/bk-found <item>` - Announces a found item and pings its watchers (needs Manage Messages).\n\n\
    **Utility Commands**\n\
    • `/ping` - Checks if the bot is responsive.\n\
    • `/help` - Shows this help message.";

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command, ephemeral)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(HELP_TEXT).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
