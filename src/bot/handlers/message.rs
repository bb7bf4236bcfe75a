//! Word-watch matching for incoming chat messages.

use crate::{
    bot::{BotData, handlers::notifier::Notifier},
    core::{Scope, matching, messages},
    errors::Result,
};
use poise::serenity_prelude as serenity;
use tracing::{debug, instrument};

/// The parts of a gateway message the match loop looks at.
#[derive(Debug, Clone, Copy)]
pub struct IncomingMessage<'a> {
    /// Guild the message was posted in, `None` for DMs
    pub guild_id: Option<serenity::GuildId>,
    /// Channel the message was posted in
    pub channel_id: serenity::ChannelId,
    /// Whether the author is a bot account
    pub author_is_bot: bool,
    /// Raw message text
    pub content: &'a str,
}

impl<'a> From<&'a serenity::Message> for IncomingMessage<'a> {
    fn from(message: &'a serenity::Message) -> Self {
        Self {
            guild_id: message.guild_id,
            channel_id: message.channel_id,
            author_is_bot: message.author.bot,
            content: &message.content,
        }
    }
}

/// Notifies the owner of every word watch the message matches.
///
/// One notification is sent per matching watch, so a user with two matching
/// watches is mentioned twice. The first failure ends the pass: watches after it
/// are not checked for this message. Returns the number of notifications sent.
#[instrument(skip_all, fields(channel = %message.channel_id))]
pub async fn handle_message<N: Notifier>(
    notifier: &N,
    data: &BotData,
    message: IncomingMessage<'_>,
) -> Result<usize> {
    if data.settings.ignore_bot_messages && message.author_is_bot {
        return Ok(0);
    }
    let Some(guild_id) = message.guild_id else {
        return Ok(0);
    };

    let scope = Scope::new(guild_id, message.channel_id);
    let watches = data.cache.get_or_load(&data.database, &scope).await?;

    let mut sent = 0;
    for watch in matching::matching_watches(&watches, message.content) {
        debug!("Watch {} ('{}') matched", watch.id, watch.word);
        let mention = notifier.mention(&watch.user_id).await?;
        notifier
            .send(
                message.channel_id,
                messages::word_notification(&mention, &watch.word),
            )
            .await?;
        sent += 1;
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::Settings,
        core::word_watch::register_word_watch,
        test_utils::*,
    };
    use std::sync::Arc;

    async fn setup_bot_data(settings: Settings) -> Result<BotData> {
        let db = setup_test_db().await?;
        Ok(BotData::new(db, Arc::new(settings)))
    }

    fn guild_message(content: &str) -> IncomingMessage<'_> {
        IncomingMessage {
            guild_id: Some(serenity::GuildId::new(TEST_GUILD.parse().unwrap())),
            channel_id: serenity::ChannelId::new(TEST_CHANNEL.parse().unwrap()),
            author_is_bot: false,
            content,
        }
    }

    #[tokio::test]
    async fn test_one_notification_per_matching_watch() -> Result<()> {
        let data = setup_bot_data(Settings::default()).await?;
        let scope = test_scope();
        register_word_watch(&data.database, &scope, ALICE, "sword").await?;
        register_word_watch(&data.database, &scope, ALICE, "master").await?;
        register_word_watch(&data.database, &scope, BOB, "sword").await?;
        register_word_watch(&data.database, &scope, BOB, "shield").await?;

        let notifier = RecordingNotifier::default();
        let sent =
            handle_message(&notifier, &data, guild_message("Found the Master Sword!")).await?;

        assert_eq!(sent, 3);
        let channel = serenity::ChannelId::new(TEST_CHANNEL.parse().unwrap());
        assert_eq!(
            notifier.sent(),
            vec![
                (channel, format!("<@{ALICE}>, your BK'd item 'sword' was found!")),
                (channel, format!("<@{ALICE}>, your BK'd item 'master' was found!")),
                (channel, format!("<@{BOB}>, your BK'd item 'sword' was found!")),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_bot_authors_are_skipped() -> Result<()> {
        let data = setup_bot_data(Settings::default()).await?;
        register_word_watch(&data.database, &test_scope(), ALICE, "cat").await?;

        let notifier = RecordingNotifier::default();
        let message = IncomingMessage {
            author_is_bot: true,
            ..guild_message("a cat appears")
        };
        assert_eq!(handle_message(&notifier, &data, message).await?, 0);
        assert_eq!(notifier.attempts(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_bot_authors_match_when_not_ignored() -> Result<()> {
        let settings = Settings {
            ignore_bot_messages: false,
            ..Settings::default()
        };
        let data = setup_bot_data(settings).await?;
        register_word_watch(&data.database, &test_scope(), ALICE, "cat").await?;

        let notifier = RecordingNotifier::default();
        let message = IncomingMessage {
            author_is_bot: true,
            ..guild_message("a cat appears")
        };
        assert_eq!(handle_message(&notifier, &data, message).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_messages_without_guild_are_skipped() -> Result<()> {
        let data = setup_bot_data(Settings::default()).await?;
        register_word_watch(&data.database, &test_scope(), ALICE, "cat").await?;

        let notifier = RecordingNotifier::default();
        let message = IncomingMessage {
            guild_id: None,
            ..guild_message("a cat appears")
        };
        assert_eq!(handle_message(&notifier, &data, message).await?, 0);
        assert_eq!(notifier.attempts(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_first_failure_abandons_the_message() -> Result<()> {
        let data = setup_bot_data(Settings::default()).await?;
        let scope = test_scope();
        for word in ["one", "two", "three"] {
            register_word_watch(&data.database, &scope, ALICE, word).await?;
        }

        let notifier = RecordingNotifier::failing_on(2);
        let result = handle_message(&notifier, &data, guild_message("one two three")).await;

        assert!(result.is_err());
        assert_eq!(notifier.attempts(), 2);
        assert_eq!(notifier.sent().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_unresolvable_owner_abandons_the_message() -> Result<()> {
        let data = setup_bot_data(Settings::default()).await?;
        let scope = test_scope();
        register_word_watch(&data.database, &scope, "not-a-snowflake", "cat").await?;
        register_word_watch(&data.database, &scope, BOB, "cat").await?;

        let notifier = RecordingNotifier::default();
        let result = handle_message(&notifier, &data, guild_message("cat")).await;

        assert!(result.is_err());
        assert_eq!(notifier.attempts(), 0);

        Ok(())
    }
}
