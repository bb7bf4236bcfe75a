//! Discord event handlers
//!
//! Incoming messages drive word-watch matching. Failures are logged and the
//! message is dropped; they never reach the framework's error handler.

/// Item-found notifications
pub mod items;
/// Word-watch matching on incoming messages
pub mod message;
/// Owner resolution and message posting
pub mod notifier;

use crate::{
    bot::BotData,
    errors::{Error, Result},
};
use message::IncomingMessage;
use notifier::DiscordNotifier;
use poise::serenity_prelude as serenity;
use tracing::{error, info};

/// Dispatches gateway events to the watch handlers.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("{} is connected and watching", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            let notifier = DiscordNotifier::new(ctx);
            let incoming = IncomingMessage::from(new_message);
            if let Err(e) = message::handle_message(&notifier, data, incoming).await {
                error!(
                    "Error checking watches for message {} in channel {}: {e}",
                    new_message.id, new_message.channel_id
                );
            }
        }
        _ => {}
    }
    Ok(())
}
