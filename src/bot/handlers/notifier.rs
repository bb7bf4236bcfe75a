//! Delivery of watch notifications.
//!
//! The match loops only decide who to notify; resolving the owner and posting the
//! message goes through a [`Notifier`], which is Discord in production.

use crate::errors::{Error, Result};
use poise::serenity_prelude::{self as serenity, Mentionable};
use std::future::Future;

/// Resolves watch owners and posts notifications.
pub trait Notifier {
    /// Resolves a stored user ID to the text that mentions them.
    fn mention(&self, user_id: &str) -> impl Future<Output = Result<String>> + Send;

    /// Posts `content` in `channel_id`.
    fn send(
        &self,
        channel_id: serenity::ChannelId,
        content: String,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Parses a stored snowflake. Zero is not a valid Discord ID.
pub(crate) fn parse_user_id(user_id: &str) -> Result<serenity::UserId> {
    user_id
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(serenity::UserId::new)
        .ok_or_else(|| Error::InvalidId {
            value: user_id.to_string(),
        })
}

/// Notifier backed by the live gateway context.
pub struct DiscordNotifier<'a> {
    ctx: &'a serenity::Context,
}

impl<'a> DiscordNotifier<'a> {
    /// Wraps the serenity context of the current event or command.
    #[must_use]
    pub const fn new(ctx: &'a serenity::Context) -> Self {
        Self { ctx }
    }
}

impl Notifier for DiscordNotifier<'_> {
    async fn mention(&self, user_id: &str) -> Result<String> {
        let user = parse_user_id(user_id)?.to_user(self.ctx).await?;
        Ok(user.mention().to_string())
    }

    async fn send(&self, channel_id: serenity::ChannelId, content: String) -> Result<()> {
        channel_id.say(self.ctx, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(
            parse_user_id("333333333333333333").unwrap(),
            serenity::UserId::new(333_333_333_333_333_333)
        );
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        assert!(matches!(
            parse_user_id("not-a-user"),
            Err(Error::InvalidId { .. })
        ));
        assert!(matches!(parse_user_id("0"), Err(Error::InvalidId { .. })));
        assert!(matches!(parse_user_id(""), Err(Error::InvalidId { .. })));
    }
}
