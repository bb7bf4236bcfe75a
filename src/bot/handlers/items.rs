//! Item-found notifications.
//!
//! Whatever relays item-found events (the `bk-found` command, or another part of
//! the application holding a serenity context) calls [`notify_item_found`].

use crate::{
    bot::handlers::notifier::Notifier,
    core::{Scope, item_watch, messages},
    errors::Result,
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Matches `item_name` against the item watches of `scope` and mentions every owner
/// in `channel_id`. One-shot watches are consumed by the match.
///
/// Returns the number of notifications sent. The first failed notification ends
/// the pass; one-shot watches consumed by the match stay deleted.
#[instrument(skip(notifier, db))]
pub async fn notify_item_found<N: Notifier>(
    notifier: &N,
    db: &DatabaseConnection,
    channel_id: serenity::ChannelId,
    scope: &Scope,
    item_name: &str,
) -> Result<usize> {
    let matched = item_watch::check_item_match(db, scope, item_name).await?;

    for watch in &matched {
        let mention = notifier.mention(&watch.user_id).await?;
        notifier
            .send(
                channel_id,
                messages::item_notification(&mention, &watch.item_pattern, item_name),
            )
            .await?;
    }

    info!("Item '{item_name}' matched {} watches in {scope}", matched.len());
    Ok(matched.len())
}
