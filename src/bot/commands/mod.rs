//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Item watch commands
pub mod item_watch;

/// Word watch commands
pub mod word_watch;

use crate::{bot::BotData, errors::Error};

// Export commands
pub use general::*;
pub use item_watch::*;
pub use word_watch::*;

/// Every command the bot registers with Discord.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        watch(),
        watch_list(),
        watch_delete(),
        bk_watch(),
        bk_watch_list(),
        bk_watch_delete(),
        bk_found(),
        ping(),
        help(),
    ]
}
