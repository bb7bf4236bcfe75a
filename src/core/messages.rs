//! User-facing reply and notification text.
//!
//! Kept apart from the command handlers so the exact wording can be tested
//! without a Discord connection.

use crate::{
    core::outcome::{DeleteOutcome, RegisterOutcome},
    entities::{item_watch, word_watch},
    errors::Result,
};
use std::fmt::Write;

/// Reply when a pattern is blank.
pub const INVALID_PATTERN: &str = "Please provide a non-empty pattern to watch for.";

/// Reply when a command is used outside a server.
pub const NOT_IN_GUILD: &str = "Watches can only be used inside a server channel.";

/// Reply when the caller has nothing registered in the channel.
pub const NO_ACTIVE_WATCHES: &str = "You have no active watches in this channel.";

/// Reply to the `watch` command.
#[must_use]
pub fn word_register_reply(outcome: &RegisterOutcome) -> String {
    match outcome {
        RegisterOutcome::Registered { pattern } => {
            format!("Watch set for '{pattern}' in this channel.")
        }
        RegisterOutcome::AlreadyWatching { pattern } => {
            format!("You're already watching for '{pattern}' in this channel.")
        }
    }
}

/// Reply to the `bk-watch` command, echoing the one-shot flag.
#[must_use]
pub fn item_register_reply(outcome: &RegisterOutcome, delete_after_match: bool) -> String {
    match outcome {
        RegisterOutcome::Registered { pattern } => format!(
            "Watch set for items matching '{pattern}' in this channel{}.",
            if delete_after_match {
                " (will be deleted after first match)"
            } else {
                ""
            }
        ),
        RegisterOutcome::AlreadyWatching { pattern } => {
            format!("You're already watching for items matching '{pattern}' in this channel.")
        }
    }
}

fn enumerate_watches<I>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = String>,
{
    let mut response = String::from("Your active watches in this channel:");
    let mut any = false;
    for (index, line) in lines.into_iter().enumerate() {
        write!(&mut response, "\n{}. {line}", index + 1)?;
        any = true;
    }
    if !any {
        return Ok(NO_ACTIVE_WATCHES.to_string());
    }
    Ok(response)
}

/// 1-indexed list of word watches, or the empty notice.
pub fn word_watch_list_reply(watches: &[word_watch::Model]) -> Result<String> {
    enumerate_watches(watches.iter().map(|watch| format!("\"{}\"", watch.word)))
}

/// 1-indexed list of item watches with their one-shot annotation, or the empty notice.
pub fn item_watch_list_reply(watches: &[item_watch::Model]) -> Result<String> {
    enumerate_watches(watches.iter().map(|watch| {
        format!(
            "\"{}\"{}",
            watch.item_pattern,
            if watch.delete_after_match {
                " (deletes after match)"
            } else {
                ""
            }
        )
    }))
}

/// Reply to deleting a single watch.
#[must_use]
pub fn delete_reply(outcome: &DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted { pattern } => format!("Deleted watch for '{pattern}'."),
        DeleteOutcome::NotFound { pattern } => format!("No watch found for '{pattern}'."),
    }
}

/// Reply to deleting every watch in the channel.
#[must_use]
pub fn delete_all_reply(count: u64) -> String {
    if count == 0 {
        return "You had no watches in this channel.".to_string();
    }
    format!(
        "Deleted all your watches in this channel ({count} {}).",
        if count == 1 { "watch" } else { "watches" }
    )
}

/// Channel notification for a matched word watch.
#[must_use]
pub fn word_notification(mention: &str, word: &str) -> String {
    format!("{mention}, your BK'd item '{word}' was found!")
}

/// Channel notification for a matched item watch.
#[must_use]
pub fn item_notification(mention: &str, pattern: &str, item_name: &str) -> String {
    format!("{mention}, an item matching '{pattern}' was found: {item_name}")
}

/// Generic reply for an unexpected failure, by command name. Never includes the error.
#[must_use]
pub fn command_failure_reply(command_name: &str) -> &'static str {
    match command_name {
        "watch" | "bk-watch" => "An error occurred while setting the watch.",
        "watch-list" | "bk-watch-list" => "An error occurred while listing watches.",
        "watch-delete" | "bk-watch-delete" => "An error occurred while deleting the watch(es).",
        _ => "An error occurred.",
    }
}
