//! Shared test utilities for the watch bot.
//!
//! This module provides helpers for setting up test databases and building
//! watch models with sensible defaults.

use crate::{
    bot::handlers::notifier::{Notifier, parse_user_id},
    config,
    core::Scope,
    entities,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Guild used by most tests
pub const TEST_GUILD: &str = "111111111111111111";
/// Channel used by most tests
pub const TEST_CHANNEL: &str = "222222222222222222";
/// First test user
pub const ALICE: &str = "333333333333333333";
/// Second test user
pub const BOB: &str = "444444444444444444";

/// Installs a tracing subscriber that writes through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = config::database::create_connection("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// The scope of [`TEST_GUILD`] / [`TEST_CHANNEL`].
#[must_use]
pub fn test_scope() -> Scope {
    Scope::new(TEST_GUILD, TEST_CHANNEL)
}

/// Builds an unsaved word watch in the test scope.
#[must_use]
pub fn word_watch_model(id: i64, user_id: &str, word: &str) -> entities::word_watch::Model {
    entities::word_watch::Model {
        id,
        guild_id: TEST_GUILD.to_string(),
        channel_id: TEST_CHANNEL.to_string(),
        user_id: user_id.to_string(),
        word: word.to_string(),
        created_at: chrono::Utc::now().naive_utc(),
    }
}

/// Builds an unsaved item watch in the test scope.
#[must_use]
pub fn item_watch_model(
    id: i64,
    user_id: &str,
    item_pattern: &str,
    delete_after_match: bool,
) -> entities::item_watch::Model {
    entities::item_watch::Model {
        id,
        guild_id: TEST_GUILD.to_string(),
        channel_id: TEST_CHANNEL.to_string(),
        user_id: user_id.to_string(),
        item_pattern: item_pattern.to_string(),
        delete_after_match,
        created_at: chrono::Utc::now().naive_utc(),
    }
}

#[derive(Debug, Default)]
struct Recorded {
    attempts: usize,
    sent: Vec<(serenity::ChannelId, String)>,
}

/// Notifier that records what would have been posted.
///
/// Mentions render as `<@id>`; IDs that are not snowflakes fail like a real lookup.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    fail_on_attempt: Option<usize>,
    recorded: Mutex<Recorded>,
}

impl RecordingNotifier {
    /// A notifier whose `n`-th send (1-based) fails.
    #[must_use]
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on_attempt: Some(n),
            ..Self::default()
        }
    }

    /// Number of sends attempted, failed ones included.
    #[allow(clippy::unwrap_used)]
    pub fn attempts(&self) -> usize {
        self.recorded.lock().unwrap().attempts
    }

    /// Messages successfully posted, in order.
    #[allow(clippy::unwrap_used)]
    pub fn sent(&self) -> Vec<(serenity::ChannelId, String)> {
        self.recorded.lock().unwrap().sent.clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn mention(&self, user_id: &str) -> Result<String> {
        let id = parse_user_id(user_id)?;
        Ok(format!("<@{id}>"))
    }

    #[allow(clippy::unwrap_used)]
    async fn send(&self, channel_id: serenity::ChannelId, content: String) -> Result<()> {
        let mut recorded = self.recorded.lock().unwrap();
        recorded.attempts += 1;
        if self.fail_on_attempt == Some(recorded.attempts) {
            return Err(Error::from(serenity::Error::Other("send failed")));
        }
        recorded.sent.push((channel_id, content));
        Ok(())
    }
}
