//! Bot settings loaded from `config.toml`.
//!
//! Every field has a default, so a missing file is not an error. The
//! `DATABASE_URL` environment variable wins over the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the `SQLite` database, created on first connect.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://watch_buddy.sqlite?mode=rwc";

/// Runtime settings for the bot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `SeaORM` connection string
    pub database_url: String,
    /// Register commands in this guild only (fast updates during development)
    pub dev_guild_id: Option<u64>,
    /// Skip messages written by bots, including our own notifications
    pub ignore_bot_messages: bool,
    /// Keep word watches in memory per channel between messages
    pub cache_watches: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            dev_guild_id: None,
            ignore_bot_messages: true,
            cache_watches: true,
        }
    }
}

/// Parses settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file, falling back to defaults when it does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config file at {}, using default settings.", path.display());
        return Ok(apply_env_overrides(Settings::default()));
    }

    debug!("Loading settings from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    parse_settings(&contents).map(apply_env_overrides)
}

/// Loads settings from the default location (./config.toml)
pub fn load_default_settings() -> Result<Settings> {
    load_settings("config.toml")
}

fn apply_env_overrides(mut settings: Settings) -> Settings {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        settings.database_url = url;
    }
    settings
}
