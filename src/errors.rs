//! Unified error types and result handling.
//!
//! Business conditions such as a duplicate watch or a missing one are not errors;
//! they are reported to the user as plain replies. Everything in here is an
//! unexpected failure that ends up in the framework's error handler.

use thiserror::Error;

/// All errors that can occur in the watch bot.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Storage failure reported by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Failure talking to Discord
    #[error("Serenity/Poise framework error: {0}")]
    Discord(Box<poise::serenity_prelude::Error>),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Failure while building a reply string
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// A watch pattern that cannot be stored (empty or whitespace-only)
    #[error("Invalid watch pattern: {message}")]
    InvalidPattern {
        /// Why the pattern was rejected
        message: String,
    },

    /// A stored Discord identifier that is not a valid snowflake
    #[error("Invalid Discord id: '{value}'")]
    InvalidId {
        /// The offending value
        value: String,
    },

    /// A guild-scoped operation was invoked outside a guild
    #[error("Command used outside a guild")]
    NotInGuild,
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Discord(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
