//! The guild/channel pair every watch is bound to.

use std::fmt;

/// Bounds which messages and item events a watch is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    /// Discord guild ID
    pub guild_id: String,
    /// Discord channel ID
    pub channel_id: String,
}

impl Scope {
    /// Builds a scope from anything that renders as an ID (snowflakes, strings).
    pub fn new(guild_id: impl ToString, channel_id: impl ToString) -> Self {
        Self {
            guild_id: guild_id.to_string(),
            channel_id: channel_id.to_string(),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.guild_id, self.channel_id)
    }
}
