//! Results of watch writes that are reported back to the user.

/// What happened when a watch was registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new row was stored
    Registered {
        /// The normalized pattern that was stored
        pattern: String,
    },
    /// An identical watch already existed; nothing was written
    AlreadyWatching {
        /// The normalized pattern that was requested
        pattern: String,
    },
}

/// What happened when a single watch was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A row was removed
    Deleted {
        /// The normalized pattern that was removed
        pattern: String,
    },
    /// No row matched
    NotFound {
        /// The normalized pattern that was requested
        pattern: String,
    },
}

impl RegisterOutcome {
    /// The normalized pattern, whatever the outcome.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Registered { pattern } | Self::AlreadyWatching { pattern } => pattern,
        }
    }
}
