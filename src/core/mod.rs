//! Core business logic - framework-agnostic watch storage, matching and reply text.

/// Read-through cache of word watches per scope
pub mod cache;
/// Item watches and item-found matching
pub mod item_watch;
/// Matching messages against word watches
pub mod matching;
/// Reply and notification text
pub mod messages;
/// Outcomes of watch writes
pub mod outcome;
/// Pattern normalization
pub mod pattern;
/// Guild/channel scope
pub mod scope;
/// Word watches
pub mod word_watch;

pub use outcome::{DeleteOutcome, RegisterOutcome};
pub use scope::Scope;
