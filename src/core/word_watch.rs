//! Word watch business logic - registering, listing and deleting word watches.
//!
//! All functions are framework-agnostic; the bot layer turns their outcomes into replies.
//! Uniqueness of `(scope, user, word)` is enforced by the database, so registration
//! is a single insert-if-absent statement with no separate existence check.

use crate::{
    core::{
        outcome::{DeleteOutcome, RegisterOutcome},
        pattern::normalize_pattern,
        scope::Scope,
    },
    entities::{WordWatch, word_watch},
    errors::Result,
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*, sea_query::OnConflict};
use tracing::debug;

fn in_scope(scope: &Scope) -> Condition {
    Condition::all()
        .add(word_watch::Column::GuildId.eq(scope.guild_id.as_str()))
        .add(word_watch::Column::ChannelId.eq(scope.channel_id.as_str()))
}

/// Registers a watch for `word` in `scope` on behalf of `user_id`.
///
/// The word is lower-cased before storage. Registering the same word twice
/// returns [`RegisterOutcome::AlreadyWatching`] and leaves storage untouched.
///
/// # Errors
/// Returns `InvalidPattern` for a blank word, or a database error.
pub async fn register_word_watch(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
    word: &str,
) -> Result<RegisterOutcome> {
    let word = normalize_pattern(word)?;

    let watch = word_watch::ActiveModel {
        guild_id: Set(scope.guild_id.clone()),
        channel_id: Set(scope.channel_id.clone()),
        user_id: Set(user_id.to_string()),
        word: Set(word.clone()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    let inserted = WordWatch::insert(watch)
        .on_conflict(
            OnConflict::columns([
                word_watch::Column::GuildId,
                word_watch::Column::ChannelId,
                word_watch::Column::UserId,
                word_watch::Column::Word,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    if inserted == 0 {
        debug!("User {user_id} already watches '{word}' in {scope}");
        return Ok(RegisterOutcome::AlreadyWatching { pattern: word });
    }

    debug!("User {user_id} now watches '{word}' in {scope}");
    Ok(RegisterOutcome::Registered { pattern: word })
}

/// Lists the word watches `user_id` owns in `scope`, in registration order.
pub async fn list_word_watches(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
) -> Result<Vec<word_watch::Model>> {
    WordWatch::find()
        .filter(in_scope(scope))
        .filter(word_watch::Column::UserId.eq(user_id))
        .order_by_asc(word_watch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes the caller's watch for `word` in `scope`.
///
/// The outcome is decided by the number of rows the delete removed, not by an
/// earlier lookup. A blank word can never have been stored, so it is reported
/// as not found without touching storage.
pub async fn delete_word_watch(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
    word: &str,
) -> Result<DeleteOutcome> {
    if word.trim().is_empty() {
        return Ok(DeleteOutcome::NotFound {
            pattern: word.to_lowercase(),
        });
    }
    let word = normalize_pattern(word)?;

    let result = WordWatch::delete_many()
        .filter(in_scope(scope))
        .filter(word_watch::Column::UserId.eq(user_id))
        .filter(word_watch::Column::Word.eq(word.as_str()))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        Ok(DeleteOutcome::Deleted { pattern: word })
    } else {
        Ok(DeleteOutcome::NotFound { pattern: word })
    }
}

/// Deletes every word watch the caller owns in `scope` and returns how many were removed.
pub async fn delete_all_word_watches(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
) -> Result<u64> {
    let result = WordWatch::delete_many()
        .filter(in_scope(scope))
        .filter(word_watch::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Every word watch in `scope`, whoever owns it.
///
/// This is what an incoming message is matched against.
pub async fn watches_in_scope(
    db: &DatabaseConnection,
    scope: &Scope,
) -> Result<Vec<word_watch::Model>> {
    WordWatch::find()
        .filter(in_scope(scope))
        .order_by_asc(word_watch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
