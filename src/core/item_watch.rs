//! Item watch business logic - watches matched against item-found events.
//!
//! Registration, listing and deletion mirror the word watches. Matching is driven
//! from outside through [`check_item_match`], which also consumes one-shot watches.

use crate::{
    core::{
        outcome::{DeleteOutcome, RegisterOutcome},
        pattern::normalize_pattern,
        scope::Scope,
    },
    entities::{ItemWatch, item_watch},
    errors::Result,
};
use sea_orm::{Condition, QueryOrder, Set, TransactionTrait, prelude::*, sea_query::OnConflict};
use tracing::{debug, instrument};

fn in_scope(scope: &Scope) -> Condition {
    Condition::all()
        .add(item_watch::Column::GuildId.eq(scope.guild_id.as_str()))
        .add(item_watch::Column::ChannelId.eq(scope.channel_id.as_str()))
}

/// Registers a watch for items matching `item` in `scope`.
///
/// With `delete_after_match` the watch is removed by the first item-found event
/// that matches it. Duplicate `(scope, user, pattern)` keys are rejected without
/// a write, whatever the flag.
///
/// # Errors
/// Returns `InvalidPattern` for a blank pattern, or a database error.
pub async fn register_item_watch(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
    item: &str,
    delete_after_match: bool,
) -> Result<RegisterOutcome> {
    let item_pattern = normalize_pattern(item)?;

    let watch = item_watch::ActiveModel {
        guild_id: Set(scope.guild_id.clone()),
        channel_id: Set(scope.channel_id.clone()),
        user_id: Set(user_id.to_string()),
        item_pattern: Set(item_pattern.clone()),
        delete_after_match: Set(delete_after_match),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    let inserted = ItemWatch::insert(watch)
        .on_conflict(
            OnConflict::columns([
                item_watch::Column::GuildId,
                item_watch::Column::ChannelId,
                item_watch::Column::UserId,
                item_watch::Column::ItemPattern,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    if inserted == 0 {
        return Ok(RegisterOutcome::AlreadyWatching {
            pattern: item_pattern,
        });
    }

    debug!("User {user_id} now watches items matching '{item_pattern}' in {scope}");
    Ok(RegisterOutcome::Registered {
        pattern: item_pattern,
    })
}

/// Lists the item watches `user_id` owns in `scope`, in registration order.
pub async fn list_item_watches(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
) -> Result<Vec<item_watch::Model>> {
    ItemWatch::find()
        .filter(in_scope(scope))
        .filter(item_watch::Column::UserId.eq(user_id))
        .order_by_asc(item_watch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes the caller's item watch for `item` in `scope`.
///
/// A blank pattern is reported as not found.
pub async fn delete_item_watch(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
    item: &str,
) -> Result<DeleteOutcome> {
    if item.trim().is_empty() {
        return Ok(DeleteOutcome::NotFound {
            pattern: item.to_lowercase(),
        });
    }
    let item_pattern = normalize_pattern(item)?;

    let result = ItemWatch::delete_many()
        .filter(in_scope(scope))
        .filter(item_watch::Column::UserId.eq(user_id))
        .filter(item_watch::Column::ItemPattern.eq(item_pattern.as_str()))
        .exec(db)
        .await?;

    if result.rows_affected > 0 {
        Ok(DeleteOutcome::Deleted {
            pattern: item_pattern,
        })
    } else {
        Ok(DeleteOutcome::NotFound {
            pattern: item_pattern,
        })
    }
}

/// Deletes every item watch the caller owns in `scope` and returns how many were removed.
pub async fn delete_all_item_watches(
    db: &DatabaseConnection,
    scope: &Scope,
    user_id: &str,
) -> Result<u64> {
    let result = ItemWatch::delete_many()
        .filter(in_scope(scope))
        .filter(item_watch::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Finds the item watches in `scope` that match a found item.
///
/// A watch matches when its pattern is a substring of the lower-cased item name.
/// Watches flagged `delete_after_match` are deleted in the same transaction, and
/// are only returned if this call's delete actually removed the row. Two
/// concurrent events for the same item therefore never both deliver a one-shot
/// watch.
#[instrument(skip(db))]
pub async fn check_item_match(
    db: &DatabaseConnection,
    scope: &Scope,
    item_name: &str,
) -> Result<Vec<item_watch::Model>> {
    let item_name = item_name.to_lowercase();
    let txn = db.begin().await?;

    let candidates = ItemWatch::find()
        .filter(in_scope(scope))
        .order_by_asc(item_watch::Column::Id)
        .all(&txn)
        .await?;

    let mut matched = Vec::new();
    for watch in candidates
        .into_iter()
        .filter(|watch| item_name.contains(watch.item_pattern.as_str()))
    {
        if watch.delete_after_match {
            let removed = ItemWatch::delete_by_id(watch.id).exec(&txn).await?;
            if removed.rows_affected == 0 {
                debug!("One-shot watch {} already consumed", watch.id);
                continue;
            }
        }
        matched.push(watch);
    }

    txn.commit().await?;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_register_item_watch_with_flag() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();

        let outcome = register_item_watch(&db, &scope, ALICE, "Hookshot", true).await?;
        assert_eq!(outcome.pattern(), "hookshot");
        assert!(matches!(outcome, RegisterOutcome::Registered { .. }));

        let watches = list_item_watches(&db, &scope, ALICE).await?;
        assert_eq!(watches.len(), 1);
        assert_eq!(watches[0].item_pattern, "hookshot");
        assert!(watches[0].delete_after_match);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_item_watch_keeps_original_flag() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();

        register_item_watch(&db, &scope, ALICE, "bow", false).await?;
        let again = register_item_watch(&db, &scope, ALICE, "BOW", true).await?;
        assert_eq!(
            again,
            RegisterOutcome::AlreadyWatching {
                pattern: "bow".to_string()
            }
        );

        let watches = list_item_watches(&db, &scope, ALICE).await?;
        assert_eq!(watches.len(), 1);
        assert!(!watches[0].delete_after_match);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_watch_outcomes() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();
        register_item_watch(&db, &scope, ALICE, "bombs", false).await?;

        let missing = delete_item_watch(&db, &scope, ALICE, "arrows").await?;
        assert_eq!(
            missing,
            DeleteOutcome::NotFound {
                pattern: "arrows".to_string()
            }
        );

        let blank = delete_item_watch(&db, &scope, ALICE, "\t").await?;
        assert_eq!(
            blank,
            DeleteOutcome::NotFound {
                pattern: "\t".to_string()
            }
        );
        assert_eq!(list_item_watches(&db, &scope, ALICE).await?.len(), 1);

        let deleted = delete_item_watch(&db, &scope, ALICE, "Bombs").await?;
        assert_eq!(
            deleted,
            DeleteOutcome::Deleted {
                pattern: "bombs".to_string()
            }
        );
        assert!(list_item_watches(&db, &scope, ALICE).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_all_item_watches() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();

        assert_eq!(delete_all_item_watches(&db, &scope, ALICE).await?, 0);

        register_item_watch(&db, &scope, ALICE, "a", false).await?;
        register_item_watch(&db, &scope, ALICE, "b", true).await?;
        register_item_watch(&db, &scope, BOB, "c", false).await?;

        assert_eq!(delete_all_item_watches(&db, &scope, ALICE).await?, 2);
        assert_eq!(list_item_watches(&db, &scope, BOB).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_check_item_match_substring_and_case() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();
        register_item_watch(&db, &scope, ALICE, "sword", false).await?;
        register_item_watch(&db, &scope, BOB, "shield", false).await?;

        let matched = check_item_match(&db, &scope, "Progressive SWORD").await?;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].user_id, ALICE);

        // Persistent watches survive a match
        let again = check_item_match(&db, &scope, "Master Sword").await?;
        assert_eq!(again.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_check_item_match_consumes_one_shot_watches() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();
        register_item_watch(&db, &scope, ALICE, "key", true).await?;
        register_item_watch(&db, &scope, BOB, "key", false).await?;

        let first = check_item_match(&db, &scope, "Small Key").await?;
        assert_eq!(first.len(), 2);

        let second = check_item_match(&db, &scope, "Small Key").await?;
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].user_id, BOB);

        assert!(list_item_watches(&db, &scope, ALICE).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_check_item_match_respects_scope() -> Result<()> {
        let db = setup_test_db().await?;
        let scope = test_scope();
        register_item_watch(&db, &scope, ALICE, "key", true).await?;

        let other_guild = Scope::new("other-guild", TEST_CHANNEL);
        assert!(check_item_match(&db, &other_guild, "Small Key").await?.is_empty());

        // The one-shot watch is still there for its own scope
        assert_eq!(check_item_match(&db, &scope, "Small Key").await?.len(), 1);

        Ok(())
    }
}
