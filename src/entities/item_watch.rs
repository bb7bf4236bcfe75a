//! Item watch entity - A user's request to be pinged when a matching item is found.
//!
//! Item watches are matched against item-found events rather than chat messages.
//! A watch with `delete_after_match` set is consumed by the first match.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item watch database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bk_watches")]
pub struct Model {
    /// Unique identifier, also the insertion order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord guild the watch is scoped to
    pub guild_id: String,
    /// Discord channel the watch is scoped to
    pub channel_id: String,
    /// Discord user ID of the owner
    pub user_id: String,
    /// Lower-cased substring to look for in item names
    pub item_pattern: String,
    /// Remove the watch once it has matched
    pub delete_after_match: bool,
    /// When the watch was registered
    pub created_at: DateTime,
}

/// Item watches have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
