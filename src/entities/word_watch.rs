//! Word watch entity - A user's request to be pinged when a word shows up in a channel.
//!
//! Each row binds a scope (guild + channel), an owner and a lower-cased word.
//! The `(guild_id, channel_id, user_id, word)` tuple is unique; the index is created
//! alongside the table in [`crate::config::database::create_tables`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Word watch database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "watches")]
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
    /// Lower-cased substring to look for in messages
    pub word: String,
    /// When the watch was registered
    pub created_at: DateTime,
}

/// Word watches have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
