//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust structs.
//! The uniqueness of a watch key is enforced by a UNIQUE index per table, which is
//! what makes registration an atomic insert-if-absent.

use crate::entities::{ItemWatch, ItemWatchColumn, WordWatch, WordWatchColumn};
use crate::errors::Result;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Establishes a connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {database_url}");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the watch tables and their unique indexes if they do not exist yet.
///
/// Safe to call on every startup.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut word_table = schema.create_table_from_entity(WordWatch);
    word_table.if_not_exists();
    let mut item_table = schema.create_table_from_entity(ItemWatch);
    item_table.if_not_exists();

    db.execute(builder.build(&word_table)).await?;
    db.execute(builder.build(&item_table)).await?;

    let word_index = Index::create()
        .name("idx_unique_word_watch")
        .table(WordWatch)
        .col(WordWatchColumn::GuildId)
        .col(WordWatchColumn::ChannelId)
        .col(WordWatchColumn::UserId)
        .col(WordWatchColumn::Word)
        .unique()
        .if_not_exists()
        .to_owned();
    let item_index = Index::create()
        .name("idx_unique_item_watch")
        .table(ItemWatch)
        .col(ItemWatchColumn::GuildId)
        .col(ItemWatchColumn::ChannelId)
        .col(ItemWatchColumn::UserId)
        .col(ItemWatchColumn::ItemPattern)
        .unique()
        .if_not_exists()
        .to_owned();

    db.execute(builder.build(&word_index)).await?;
    db.execute(builder.build(&item_index)).await?;

    info!("Watch tables and unique indexes ensured.");
    Ok(())
}
