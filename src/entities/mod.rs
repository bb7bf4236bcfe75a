//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod item_watch;
pub mod word_watch;

// Re-export specific types to avoid conflicts
pub use item_watch::{Column as ItemWatchColumn, Entity as ItemWatch, Model as ItemWatchModel};
pub use word_watch::{Column as WordWatchColumn, Entity as WordWatch, Model as WordWatchModel};
