/// Database connection and table creation
pub mod database;

/// Bot settings from config.toml and the environment
pub mod settings;

pub use settings::Settings;
