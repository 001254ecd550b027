//! SQLite storage implementation for locale settings.

mod model;
mod repository;

pub use model::AppSettingDB;
pub use repository::SettingsRepository;

// Re-export trait from core for convenience
pub use bankdemo_core::locale::LocaleStoreTrait;
