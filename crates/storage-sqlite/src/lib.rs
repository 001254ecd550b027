//! SQLite storage implementation for the banking demo.
//!
//! This crate provides the durable persistence collaborator of
//! `bankdemo-core`: a key-value `app_settings` table accessed through Diesel
//! with an r2d2 pool and embedded migrations.
//!
//! ```text
//! core (LocaleStoreTrait)
//!          │
//!          ▼
//!  storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod settings;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use settings::SettingsRepository;

// Re-export from bankdemo-core for convenience
pub use bankdemo_core::errors::{DatabaseError, Error, Result};
