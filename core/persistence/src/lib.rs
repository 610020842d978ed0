//! FILENAME: core/persistence/src/lib.rs
//! Container Registry Persistence Module
//!
//! Stores container records in a single SQLite table.

mod error;
mod sqlite_store;

pub use error::PersistenceError;
pub use sqlite_store::{SqliteStore, TABLE_NAME};

/// Default data file name, relative to the application data directory.
pub const DEFAULT_DATABASE_FILE: &str = "containers.db";
