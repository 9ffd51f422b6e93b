//! SQLite storage bootstrap, shared handle and transaction scope.
//!
//! # Responsibility
//! - Open and configure SQLite connections for notekeeper core.
//! - Apply schema migrations in deterministic order.
//! - Run units of work inside one transaction (commit on `Ok`, rollback
//!   on `Err`).
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations succeed.
//! - The active transaction is passed explicitly; nothing is stashed in
//!   globals or thread-locals.

use thiserror::Error;

mod database;
pub mod migrations;
mod open;
mod transaction;

pub use database::Database;
pub use open::{open_db, open_db_in_memory, DEFAULT_BUSY_TIMEOUT};
pub use transaction::TransactionManager;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}
