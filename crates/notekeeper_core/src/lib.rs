//! Notes/users persistence core for notekeeper.
//! Repository over SQLite plus a transactional service facade.

pub mod config;
pub mod db;
pub mod error;
pub mod id;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, NotekeeperConfig};
pub use db::{Database, DbError, TransactionManager};
pub use error::{AppError, AppErrorKind, AppResult, ErrorKey};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{NewNoteInput, Note};
pub use model::user::{NewUserInput, User};
pub use repo::notes_repo::{NotesRepository, SqliteNotesRepository};
pub use repo::{RepoError, RepoResult};
pub use service::notes_service::{DatabaseBackedNotesService, NotesService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
