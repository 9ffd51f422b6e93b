//! Shared, thread-safe handle over one migrated SQLite connection.

use super::migrations::current_version;
use super::{open_db, open_db_in_memory, DbResult};
use log::warn;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Cloneable database handle.
///
/// Clones share the same connection; each unit of work holds the lock for
/// the lifetime of its transaction. A panic inside a unit of work does not
/// disable the handle: the transaction is rolled back during unwind and the
/// next caller takes the lock over.
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl Database {
    /// Opens (or creates) a database file with migrations applied.
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> DbResult<Self> {
        let path = path.as_ref();
        let conn = open_db(path, busy_timeout)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory database with migrations applied.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps an already bootstrapped connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        }
    }

    /// Backing file path, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Schema version recorded in `PRAGMA user_version`.
    pub fn schema_version(&self) -> DbResult<u32> {
        let conn = self.lock();
        current_version(&conn)
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| {
            warn!("event=db_lock module=db status=recovered reason=poisoned");
            self.conn.clear_poison();
            poisoned.into_inner()
        })
    }
}
