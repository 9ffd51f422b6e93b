//! Transaction scope contract and its SQLite implementation.
//!
//! # Invariants
//! - `work` receives the one transaction for the whole unit of work; nested
//!   repository calls reuse it by taking the same handle.
//! - Commit happens only when `work` returns `Ok`; any `Err` rolls back.
//! - Transactions are never shared across independent top-level calls.
//! - Write scopes begin `IMMEDIATE`; read scopes begin `DEFERRED` and never
//!   take the write lock, so they proceed while another writer is active.

use super::{Database, DbError};
use log::{debug, warn};
use rusqlite::{Transaction, TransactionBehavior};

/// Runs a closure inside a transaction scope.
pub trait TransactionManager {
    /// Begins a write transaction, runs `work` on it, then commits on `Ok`
    /// or rolls back on `Err`.
    ///
    /// Begin/commit failures are converted into `E` through `DbError`.
    fn within_transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<DbError>;

    /// Same contract as [`within_transaction`](Self::within_transaction) for
    /// units of work that only read.
    fn within_read_transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<DbError>;
}

impl TransactionManager for Database {
    fn within_transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<DbError>,
    {
        run_scoped(self, "write", TransactionBehavior::Immediate, work)
    }

    fn within_read_transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<DbError>,
    {
        run_scoped(self, "read", TransactionBehavior::Deferred, work)
    }
}

fn run_scoped<T, E, F>(
    db: &Database,
    scope: &str,
    behavior: TransactionBehavior,
    work: F,
) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<DbError>,
{
    let mut conn = db.lock();
    let tx = conn
        .transaction_with_behavior(behavior)
        .map_err(DbError::from)?;

    match work(&tx) {
        Ok(value) => {
            tx.commit().map_err(DbError::from)?;
            debug!("event=tx_end module=db status=commit scope={scope}");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!("event=tx_end module=db status=rollback_failed scope={scope} error={rollback_err}");
            } else {
                debug!("event=tx_end module=db status=rollback scope={scope}");
            }
            Err(err)
        }
    }
}
