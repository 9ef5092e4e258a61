// Worker-backed connection: a dedicated thread exclusively owns the open
// rusqlite::Connection; async callers send commands over a channel and
// suspend on a oneshot until the worker answers.

mod channel;
mod dispatcher;
mod manager;

use std::fmt;
use std::sync::Arc;

use crate::config::SqliteOptions;
use crate::error::SqliteAdapterError;
use crate::params::convert_params;
use crate::results::{DbRow, ResultSet};
use crate::types::RowValues;

use manager::SqliteWorker;

/// Async handle to a SQLite session owned by a dedicated worker thread.
///
/// Clones share the worker; all SQL issued through any clone runs serially on
/// that thread in arrival order. The worker shuts down when the last handle
/// drops. The handle performs no internal locking: interleaving operations
/// from concurrent tasks on one handle is the caller's responsibility, as SQL
/// transactions are stateful on the underlying session.
#[derive(Clone)]
pub struct SqliteConnection {
    worker: Arc<SqliteWorker>,
}

impl SqliteConnection {
    /// Open a database at `db_path` (a filesystem path or `:memory:`).
    ///
    /// # Errors
    /// Returns `SqliteAdapterError::ConnectionError` if the worker thread
    /// cannot be spawned or the database cannot be opened.
    pub async fn open(db_path: impl Into<String>) -> Result<Self, SqliteAdapterError> {
        Self::open_with(SqliteOptions::new(db_path)).await
    }

    /// Open a database with explicit options (journal mode, busy timeout).
    ///
    /// # Errors
    /// Returns `SqliteAdapterError::ConnectionError` if opening the database
    /// or applying the configured pragmas fails.
    pub async fn open_with(options: SqliteOptions) -> Result<Self, SqliteAdapterError> {
        let worker = SqliteWorker::spawn(options).await?;
        Ok(Self {
            worker: Arc::new(worker),
        })
    }

    /// Execute a mutating statement (INSERT/UPDATE/DELETE) and return the
    /// driver's last-inserted row identifier.
    ///
    /// The identifier is whatever SQLite reports after the statement runs; for
    /// non-insert statements it is passed through unmodified, not synthesized.
    ///
    /// # Errors
    /// Returns the engine's error unmodified in message content if the
    /// statement is rejected or fails.
    pub async fn execute(
        &self,
        sql: &str,
        params: &[RowValues],
    ) -> Result<i64, SqliteAdapterError> {
        let params = convert_params(params);
        self.worker.execute(sql.to_owned(), params).await
    }

    /// Run a statement expected to return at most one row.
    ///
    /// Zero matching rows is `Ok(None)`, never a failure. If more than one row
    /// matches, the first in driver iteration order is returned.
    ///
    /// # Errors
    /// Returns `SqliteAdapterError` if preparing or running the query fails.
    pub async fn fetch_one(
        &self,
        sql: &str,
        params: &[RowValues],
    ) -> Result<Option<DbRow>, SqliteAdapterError> {
        let params = convert_params(params);
        self.worker.fetch_one(sql.to_owned(), params).await
    }

    /// Run a statement expected to return zero or more rows.
    ///
    /// Zero matching rows yields an empty `ResultSet`, never a failure.
    ///
    /// # Errors
    /// Returns `SqliteAdapterError` if preparing or running the query fails.
    pub async fn fetch_many(
        &self,
        sql: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, SqliteAdapterError> {
        let params = convert_params(params);
        self.worker.fetch_many(sql.to_owned(), params).await
    }

    /// Compile `sql` once, apply each parameter set in order against the
    /// compiled statement, then finalize it.
    ///
    /// Compilation failure short-circuits before any set is applied. Failures
    /// of individual sets are logged but not surfaced; compile and finalize
    /// failures are the reported failure points. The order sets are applied in
    /// is the input order.
    ///
    /// # Errors
    /// Returns `SqliteAdapterError` if compiling or finalizing the statement
    /// fails.
    pub async fn execute_prepared(
        &self,
        sql: &str,
        param_sets: &[Vec<RowValues>],
    ) -> Result<(), SqliteAdapterError> {
        let sets = param_sets
            .iter()
            .map(|set| convert_params(set))
            .collect::<Vec<_>>();
        self.worker.execute_prepared(sql.to_owned(), sets).await
    }

    /// Run synchronous rusqlite logic directly against the worker-owned
    /// connection.
    ///
    /// # Errors
    /// Propagates any `SqliteAdapterError` the callback returns, or a
    /// `ConnectionError` if the worker is gone.
    pub async fn with_connection<F, R>(&self, func: F) -> Result<R, SqliteAdapterError>
    where
        F: FnOnce(&mut rusqlite::Connection) -> Result<R, SqliteAdapterError> + Send + 'static,
        R: Send + 'static,
    {
        self.worker.with_connection(func).await
    }
}

impl fmt::Debug for SqliteConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteConnection").finish_non_exhaustive()
    }
}
