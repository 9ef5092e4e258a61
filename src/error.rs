use thiserror::Error;

/// Errors produced by adapter operations.
///
/// Every operation returns `Result<_, SqliteAdapterError>`; failures are
/// values handed back to the caller, never panics across the API boundary.
#[derive(Debug, Error)]
pub enum SqliteAdapterError {
    /// The engine rejected or failed a single statement. The message text is
    /// rusqlite's, unmodified.
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    /// A statement failed mid-batch and the transaction was rolled back.
    /// Carries the failing statement's literal text so callers can tell which
    /// of the batch's statements caused the abort.
    #[error("batch aborted: statement `{statement}` failed: {message}")]
    BatchAbort { statement: String, message: String },

    /// A statement failed mid-batch and the compensating rollback failed too.
    /// The transaction's final state is unknown to the caller.
    #[error("rollback failed after batch abort, transaction state unknown: {message}")]
    RollbackFailed { message: String },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}
