use crate::error::SqliteAdapterError;
use crate::worker::SqliteConnection;

/// Terminal state of one batch execution. A batch reaches exactly one of
/// these and the outcome is reported exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchOutcome {
    Committed,
    RolledBack,
    RollbackFailed,
}

impl SqliteConnection {
    /// Execute `statements` as a single atomic unit: all succeed or none take
    /// effect.
    ///
    /// The effective sequence is `BEGIN`, the caller's statements in order,
    /// then `COMMIT`, executed serially with each statement awaited before the
    /// next is issued. On the first failure a compensating `ROLLBACK` is
    /// issued against the same connection. An empty statement list runs a
    /// no-op transaction and succeeds.
    ///
    /// # Errors
    /// - [`SqliteAdapterError::BatchAbort`] if a statement failed and the
    ///   rollback succeeded; the message carries the failing statement's
    ///   literal text alongside the engine's error.
    /// - [`SqliteAdapterError::RollbackFailed`] if the rollback itself failed;
    ///   the transaction's final state is then unknown to the caller.
    pub async fn run_batch<S>(&self, statements: &[S]) -> Result<(), SqliteAdapterError>
    where
        S: AsRef<str>,
    {
        tracing::debug!(statements = statements.len(), "batch starting");
        let sequence = std::iter::once("BEGIN")
            .chain(statements.iter().map(|s| s.as_ref()))
            .chain(std::iter::once("COMMIT"));

        for sql in sequence {
            if let Err(cause) = self.execute(sql, &[]).await {
                let (outcome, err) = self.roll_back(sql, &cause).await;
                tracing::warn!(?outcome, statement = sql, "batch aborted");
                return Err(err);
            }
        }

        tracing::debug!(outcome = ?BatchOutcome::Committed, "batch finished");
        Ok(())
    }

    /// Issue the compensating rollback after a mid-batch failure and map the
    /// pair of errors into the reported diagnostic.
    async fn roll_back(
        &self,
        statement: &str,
        cause: &SqliteAdapterError,
    ) -> (BatchOutcome, SqliteAdapterError) {
        match self.execute("ROLLBACK", &[]).await {
            Ok(_) => (
                BatchOutcome::RolledBack,
                SqliteAdapterError::BatchAbort {
                    statement: statement.to_owned(),
                    message: cause.to_string(),
                },
            ),
            Err(rollback_err) => (
                BatchOutcome::RollbackFailed,
                SqliteAdapterError::RollbackFailed {
                    message: rollback_err.to_string(),
                },
            ),
        }
    }
}
