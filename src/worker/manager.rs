use std::sync::mpsc::{self, Sender};
use std::thread;

use rusqlite::types::Value;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::config::SqliteOptions;
use crate::error::SqliteAdapterError;
use crate::results::{DbRow, ResultSet};

use super::channel::{BoxedCallback, Command};
use super::dispatcher::run_worker;

pub(super) struct SqliteWorker {
    sender: Sender<Command>,
}

impl SqliteWorker {
    /// Spawn the worker thread and wait for it to open the database.
    pub(super) async fn spawn(options: SqliteOptions) -> Result<Self, SqliteAdapterError> {
        let (sender, receiver) = mpsc::channel::<Command>();
        let (open_tx, open_rx) = oneshot::channel();
        let handle = Handle::try_current().ok();
        thread::Builder::new()
            .name("sqlite-adapter-worker".to_string())
            .spawn(move || {
                let runtime_guard = handle.as_ref().map(|h| h.enter());
                run_worker(&options, &receiver, open_tx);
                drop(runtime_guard);
            })
            .map_err(|err| {
                SqliteAdapterError::ConnectionError(format!(
                    "failed to spawn SQLite worker thread: {err}"
                ))
            })?;

        match open_rx.await {
            Ok(Ok(())) => Ok(Self { sender }),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(connection_error(
                "SQLite worker exited before reporting open result",
            )),
        }
    }

    pub(super) fn send_command(&self, command: Command) -> Result<(), SqliteAdapterError> {
        self.sender
            .send(command)
            .map_err(|_| connection_error("SQLite worker closed"))
    }

    pub(super) async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, SqliteAdapterError>>) -> Command,
        drop_message: &'static str,
    ) -> Result<T, SqliteAdapterError> {
        let (tx, rx) = oneshot::channel();
        self.send_command(build(tx))?;
        rx.await.map_err(|_| connection_error(drop_message))?
    }

    pub(super) async fn execute(
        &self,
        sql: String,
        params: Vec<Value>,
    ) -> Result<i64, SqliteAdapterError> {
        self.request(
            |respond_to| Command::Execute {
                sql,
                params,
                respond_to,
            },
            "SQLite worker dropped while executing statement",
        )
        .await
    }

    pub(super) async fn fetch_one(
        &self,
        sql: String,
        params: Vec<Value>,
    ) -> Result<Option<DbRow>, SqliteAdapterError> {
        self.request(
            |respond_to| Command::FetchOne {
                sql,
                params,
                respond_to,
            },
            "SQLite worker dropped while fetching row",
        )
        .await
    }

    pub(super) async fn fetch_many(
        &self,
        sql: String,
        params: Vec<Value>,
    ) -> Result<ResultSet, SqliteAdapterError> {
        self.request(
            |respond_to| Command::FetchMany {
                sql,
                params,
                respond_to,
            },
            "SQLite worker dropped while fetching rows",
        )
        .await
    }

    pub(super) async fn execute_prepared(
        &self,
        sql: String,
        param_sets: Vec<Vec<Value>>,
    ) -> Result<(), SqliteAdapterError> {
        self.request(
            |respond_to| Command::ExecutePrepared {
                sql,
                param_sets,
                respond_to,
            },
            "SQLite worker dropped while executing prepared statement",
        )
        .await
    }

    pub(super) async fn with_connection<F, R>(&self, func: F) -> Result<R, SqliteAdapterError>
    where
        F: FnOnce(&mut rusqlite::Connection) -> Result<R, SqliteAdapterError> + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let callback: BoxedCallback = Box::new(move |conn| {
            func(conn).map(|value| Box::new(value) as Box<dyn std::any::Any + Send>)
        });
        self.send_command(Command::WithConnection {
            callback,
            respond_to: tx,
        })?;
        match rx.await {
            Ok(Ok(payload)) => payload.downcast::<R>().map(|boxed| *boxed).map_err(|_| {
                SqliteAdapterError::ExecutionError(
                    "SQLite worker response downcast failure".into(),
                )
            }),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(connection_error(
                "SQLite worker dropped while handling custom callback",
            )),
        }
    }
}

impl Drop for SqliteWorker {
    fn drop(&mut self) {
        let _ = self.sender.send(Command::Shutdown);
    }
}

fn connection_error(message: &str) -> SqliteAdapterError {
    SqliteAdapterError::ConnectionError(message.into())
}
