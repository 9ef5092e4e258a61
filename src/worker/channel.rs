use std::any::Any;

use rusqlite::types::Value;
use tokio::sync::oneshot;

use crate::error::SqliteAdapterError;
use crate::results::{DbRow, ResultSet};

pub(super) type BoxedResponse = Result<Box<dyn Any + Send>, SqliteAdapterError>;
pub(super) type BoxedCallback = Box<dyn FnOnce(&mut rusqlite::Connection) -> BoxedResponse + Send>;

/// One request to the worker thread.
///
/// Each variant carries the oneshot the worker answers exactly once; that
/// reply is the operation's completion signal.
pub(super) enum Command {
    Execute {
        sql: String,
        params: Vec<Value>,
        respond_to: oneshot::Sender<Result<i64, SqliteAdapterError>>,
    },
    FetchOne {
        sql: String,
        params: Vec<Value>,
        respond_to: oneshot::Sender<Result<Option<DbRow>, SqliteAdapterError>>,
    },
    FetchMany {
        sql: String,
        params: Vec<Value>,
        respond_to: oneshot::Sender<Result<ResultSet, SqliteAdapterError>>,
    },
    ExecutePrepared {
        sql: String,
        param_sets: Vec<Vec<Value>>,
        respond_to: oneshot::Sender<Result<(), SqliteAdapterError>>,
    },
    WithConnection {
        callback: BoxedCallback,
        respond_to: oneshot::Sender<BoxedResponse>,
    },
    Shutdown,
}
