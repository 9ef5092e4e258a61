use std::sync::mpsc::Receiver;

use rusqlite::Connection;
use rusqlite::types::Value;
use tokio::sync::oneshot;

use crate::config::SqliteOptions;
use crate::error::SqliteAdapterError;
use crate::params::values_as_tosql;
use crate::query::build_result_set;
use crate::results::{DbRow, ResultSet};

use super::channel::{BoxedCallback, BoxedResponse, Command};

/// Worker loop: open the database, report the open result once, then answer
/// commands until `Shutdown` or the channel closes. Every command is answered
/// exactly once; a dropped reply receiver means the caller went away.
pub(super) fn run_worker(
    options: &SqliteOptions,
    receiver: &Receiver<Command>,
    open_result: oneshot::Sender<Result<(), SqliteAdapterError>>,
) {
    let mut conn = match open_connection(options) {
        Ok(conn) => {
            if open_result.send(Ok(())).is_err() {
                return;
            }
            conn
        }
        Err(err) => {
            let _ = open_result.send(Err(err));
            return;
        }
    };

    while let Ok(command) = receiver.recv() {
        match command {
            Command::Shutdown => break,
            Command::Execute {
                sql,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(execute(&conn, &sql, &params));
            }
            Command::FetchOne {
                sql,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(fetch_one(&conn, &sql, &params));
            }
            Command::FetchMany {
                sql,
                params,
                respond_to,
            } => {
                let _ = respond_to.send(fetch_many(&conn, &sql, &params));
            }
            Command::ExecutePrepared {
                sql,
                param_sets,
                respond_to,
            } => {
                let _ = respond_to.send(execute_prepared(&conn, &sql, &param_sets));
            }
            Command::WithConnection {
                callback,
                respond_to,
            } => {
                let _ = respond_to.send(run_custom_callback(&mut conn, callback));
            }
        }
    }
}

fn open_connection(options: &SqliteOptions) -> Result<Connection, SqliteAdapterError> {
    let conn = Connection::open(options.db_path()).map_err(|err| {
        SqliteAdapterError::ConnectionError(format!(
            "failed to open SQLite database at {}: {err}",
            options.db_path()
        ))
    })?;
    if let Some(pragmas) = options.pragma_sql() {
        conn.execute_batch(&pragmas).map_err(|err| {
            SqliteAdapterError::ConnectionError(format!("failed to apply open pragmas: {err}"))
        })?;
    }
    tracing::debug!(db_path = options.db_path(), "opened SQLite session");
    Ok(conn)
}

fn execute(conn: &Connection, sql: &str, params: &[Value]) -> Result<i64, SqliteAdapterError> {
    let mut stmt = conn.prepare_cached(sql)?;
    let param_refs = values_as_tosql(params);
    stmt.execute(&param_refs[..])?;
    Ok(conn.last_insert_rowid())
}

fn fetch_one(
    conn: &Connection,
    sql: &str,
    params: &[Value],
) -> Result<Option<DbRow>, SqliteAdapterError> {
    let mut stmt = conn.prepare(sql)?;
    let result_set = build_result_set(&mut stmt, params)?;
    Ok(result_set.into_first())
}

fn fetch_many(
    conn: &Connection,
    sql: &str,
    params: &[Value],
) -> Result<ResultSet, SqliteAdapterError> {
    let mut stmt = conn.prepare(sql)?;
    build_result_set(&mut stmt, params)
}

fn execute_prepared(
    conn: &Connection,
    sql: &str,
    param_sets: &[Vec<Value>],
) -> Result<(), SqliteAdapterError> {
    let mut stmt = conn.prepare(sql)?;
    // Per-set failures do not abort the remaining sets; only compile and
    // finalize errors propagate to the caller.
    for set in param_sets {
        let param_refs = values_as_tosql(set);
        if let Err(err) = stmt.execute(&param_refs[..]) {
            tracing::warn!(error = %err, "prepared statement parameter set failed");
        }
    }
    stmt.finalize()?;
    Ok(())
}

fn run_custom_callback(conn: &mut Connection, callback: BoxedCallback) -> BoxedResponse {
    callback(conn)
}
